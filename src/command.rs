use crate::interpreter::Context;
use crate::session::{Classification, SessionState};
use rand::RngCore;
use std::time::Duration;
use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Every command the terminal knows, keyed by its (case-insensitive) name.
///
/// Parsing a name goes through [`std::str::FromStr`]; anything that does not
/// parse is an unknown command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Builtin {
    Help,
    About,
    Projects,
    Skills,
    Contact,
    Clear,
    Ls,
    Cd,
    Pwd,
    Mkdir,
    Rm,
    Sudo,
    Cp,
    Mv,
    Cat,
    Grep,
    Man,
    Matrix,
    Sl,
    Cowsay,
    Fortune,
    Whoami,
    Uptime,
    Ps,
    Date,
    History,
    Neofetch,
    Exit,
}

impl Builtin {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn kind(self) -> HandlerKind {
        crate::builtin::handler(self).kind()
    }
}

/// The shape of a command's implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// Renders text from arguments, state and record; changes nothing.
    Formatter,
    /// Changes the session state or the transcript.
    Mutator,
    /// Starts a timed sequence of transcript updates.
    Animator,
    /// Leaves the terminal view.
    Navigator,
}

pub(crate) type FormatFn =
    fn(&Invocation<'_>, &Context<'_>, &mut dyn RngCore) -> Result<Output, Fault>;
pub(crate) type MutateFn =
    fn(&Invocation<'_>, &Context<'_>, &mut SessionState) -> Result<Mutation, Fault>;
pub(crate) type NavigateFn = fn(&Invocation<'_>, &Context<'_>) -> Output;

/// Implementation of one command, tagged by its kind.
pub(crate) enum Handler {
    Format(FormatFn),
    Mutate(MutateFn),
    Animate,
    Navigate(NavigateFn),
}

impl Handler {
    pub(crate) fn kind(&self) -> HandlerKind {
        match self {
            Handler::Format(_) => HandlerKind::Formatter,
            Handler::Mutate(_) => HandlerKind::Mutator,
            Handler::Animate => HandlerKind::Animator,
            Handler::Navigate(_) => HandlerKind::Navigator,
        }
    }
}

/// Result of a state-changing command.
pub(crate) struct Mutation {
    pub output: Option<Output>,
    pub effect: Effect,
}

impl Mutation {
    pub(crate) fn output(output: Output) -> Self {
        Self {
            output: Some(output),
            effect: Effect::None,
        }
    }
}

/// A parsed input line: lower-cased command name plus raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: String,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Split a line on whitespace. Blank lines yield `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?.to_lowercase();
        Some(Self {
            name,
            args: words.collect(),
        })
    }

    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.contains(&flag)
    }
}

/// One block of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub classification: Classification,
    pub verbatim: bool,
}

impl Output {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Success)
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Neutral)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Error)
    }

    /// Mark the output to be shown without the per-character reveal.
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    fn new(text: impl Into<String>, classification: Classification) -> Self {
        Self {
            text: text.into(),
            classification,
            verbatim: false,
        }
    }
}

/// Everything a command can get wrong. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("❌ {command}: {detail}")]
    MissingOperand {
        command: &'static str,
        detail: &'static str,
    },

    #[error("❌ {command}: {target}: No such file or directory")]
    NotFound {
        command: &'static str,
        target: String,
    },

    #[error("❌ cat: {0}: cannot display binary file\n💡 Hint: This is a PDF! Try downloading it instead! 📄")]
    BinaryFile(String),

    #[error("{0}")]
    Refused(String),

    #[error("🚂 Train is already running! Please wait...")]
    TrainRunning,

    #[error(
        "❌ Command not found: {0}\n💡 Did you mean one of these?\n   • help (show all commands)\n   • about (learn about me)\n   • projects (see my work)\n   \n🎯 Type 'help' for the full command list!"
    )]
    CommandNotFound(String),
}

impl Fault {
    pub(crate) fn missing(command: &'static str, detail: &'static str) -> Self {
        Fault::MissingOperand { command, detail }
    }

    pub(crate) fn not_found(command: &'static str, target: impl Into<String>) -> Self {
        Fault::NotFound {
            command,
            target: target.into(),
        }
    }
}

impl From<Fault> for Output {
    fn from(fault: Fault) -> Self {
        Output::error(fault.to_string())
    }
}

/// Views the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Route {
    Landing,
    Terminal,
    Showcase,
}

/// A request to leave the terminal once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub after: Duration,
}

/// Side effects of a reply beyond the state change and appended entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ClearTranscript,
    /// The first output is the initial train frame; run the sequence on it.
    StartTrain,
    Navigate(Navigation),
}

/// What the interpreter decided for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Session state after the command.
    pub state: SessionState,
    /// Prompt plus the typed line, unless the command suppresses its echo.
    pub echo: Option<String>,
    pub outputs: Vec<Output>,
    pub effect: Effect,
    pub fault: Option<Fault>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_names_parse_case_insensitively() {
        assert_eq!(Builtin::from_str("ls"), Ok(Builtin::Ls));
        assert_eq!(Builtin::from_str("NeoFetch"), Ok(Builtin::Neofetch));
        assert_eq!(Builtin::from_str("COWSAY"), Ok(Builtin::Cowsay));
        assert!(Builtin::from_str("xyz").is_err());
        assert!(Builtin::from_str("l").is_err());
    }

    #[test]
    fn test_every_builtin_round_trips_its_name() {
        for builtin in Builtin::iter() {
            assert_eq!(Builtin::from_str(builtin.name()), Ok(builtin));
        }
        assert_eq!(Builtin::iter().count(), 28);
    }

    #[test]
    fn test_handler_kinds() {
        assert_eq!(Builtin::Help.kind(), HandlerKind::Formatter);
        assert_eq!(Builtin::Cd.kind(), HandlerKind::Mutator);
        assert_eq!(Builtin::Clear.kind(), HandlerKind::Mutator);
        assert_eq!(Builtin::Matrix.kind(), HandlerKind::Mutator);
        assert_eq!(Builtin::Sl.kind(), HandlerKind::Animator);
        assert_eq!(Builtin::Exit.kind(), HandlerKind::Navigator);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::from_str("showcase"), Ok(Route::Showcase));
        assert_eq!(Route::from_str("Terminal"), Ok(Route::Terminal));
        assert!(Route::from_str("cli").is_err());
    }

    #[test]
    fn test_invocation_parse() {
        assert_eq!(Invocation::parse("   \t "), None);

        let inv = Invocation::parse("  CowSay  Hello   World ").unwrap();
        assert_eq!(inv.name, "cowsay");
        assert_eq!(inv.args, vec!["Hello", "World"]);
        assert_eq!(inv.arg(1), Some("World"));
        assert_eq!(inv.arg(2), None);
    }

    #[test]
    fn test_has_flag_matches_whole_words() {
        let inv = Invocation::parse("ls docs -l").unwrap();
        assert!(inv.has_flag("-l"));
        assert!(!inv.has_flag("-la"));
    }

    #[test]
    fn test_fault_messages() {
        assert_eq!(
            Fault::missing("mkdir", "missing operand").to_string(),
            "❌ mkdir: missing operand"
        );
        assert_eq!(
            Fault::not_found("cat", "nope").to_string(),
            "❌ cat: nope: No such file or directory"
        );
        assert!(Fault::CommandNotFound("xyz".into()).to_string().contains("xyz"));

        let out: Output = Fault::TrainRunning.into();
        assert_eq!(out.classification, Classification::Error);
        assert!(!out.verbatim);
    }
}
