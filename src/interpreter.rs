use crate::builtin;
use crate::command::{
    Builtin, Effect, Fault, Handler, Invocation, Mutation, Navigation, Output, Reply, Route,
};
use crate::config::{Identity, Timing};
use crate::content;
use crate::portfolio::PortfolioRecord;
use crate::session::{SessionState, TranscriptEntry};
use chrono::{DateTime, Local};
use rand::RngCore;
use std::str::FromStr;
use tracing::debug;

/// Everything a command may read. Nothing in here is mutable.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    /// `None` while the portfolio document has not arrived.
    pub record: Option<&'a PortfolioRecord>,
    pub state: SessionState,
    /// Transcript as it was before the current line.
    pub transcript: &'a [TranscriptEntry],
    pub identity: &'a Identity,
    pub timing: &'a Timing,
    pub now: DateTime<Local>,
}

impl<'a> Context<'a> {
    pub fn new(identity: &'a Identity, timing: &'a Timing) -> Self {
        Self {
            record: None,
            state: SessionState::default(),
            transcript: &[],
            identity,
            timing,
            now: Local::now(),
        }
    }

    pub fn with_record(mut self, record: Option<&'a PortfolioRecord>) -> Self {
        self.record = record;
        self
    }

    pub fn with_state(mut self, state: SessionState) -> Self {
        self.state = state;
        self
    }

    pub fn with_transcript(mut self, transcript: &'a [TranscriptEntry]) -> Self {
        self.transcript = transcript;
        self
    }

    /// Absolute path of the current simulated directory.
    pub fn cwd(&self) -> String {
        self.state.directory.path(&self.identity.home())
    }

    /// Prompt shown before a command, e.g. `akshay@portfolio:/home/akshay$ `.
    pub fn prompt(&self) -> String {
        let cwd = self.cwd();
        let leaf = cwd.rsplit('/').next().unwrap_or_default();
        format!("{}@{}:{}$ ", leaf, self.identity.host, cwd)
    }
}

/// Decide what one input line does.
///
/// This never touches the session: the new state and the entries to append
/// come back in the [`Reply`], and applying them is up to the caller.
pub fn interpret(line: &str, ctx: &Context<'_>, rng: &mut dyn RngCore) -> Reply {
    let echo = format!("{}{}", ctx.prompt(), line);

    let Some(invocation) = Invocation::parse(line) else {
        return Reply {
            state: ctx.state,
            echo: Some(echo),
            outputs: Vec::new(),
            effect: Effect::None,
            fault: None,
        };
    };

    let result = match Builtin::from_str(&invocation.name) {
        Ok(builtin) => {
            debug!(command = builtin.name(), args = invocation.args.len(), "dispatching");
            dispatch(builtin, &invocation, ctx, rng)
        }
        Err(_) => {
            debug!(command = %invocation.name, "unknown command");
            Err(Fault::CommandNotFound(invocation.name.clone()))
        }
    };

    match result {
        Ok((state, mutation)) => Reply {
            state,
            echo: (mutation.effect != Effect::ClearTranscript).then_some(echo),
            outputs: mutation.output.into_iter().collect(),
            effect: mutation.effect,
            fault: None,
        },
        Err(fault) => Reply {
            state: ctx.state,
            echo: Some(echo),
            outputs: vec![Output::from(fault.clone())],
            effect: Effect::None,
            fault: Some(fault),
        },
    }
}

fn dispatch(
    builtin: Builtin,
    invocation: &Invocation<'_>,
    ctx: &Context<'_>,
    rng: &mut dyn RngCore,
) -> Result<(SessionState, Mutation), Fault> {
    let mut state = ctx.state;
    let mutation = match builtin::handler(builtin) {
        Handler::Format(format) => Mutation::output(format(invocation, ctx, rng)?),
        Handler::Mutate(mutate) => mutate(invocation, ctx, &mut state)?,
        Handler::Animate => {
            if state.train_in_flight {
                return Err(Fault::TrainRunning);
            }
            state.train_in_flight = true;
            Mutation {
                output: Some(Output::neutral(content::TRAIN_FRAMES[0]).verbatim()),
                effect: Effect::StartTrain,
            }
        }
        Handler::Navigate(navigate) => Mutation {
            output: Some(navigate(invocation, ctx)),
            effect: Effect::Navigate(Navigation {
                route: Route::Landing,
                after: ctx.timing.exit_delay(),
            }),
        },
    };
    Ok((state, mutation))
}
