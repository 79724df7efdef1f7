//! Command-name suggestions for the line editor.

use crate::content;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Suggested names, most useful first.
const SUGGESTIONS: [&str; 24] = [
    "help", "about", "projects", "skills", "contact", "clear", "ls", "cd", "pwd", "mkdir", "cat",
    "grep", "man", "matrix", "sl", "cowsay", "fortune", "whoami", "uptime", "ps", "date", "exit",
    "neofetch", "history",
];

const MAX_SUGGESTIONS: usize = 3;

/// Up to three command names starting with `prefix`, ignoring case.
pub fn suggest(prefix: &str) -> Vec<&'static str> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let prefix = prefix.to_lowercase();
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|name| name.starts_with(&prefix))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// File names `cat` and friends can be pointed at.
fn suggest_file(prefix: &str) -> Vec<&'static str> {
    content::FILES
        .iter()
        .copied()
        .filter(|name| name.starts_with(prefix))
        .collect()
}

/// rustyline helper: completes the command word and, after it, file names.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHelper;

impl Helper for TerminalHelper {}

impl Completer for TerminalHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let (start, candidates) = match line.rsplit_once(char::is_whitespace) {
            None => (0, suggest(line)),
            Some((_, word)) => (line.len() - word.len(), suggest_file(word)),
        };
        let pairs = candidates
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for TerminalHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.contains(char::is_whitespace) {
            return None;
        }
        suggest(line)
            .first()
            .filter(|name| name.len() > line.len())
            .map(|name| name[line.len()..].to_string())
    }
}

impl Highlighter for TerminalHelper {}

impl Validator for TerminalHelper {}
