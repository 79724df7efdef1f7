//! Printing transcript events to a terminal.

use crate::config::Timing;
use crate::session::{Classification, Role, TranscriptEntry};
use crate::terminal::TranscriptEvent;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Color of an entry. With `matrix` on, neutral output turns green.
pub fn paint(text: &str, entry: &TranscriptEntry, matrix: bool) -> ColoredString {
    match (entry.role, entry.classification) {
        (Role::CommandEcho, _) => text.bright_white().bold(),
        (Role::Output, Classification::Error) => text.red(),
        (Role::Output, Classification::Success) => text.green(),
        (Role::Output, Classification::Neutral) if matrix => text.bright_green(),
        (Role::Output, Classification::Neutral) => text.normal(),
    }
}

/// Writes events to `out`, revealing non-verbatim entries one character
/// at a time.
pub struct Renderer<W: Write> {
    out: W,
    reveal: Duration,
    matrix: bool,
    echo: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, timing: &Timing) -> Self {
        Self {
            out,
            reveal: timing.reveal_char(),
            matrix: false,
            echo: true,
        }
    }

    /// Skip command echoes, for a line editor that already shows them.
    pub fn without_echo(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn set_matrix(&mut self, on: bool) {
        self.matrix = on;
    }

    pub async fn render(&mut self, event: &TranscriptEvent) -> io::Result<()> {
        match event {
            TranscriptEvent::Appended(entry) if entry.role == Role::CommandEcho && !self.echo => {}
            TranscriptEvent::Appended(entry) if entry.verbatim || self.reveal.is_zero() => {
                writeln!(self.out, "{}", paint(&entry.rendered, entry, self.matrix))?;
            }
            TranscriptEvent::Appended(entry) => self.reveal(entry).await?,
            // Frames are redrawn below; scrollback cannot be rewritten.
            TranscriptEvent::Replaced(entry) => {
                writeln!(self.out, "{}", paint(&entry.rendered, entry, self.matrix))?;
            }
            TranscriptEvent::Cleared => write!(self.out, "{CLEAR_SCREEN}")?,
            TranscriptEvent::AnimationFinished => {}
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    async fn reveal(&mut self, entry: &TranscriptEntry) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for ch in entry.rendered.chars() {
            let piece = ch.encode_utf8(&mut buf);
            write!(self.out, "{}", paint(piece, entry, self.matrix))?;
            self.out.flush()?;
            if !ch.is_whitespace() {
                sleep(self.reveal).await;
            }
        }
        writeln!(self.out)
    }
}
