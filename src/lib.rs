//! A simulated command-line terminal for a personal portfolio.
//!
//! The crate answers a fixed set of shell-like commands (`ls`, `cd`, `cat`,
//! `cowsay`, `sl`, ...) with canned responses, some of them built from a
//! single [`PortfolioRecord`] document. Nothing here touches a real
//! filesystem: the "terminal" is a table of command names mapped to
//! formatters over literal text and the record.
//!
//! The core is [`interpret`], a pure function of the current
//! [`SessionState`], the transcript and the record. [`Terminal`] owns one
//! session, applies interpreter replies to it and drives the one timed
//! command, the `sl` train animation. The [`showcase`] module renders the
//! conventional portfolio page backed by the same record.

mod animation;
mod builtin;
pub mod command;
pub mod completion;
pub mod config;
mod content;
pub mod error;
mod interpreter;
pub mod portfolio;
pub mod render;
pub mod session;
pub mod showcase;
mod terminal;

pub use command::{Builtin, Effect, Fault, HandlerKind, Navigation, Output, Reply, Route};
pub use config::{Identity, Timing, TerminalConfig};
pub use error::TerminalError;
pub use interpreter::{Context, interpret};
pub use portfolio::{ContentStore, JsonFileStore, MemoryStore, PortfolioRecord};
pub use session::{
    Classification, Directory, EntryId, Role, Session, SessionState, TranscriptEntry,
};

/// Just a convenient re-export of the session owner.
///
/// See [`Terminal`] for mounting a view and submitting lines.
pub use terminal::{Terminal, TranscriptEvent, follow};
