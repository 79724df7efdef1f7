//! Per-view session state and the transcript it owns.

use std::collections::BTreeSet;

/// The simulated working directory. Only two places exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directory {
    #[default]
    Home,
    Projects,
}

impl Directory {
    /// Absolute path of this directory under the given home path.
    pub fn path(self, home: &str) -> String {
        match self {
            Directory::Home => home.to_string(),
            Directory::Projects => format!("{home}/projects"),
        }
    }
}

/// The scalar part of a session, handed to the interpreter and returned
/// (possibly changed) in its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub directory: Directory,
    pub matrix_active: bool,
    pub train_in_flight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    CommandEcho,
    Output,
}

/// Display color of an entry; carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Neutral,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub role: Role,
    pub classification: Classification,
    pub rendered: String,
    /// Shown as-is, without the per-character reveal.
    pub verbatim: bool,
}

impl TranscriptEntry {
    /// The command line typed by the user, for command echoes.
    pub fn command_line(&self) -> Option<&str> {
        match self.role {
            Role::CommandEcho => self.rendered.split_once("$ ").map(|(_, line)| line),
            Role::Output => None,
        }
    }
}

/// One open view: its state, transcript and liked projects.
#[derive(Debug, Default)]
pub struct Session {
    pub state: SessionState,
    history: Vec<TranscriptEntry>,
    liked_projects: BTreeSet<String>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[TranscriptEntry] {
        &self.history
    }

    /// Append an entry and return a copy of it with its assigned id.
    pub fn append(
        &mut self,
        role: Role,
        classification: Classification,
        rendered: impl Into<String>,
        verbatim: bool,
    ) -> TranscriptEntry {
        let entry = TranscriptEntry {
            id: EntryId(self.next_id),
            role,
            classification,
            rendered: rendered.into(),
            verbatim,
        };
        self.next_id += 1;
        self.history.push(entry.clone());
        entry
    }

    /// Replace the text of the entry with the given id.
    ///
    /// Returns the updated entry, or `None` when it is no longer in the
    /// transcript (e.g. after `clear`).
    pub fn replace(&mut self, id: EntryId, rendered: impl Into<String>) -> Option<TranscriptEntry> {
        let slot = self.history.iter_mut().find(|e| e.id == id)?;
        slot.rendered = rendered.into();
        Some(slot.clone())
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Flip the like on a project; returns whether it is now liked.
    pub fn toggle_like(&mut self, project: &str) -> bool {
        if self.liked_projects.remove(project) {
            false
        } else {
            self.liked_projects.insert(project.to_string());
            true
        }
    }

    pub fn is_liked(&self, project: &str) -> bool {
        self.liked_projects.contains(project)
    }

    pub fn liked_projects(&self) -> impl Iterator<Item = &str> {
        self.liked_projects.iter().map(String::as_str)
    }
}
