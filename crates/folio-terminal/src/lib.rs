//! Command interpreter for the folio portfolio terminal.
//!
//! The [`Terminal`] aggregate owns every piece of interpreter state. Input
//! lines are parsed into a fixed [`CommandKind`] vocabulary and produce
//! renderer-agnostic [`CommandOutput`] values appended to the history.
//! Side effects on the outside world go through the [`Host`] trait and a
//! `folio_store::KeyValueStore`, both bundled in an [`Environment`].

pub mod command;
pub mod contact;
pub mod content;
pub mod cowsay;
pub mod game;
pub mod history;
mod interpreter;
pub mod output;
pub mod prefs;
pub mod render;
#[cfg(test)]
mod test_utils;

/// Parsed command vocabulary.
pub use command::{CommandKind, Invocation, Section};
/// Contact dialogue state and its output artifact.
pub use contact::{ContactForm, ContactStep, ContactSubmission};
/// Static portfolio content.
pub use content::{Content, Identity, Project, SkillCategory};
/// Displayed history.
pub use history::HistoryEntry;
/// Interpreter aggregate and collaborator seams.
pub use interpreter::{
    Environment, Host, NOT_FOUND, Origin, Submission, Terminal, Ticket, help_entries,
};
/// Command results.
pub use output::{CommandOutput, HelpEntry};
/// Persisted preferences.
pub use prefs::{Preferences, Theme, ViewMode};
