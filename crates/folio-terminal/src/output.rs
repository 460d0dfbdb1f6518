//! Renderer-agnostic command results.

use crate::content::{Identity, Project, SkillCategory};
use crate::prefs::{Theme, ViewMode};

/// One row of the `help` panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

/// Output produced by a command or a sub-dialogue step.
///
/// Front ends decide how each kind looks; `render` provides a plain-text
/// rendition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Banner shown by the synthetic `init` entry.
    Welcome { name: String },
    /// Command listing.
    Help(Vec<HelpEntry>),
    About(Identity),
    Projects(Vec<Project>),
    Skills(Vec<SkillCategory>),
    /// Opening lines of the contact sub-dialogue.
    ContactIntro,
    /// Commands entered this session, oldest first.
    History(Vec<String>),
    /// Pre-rendered cowsay art.
    Cowsay(String),
    /// Placeholder answer echoing the question.
    Ask { question: String },
    GameLaunch { title: String },
    /// Unsupported or missing game name.
    GameUsage { available: Vec<String> },
    ProjectLaunch { name: String },
    ThemeSet(Theme),
    ThemeList(Vec<Theme>),
    ViewSwitch(ViewMode),
    /// Neutral informational text.
    Text(String),
    /// Validation failure or usage message.
    Error(String),
    Success { title: String, message: String },
    /// The command name is not in the table.
    NotFound { command: String },
}

impl CommandOutput {
    /// Whether this output reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_) | Self::NotFound { .. } | Self::GameUsage { .. })
    }
}
