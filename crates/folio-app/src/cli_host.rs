//! Host collaborators for the line-driven front end.
//!
//! The interpreter calls these while it holds the terminal borrowed, so the
//! host only records what happened; the session prints the notices once the
//! command has finished.

use folio_terminal::{ContactSubmission, Host, Section, Theme};

/// Something the session should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// External-link preview for a project.
    Preview { name: String, url: String },
    /// Normal-view navigation target.
    Scroll(Section),
    /// Theme applied.
    Theme(Theme),
}

/// Host that queues notices for the session.
#[derive(Debug, Default)]
pub struct CliHost {
    notices: Vec<Notice>,
}

impl CliHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued notices.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Host for CliHost {
    fn open_modal(&mut self, name: &str, url: &str) {
        log::debug!("Opening preview for {name}");
        self.notices.push(Notice::Preview {
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    fn scroll_to(&mut self, section: Section) {
        self.notices.push(Notice::Scroll(section));
    }

    fn submit_contact(&mut self, submission: &ContactSubmission) {
        // No delivery backend on the desktop; the log is the sink.
        log::info!(
            "New contact submission: name={:?} email={:?} message={:?}",
            submission.name,
            submission.email,
            submission.message
        );
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.notices.push(Notice::Theme(theme));
    }
}
