//! Shared test doubles for interpreter tests.

use folio_store::MemoryStore;

use crate::command::Section;
use crate::contact::ContactSubmission;
use crate::content::Content;
use crate::interpreter::{Environment, Host, Origin, Submission, Terminal};
use crate::prefs::{Preferences, Theme};

/// A host that records every call for assertion.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub modals: Vec<(String, String)>,
    pub scrolls: Vec<Section>,
    pub submissions: Vec<ContactSubmission>,
    pub themes: Vec<Theme>,
}

impl Host for RecordingHost {
    fn open_modal(&mut self, name: &str, url: &str) {
        self.modals.push((name.to_string(), url.to_string()));
    }

    fn scroll_to(&mut self, section: Section) {
        self.scrolls.push(section);
    }

    fn submit_contact(&mut self, submission: &ContactSubmission) {
        self.submissions.push(submission.clone());
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.themes.push(theme);
    }
}

/// Terminal, store and host wired together with zero latency.
pub struct Harness {
    pub terminal: Terminal,
    pub store: MemoryStore,
    pub host: RecordingHost,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        let prefs = Preferences::load(&store);
        Self {
            terminal: Terminal::new(Content::default(), prefs)
                .with_latency(std::time::Duration::ZERO),
            store,
            host: RecordingHost::default(),
        }
    }

    /// Run both phases for typed input.
    pub fn typed(&mut self, line: &str) -> Submission {
        self.run(line, Origin::Typed)
    }

    /// Run both phases for a menu click.
    pub fn click(&mut self, line: &str) -> Submission {
        self.run(line, Origin::MenuClick)
    }

    pub fn run(&mut self, line: &str, origin: Origin) -> Submission {
        let mut env = Environment {
            store: &mut self.store,
            host: &mut self.host,
        };
        self.terminal.execute(line, origin, &mut env)
    }

    /// Immediate phase only.
    pub fn submit(&mut self, line: &str, origin: Origin) -> Submission {
        let mut env = Environment {
            store: &mut self.store,
            host: &mut self.host,
        };
        self.terminal.submit(line, origin, &mut env)
    }

    /// Deferred phase only.
    pub fn complete(&mut self, ticket: crate::interpreter::Ticket) -> bool {
        let mut env = Environment {
            store: &mut self.store,
            host: &mut self.host,
        };
        self.terminal.complete(ticket, &mut env)
    }

    /// Result of the newest history entry.
    pub fn last_output(&self) -> Option<&crate::output::CommandOutput> {
        self.terminal.history().last().and_then(|e| e.result.as_ref())
    }
}
