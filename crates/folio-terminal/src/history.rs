//! Displayed history and the session command log.

use crate::output::CommandOutput;

/// Input label of the synthetic first entry.
pub const INIT_COMMAND: &str = "init";

/// One displayed (input, result) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    /// `None` while the command's deferred phase is outstanding.
    pub result: Option<CommandOutput>,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, result: CommandOutput) -> Self {
        Self {
            input: input.into(),
            result: Some(result),
        }
    }

    pub fn pending(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            result: None,
        }
    }

    /// Whether this is the synthetic welcome entry.
    pub fn is_init(&self) -> bool {
        self.input == INIT_COMMAND
    }
}

/// Slot reserved for a pending result.
///
/// Carries the history generation it was created in, so a result arriving
/// after the history was replaced is discarded instead of landing on an
/// unrelated entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    generation: u64,
    index: usize,
}

/// Append-only display history, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    welcome: CommandOutput,
    generation: u64,
}

impl History {
    /// Create a history holding only the init entry.
    pub fn new(welcome: CommandOutput) -> Self {
        Self {
            entries: vec![HistoryEntry::new(INIT_COMMAND, welcome.clone())],
            welcome,
            generation: 0,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Bumped every time the whole history is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Append a completed entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Append an entry without a result and return its slot.
    pub fn push_pending(&mut self, input: impl Into<String>) -> Slot {
        self.entries.push(HistoryEntry::pending(input));
        Slot {
            generation: self.generation,
            index: self.entries.len() - 1,
        }
    }

    /// Attach `result` to a pending slot. Returns `false` if the slot is
    /// stale (the history was replaced since it was reserved).
    pub fn fill(&mut self, slot: Slot, result: CommandOutput) -> bool {
        if slot.generation != self.generation {
            return false;
        }
        match self.entries.get_mut(slot.index) {
            Some(entry) => {
                entry.result = Some(result);
                true
            },
            None => false,
        }
    }

    /// Replace everything with a single fresh init entry.
    pub fn reset(&mut self) {
        let init = HistoryEntry::new(INIT_COMMAND, self.welcome.clone());
        self.replace_with(init);
    }

    /// Replace everything with `entry`.
    pub fn replace_with(&mut self, entry: HistoryEntry) {
        self.entries.clear();
        self.entries.push(entry);
        self.generation += 1;
    }
}

/// Every command submitted this session, for the `history` command.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: Vec<String>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn welcome() -> CommandOutput {
        CommandOutput::Welcome {
            name: "Sam".into(),
        }
    }

    #[test]
    fn starts_with_init() {
        let history = History::new(welcome());
        assert_eq!(history.len(), 1);
        assert!(history.entries()[0].is_init());
        assert_eq!(history.entries()[0].result, Some(welcome()));
    }

    #[test]
    fn pending_then_fill() {
        let mut history = History::new(welcome());
        let slot = history.push_pending("help");
        assert_eq!(history.last().unwrap().result, None);
        assert!(history.fill(slot, CommandOutput::Text("ok".into())));
        assert_eq!(
            history.last().unwrap().result,
            Some(CommandOutput::Text("ok".into()))
        );
    }

    #[test]
    fn reset_makes_slot_stale() {
        let mut history = History::new(welcome());
        let slot = history.push_pending("about");
        history.reset();
        assert!(!history.fill(slot, CommandOutput::Text("late".into())));
        assert_eq!(history.len(), 1);
        assert!(history.entries()[0].is_init());
        assert_eq!(history.entries()[0].result, Some(welcome()));
    }

    #[test]
    fn replace_with_bumps_generation() {
        let mut history = History::new(welcome());
        history.push(HistoryEntry::new("a", CommandOutput::Text("1".into())));
        let before = history.generation();
        history.replace_with(HistoryEntry::new("b", CommandOutput::Text("2".into())));
        assert_eq!(history.generation(), before + 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].input, "b");
    }

    #[test]
    fn reset_after_many_entries() {
        let mut history = History::new(welcome());
        for i in 0..50 {
            history.push(HistoryEntry::new(format!("cmd{i}"), CommandOutput::Text(String::new())));
        }
        history.reset();
        assert_eq!(history.len(), 1);
        assert!(history.entries()[0].is_init());
    }

    #[test]
    fn command_log_appends_in_order() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());
        log.push("help");
        log.push("about");
        assert_eq!(log.entries(), &["help".to_string(), "about".to_string()]);
        assert_eq!(log.len(), 2);
    }
}
