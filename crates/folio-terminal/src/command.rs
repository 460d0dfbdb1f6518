//! The fixed command vocabulary and line parsing.

/// Every command the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    About,
    Projects,
    Skills,
    Contact,
    Clear,
    History,
    Cowsay,
    Ask,
    Play,
    Run,
    Theme,
    View,
    /// Alias for `help`.
    Ls,
}

impl CommandKind {
    /// All commands, in `help` listing order.
    pub const ALL: [CommandKind; 14] = [
        CommandKind::Help,
        CommandKind::About,
        CommandKind::Projects,
        CommandKind::Skills,
        CommandKind::Contact,
        CommandKind::Clear,
        CommandKind::History,
        CommandKind::Cowsay,
        CommandKind::Ask,
        CommandKind::Play,
        CommandKind::Run,
        CommandKind::Theme,
        CommandKind::View,
        CommandKind::Ls,
    ];

    /// The command name (what the user types).
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Clear => "clear",
            Self::History => "history",
            Self::Cowsay => "cowsay",
            Self::Ask => "ask",
            Self::Play => "play",
            Self::Run => "run",
            Self::Theme => "theme",
            Self::View => "view",
            Self::Ls => "ls",
        }
    }

    /// Usage string shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Clear => "clear",
            Self::History => "history",
            Self::Cowsay => "cowsay [message]",
            Self::Ask => "ask <question>",
            Self::Play => "play <game>",
            Self::Run => "run <project-slug>",
            Self::Theme => "theme [set|list] <theme_name>",
            Self::View => "view [normal|terminal]",
            Self::Ls => "ls",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "List available commands",
            Self::About => "Who I am",
            Self::Projects => "Things I have built",
            Self::Skills => "Languages, tools and technologies",
            Self::Contact => "Send me a message",
            Self::Clear => "Clear the terminal",
            Self::History => "Show commands entered this session",
            Self::Cowsay => "Have a cow say something",
            Self::Ask => "Ask a question",
            Self::Play => "Play a game",
            Self::Run => "Launch a project's live demo",
            Self::Theme => "List or switch color themes",
            Self::View => "Switch between terminal and normal view",
            Self::Ls => "Alias for help",
        }
    }

    /// Whether the command only aliases another one.
    pub fn is_alias(self) -> bool {
        matches!(self, Self::Ls)
    }

    /// Resolve a lower-cased command name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The page section a command maps to in the normal view.
    pub fn section(self) -> Option<Section> {
        match self {
            Self::About => Some(Section::About),
            Self::Projects => Some(Section::Projects),
            Self::Skills => Some(Section::Skills),
            Self::Contact => Some(Section::Contact),
            _ => None,
        }
    }
}

/// Scrollable sections of the normal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections, in page order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// The trimmed input, original case.
    pub line: &'a str,
    /// Lower-cased first token.
    pub name: String,
    /// Resolved command, `None` when the name is not in the table.
    pub kind: Option<CommandKind>,
    /// Lower-cased positional arguments.
    pub args: Vec<String>,
}

impl<'a> Invocation<'a> {
    /// Parse an input line. Returns `None` for blank input.
    ///
    /// Tokens are separated by single spaces, so repeated spaces produce
    /// empty arguments. Command names are case-insensitive.
    pub fn parse(input: &'a str) -> Option<Self> {
        let line = input.trim();
        if line.is_empty() {
            return None;
        }
        let lowered = line.to_lowercase();
        let mut tokens = lowered.split(' ').map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        let args = tokens.collect();
        Some(Self {
            line,
            kind: CommandKind::from_name(&name),
            name,
            args,
        })
    }

    /// Positional argument `i`, lower-cased.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    /// Everything after the command keyword, original case, trimmed.
    pub fn payload(&self) -> &'a str {
        self.line
            .split_once(' ')
            .map(|(_, rest)| rest.trim())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_none() {
        assert!(Invocation::parse("").is_none());
        assert!(Invocation::parse("   \t ").is_none());
    }

    #[test]
    fn names_are_case_insensitive() {
        let inv = Invocation::parse("  HeLp ").unwrap();
        assert_eq!(inv.name, "help");
        assert_eq!(inv.kind, Some(CommandKind::Help));
    }

    #[test]
    fn args_are_lowercased() {
        let inv = Invocation::parse("theme SET Matrix").unwrap();
        assert_eq!(inv.kind, Some(CommandKind::Theme));
        assert_eq!(inv.arg(0), Some("set"));
        assert_eq!(inv.arg(1), Some("matrix"));
        assert_eq!(inv.arg(2), None);
    }

    #[test]
    fn double_space_yields_empty_token() {
        let inv = Invocation::parse("run  web").unwrap();
        assert_eq!(inv.args, vec!["", "web"]);
    }

    #[test]
    fn payload_preserves_case() {
        let inv = Invocation::parse("cowsay Hello World").unwrap();
        assert_eq!(inv.payload(), "Hello World");
        let inv = Invocation::parse("ASK What Is Rust?").unwrap();
        assert_eq!(inv.payload(), "What Is Rust?");
    }

    #[test]
    fn payload_empty_without_args() {
        let inv = Invocation::parse("cowsay").unwrap();
        assert_eq!(inv.payload(), "");
    }

    #[test]
    fn unknown_name_has_no_kind() {
        let inv = Invocation::parse("sudo rm -rf").unwrap();
        assert_eq!(inv.name, "sudo");
        assert_eq!(inv.kind, None);
    }

    #[test]
    fn every_kind_round_trips_by_name() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn section_commands() {
        assert_eq!(CommandKind::About.section(), Some(Section::About));
        assert_eq!(CommandKind::Contact.section(), Some(Section::Contact));
        assert_eq!(CommandKind::Help.section(), None);
    }

    #[test]
    fn only_ls_is_alias() {
        let aliases: Vec<_> = CommandKind::ALL.iter().filter(|k| k.is_alias()).collect();
        assert_eq!(aliases, vec![&CommandKind::Ls]);
    }
}
