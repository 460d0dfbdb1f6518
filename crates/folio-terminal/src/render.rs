//! Plain-text rendering of command outputs, history entries and the
//! normal-view page.

use crate::command::Section;
use crate::content::Content;
use crate::history::HistoryEntry;
use crate::output::CommandOutput;

const BANNER: &str = r"  __       _ _
 / _| ___ | (_) ___
| |_ / _ \| | |/ _ \
|  _| (_) | | | (_) |
|_|  \___/|_|_|\___/";

/// Render one output as text lines joined by `\n`.
pub fn render(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Welcome { name } => format!(
            "{BANNER}\n\nWelcome to the portfolio of {name}.\n\
             This is an interactive terminal. You can navigate using the menu or by typing commands.\n\
             Type 'help' to see a list of available commands."
        ),
        CommandOutput::Help(entries) => {
            let width = entries.iter().map(|e| e.usage.len()).max().unwrap_or(0);
            let mut lines = vec!["Available commands:".to_string()];
            for e in entries {
                lines.push(format!("  {:<width$}  {}", e.usage, e.description));
            }
            lines.join("\n")
        },
        CommandOutput::About(identity) => {
            let mut text = format!("{}\n{}", identity.name, identity.headline);
            if !identity.bio.is_empty() {
                text.push_str("\n\n");
                text.push_str(&identity.bio);
            }
            text
        },
        CommandOutput::Projects(projects) => {
            if projects.is_empty() {
                return "No projects yet.".to_string();
            }
            let mut lines = Vec::new();
            for p in projects {
                lines.push(format!("{} ({})", p.name, p.slug));
                lines.push(format!("    {}", p.description));
                if !p.stack.is_empty() {
                    lines.push(format!("    Stack: {}", p.stack.join(", ")));
                }
                if let Some(url) = &p.live_url {
                    lines.push(format!("    Live:  {url}"));
                }
                if let Some(url) = &p.repo_url {
                    lines.push(format!("    Repo:  {url}"));
                }
            }
            lines.push(String::new());
            lines.push("Type 'run <slug>' to launch a live demo.".to_string());
            lines.join("\n")
        },
        CommandOutput::Skills(categories) => categories
            .iter()
            .map(|c| format!("{}: {}", c.title, c.skills.join(", ")))
            .collect::<Vec<_>>()
            .join("\n"),
        CommandOutput::ContactIntro => "Happy to connect! Please answer the following questions.\n\
             (Type 'abort' at any time to cancel.)\n\
             What is your name?"
            .to_string(),
        CommandOutput::History(log) => {
            if log.is_empty() {
                return "No commands yet.".to_string();
            }
            log.iter()
                .enumerate()
                .map(|(i, line)| format!("{:>4}  {line}", i + 1))
                .collect::<Vec<_>>()
                .join("\n")
        },
        CommandOutput::Cowsay(art) => art.clone(),
        CommandOutput::Ask { question } => {
            if question.is_empty() {
                "Ask me anything: ask <question>".to_string()
            } else {
                format!(
                    "You asked: \"{question}\"\n\
                     I'm not wired up to answer that yet. Try 'contact' to reach me directly."
                )
            }
        },
        CommandOutput::GameLaunch { title } => format!("Launching {title}..."),
        CommandOutput::GameUsage { available } => format!(
            "Which game would you like to play?\nAvailable games: {}\nUsage: play <game_name>",
            available.join(", ")
        ),
        CommandOutput::ProjectLaunch { name } => format!("Launching project: {name}..."),
        CommandOutput::ThemeSet(theme) => format!("Theme set to {theme}"),
        CommandOutput::ThemeList(themes) => {
            let mut lines = vec!["Available themes:".to_string()];
            lines.extend(themes.iter().map(|t| format!("  - {t}")));
            lines.join("\n")
        },
        CommandOutput::ViewSwitch(mode) => format!("Switching to {mode} view..."),
        CommandOutput::Text(text) | CommandOutput::Error(text) => text.clone(),
        CommandOutput::Success { title, message } => format!("{title}\n{message}"),
        CommandOutput::NotFound { command } => {
            format!("Command not found: {command}. Type 'help' for a list of commands.")
        },
    }
}

/// Render a history entry under `prompt`. The init entry has no prompt
/// line; a pending entry has no output yet.
pub fn render_entry(prompt: &str, entry: &HistoryEntry) -> String {
    let body = entry.result.as_ref().map(render);
    if entry.is_init() {
        return body.unwrap_or_default();
    }
    match body {
        Some(body) => format!("{prompt} {}\n{body}", entry.input),
        None => format!("{prompt} {}", entry.input),
    }
}

/// Render one section of the normal view.
pub fn render_section(content: &Content, section: Section) -> String {
    let (title, body) = match section {
        Section::About => ("About", render(&CommandOutput::About(content.identity.clone()))),
        Section::Projects => (
            "Projects",
            render(&CommandOutput::Projects(content.projects.clone())),
        ),
        Section::Skills => ("Skills", render(&CommandOutput::Skills(content.skills.clone()))),
        Section::Contact => (
            "Contact",
            "Switch to the terminal view and type 'contact' to send me a message.".to_string(),
        ),
    };
    format!("== {title} ==\n{body}")
}

/// Render the whole normal-view page.
pub fn render_page(content: &Content) -> String {
    let mut parts = vec![format!(
        "{}\n{}",
        content.identity.name, content.identity.headline
    )];
    parts.extend(Section::ALL.iter().map(|&s| render_section(content, s)));
    parts.join("\n\n")
}
