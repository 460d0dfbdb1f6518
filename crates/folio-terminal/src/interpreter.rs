//! The terminal aggregate and its two-phase command dispatch.
//!
//! A submission runs in two halves. [`Terminal::submit`] is the immediate
//! phase: it echoes the command into the history with an empty result,
//! records it in the command log, applies view and theme changes (and
//! persists them), and marks the terminal busy. [`Terminal::complete`] is
//! the deferred phase: it attaches the result, runs host effects and
//! clears the busy flag. [`Terminal::execute`] runs both with the
//! configured latency in between.
//!
//! While the contact dialogue is active every submission goes to it and is
//! handled synchronously.

use std::time::Duration;

use folio_store::KeyValueStore;
use folio_types::config::DEFAULT_LATENCY_MS;

use crate::command::{CommandKind, Invocation, Section};
use crate::contact::{ContactForm, ContactSubmission};
use crate::content::Content;
use crate::cowsay;
use crate::game::{GAMES, TICTACTOE, TICTACTOE_TITLE, TicTacToe};
use crate::history::{CommandLog, History, HistoryEntry, INIT_COMMAND, Slot};
use crate::output::{CommandOutput, HelpEntry};
use crate::prefs::{Preferences, Theme, ViewMode};

/// `active_command` value after an unknown command.
pub const NOT_FOUND: &str = "not-found";

/// Where a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Typed at the prompt; results append to the history.
    Typed,
    /// Clicked in the sidebar menu; results replace the history.
    MenuClick,
}

/// UI collaborators the interpreter drives.
pub trait Host {
    /// Show an external-link preview for a project.
    fn open_modal(&mut self, name: &str, url: &str);

    /// Scroll the normal view to a section.
    fn scroll_to(&mut self, section: Section);

    /// Deliver a completed contact form.
    fn submit_contact(&mut self, submission: &ContactSubmission);

    /// Apply a newly selected theme to the presentation.
    fn apply_theme(&mut self, _theme: Theme) {}
}

/// Collaborators passed to every submission.
pub struct Environment<'a> {
    /// Preference store.
    pub store: &'a mut dyn KeyValueStore,
    /// UI collaborators.
    pub host: &'a mut dyn Host,
}

/// Identifies an outstanding deferred phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Result of the immediate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Dropped: blank input, or another command is still pending.
    Ignored,
    /// Consumed synchronously by the contact dialogue.
    Handled,
    /// Accepted; call [`Terminal::complete`] with the ticket.
    Deferred(Ticket),
}

/// Work left for the deferred phase besides attaching the output.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Effect {
    None,
    OpenModal { name: String, url: String },
    ScrollTo(Section),
    BeginContact,
    Clear,
}

/// Everything the deferred phase needs.
#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    origin: Origin,
    input: String,
    /// Lower-cased command name, or `NOT_FOUND`.
    active: String,
    output: Option<CommandOutput>,
    effect: Effect,
    slot: Option<Slot>,
    /// History generation at submission; a reset since then makes this
    /// completion stale.
    generation: u64,
    /// Menu clicks return the view to `terminal`.
    to_terminal: bool,
    /// Menu-click results replace the history (false for `play`).
    replace: bool,
}

/// The whole interpreter state: history, command log, preferences, contact
/// form and the active game.
pub struct Terminal {
    content: Content,
    history: History,
    log: CommandLog,
    contact: ContactForm,
    view_mode: ViewMode,
    theme: Theme,
    game: Option<TicTacToe>,
    active_command: String,
    pending: Option<Pending>,
    next_ticket: u64,
    latency: Duration,
}

impl Terminal {
    /// Create a terminal showing the welcome entry.
    pub fn new(content: Content, prefs: Preferences) -> Self {
        let welcome = CommandOutput::Welcome {
            name: content.identity.name.clone(),
        };
        Self {
            content,
            history: History::new(welcome),
            log: CommandLog::new(),
            contact: ContactForm::new(),
            view_mode: prefs.view_mode,
            theme: prefs.theme,
            game: None,
            active_command: INIT_COMMAND.to_string(),
            pending: None,
            next_ticket: 0,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }

    /// Set the delay between the immediate and deferred phases.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    // -- Accessors --

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Bumped whenever the whole history is replaced (clear, menu click).
    pub fn history_generation(&self) -> u64 {
        self.history.generation()
    }

    pub fn command_log(&self) -> &[String] {
        self.log.entries()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Whether a deferred phase is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Name of the running game, if any.
    pub fn active_game(&self) -> Option<&'static str> {
        self.game.as_ref().map(|_| TICTACTOE)
    }

    pub fn game_mut(&mut self) -> Option<&mut TicTacToe> {
        self.game.as_mut()
    }

    /// Last resolved command, for a title bar.
    pub fn active_command(&self) -> &str {
        &self.active_command
    }

    /// Field label replacing the shell prompt during the contact dialogue.
    pub fn prompt(&self) -> Option<&'static str> {
        if self.view_mode == ViewMode::Terminal {
            self.contact.step().prompt_label()
        } else {
            None
        }
    }

    // -- View helpers --

    /// Switch view mode and persist it. Leaving the game view ends the game.
    pub fn set_view(&mut self, mode: ViewMode, store: &mut dyn KeyValueStore) {
        if self.view_mode != mode {
            log::info!("View mode: {} -> {mode}", self.view_mode);
        }
        self.view_mode = mode;
        Preferences::persist_view_mode(store, mode);
        if mode != ViewMode::Game {
            self.game = None;
        }
    }

    /// Flip between terminal and normal view.
    pub fn toggle_view_mode(&mut self, store: &mut dyn KeyValueStore) {
        let next = if self.view_mode == ViewMode::Terminal {
            ViewMode::Normal
        } else {
            ViewMode::Terminal
        };
        self.set_view(next, store);
    }

    /// Leave the game view.
    pub fn exit_game(&mut self, store: &mut dyn KeyValueStore) {
        self.set_view(ViewMode::Terminal, store);
    }

    /// Replace the history with a fresh init entry and end any contact
    /// dialogue. A pending command is then dropped on completion, effects
    /// included.
    pub fn reset_history(&mut self) {
        self.history.reset();
        self.contact.reset();
        self.active_command = INIT_COMMAND.to_string();
    }

    // -- Dispatch --

    /// Run both phases, sleeping for the configured latency in between.
    pub fn execute(
        &mut self,
        line: &str,
        origin: Origin,
        env: &mut Environment<'_>,
    ) -> Submission {
        let submission = self.submit(line, origin, env);
        if let Submission::Deferred(ticket) = submission {
            if !self.latency.is_zero() {
                std::thread::sleep(self.latency);
            }
            self.complete(ticket, env);
        }
        submission
    }

    /// Immediate phase.
    pub fn submit(
        &mut self,
        line: &str,
        origin: Origin,
        env: &mut Environment<'_>,
    ) -> Submission {
        if self.pending.is_some() {
            log::debug!("Busy; dropping '{}'", line.trim());
            return Submission::Ignored;
        }

        if self.contact.is_active() {
            self.handle_contact(line, env);
            return Submission::Handled;
        }

        let Some(inv) = Invocation::parse(line) else {
            return Submission::Ignored;
        };

        // Clicking a section entry while already in the terminal acts as
        // typing it.
        let origin = match (origin, inv.kind.and_then(CommandKind::section)) {
            (Origin::MenuClick, Some(_)) if self.view_mode == ViewMode::Terminal => {
                Origin::Typed
            },
            _ => origin,
        };

        let mut pending = self.plan(&inv, origin, env);

        if inv.kind != Some(CommandKind::Clear) {
            self.log.push(inv.line);
        }
        if origin == Origin::Typed {
            pending.slot = Some(self.history.push_pending(inv.line));
        }

        let ticket = pending.ticket;
        self.pending = Some(pending);
        Submission::Deferred(ticket)
    }

    /// Deferred phase. Returns `false` if `ticket` is not the outstanding
    /// one.
    pub fn complete(&mut self, ticket: Ticket, env: &mut Environment<'_>) -> bool {
        let Some(pending) = self.pending.take_if(|p| p.ticket == ticket) else {
            log::debug!("Ignoring completion for stale ticket {ticket:?}");
            return false;
        };

        if pending.generation != self.history.generation() {
            log::debug!(
                "History was reset; dropping completion for '{}'",
                pending.input
            );
            return true;
        }

        match pending.effect {
            Effect::None => {},
            Effect::OpenModal { ref name, ref url } => env.host.open_modal(name, url),
            Effect::ScrollTo(section) => {
                env.host.scroll_to(section);
                return true;
            },
            Effect::BeginContact => self.contact.begin(),
            Effect::Clear => {
                self.reset_history();
                return true;
            },
        }

        if pending.origin == Origin::MenuClick && pending.to_terminal {
            self.set_view(ViewMode::Terminal, env.store);
        }

        if let Some(output) = pending.output {
            match (pending.origin, pending.slot) {
                (Origin::MenuClick, _) => {
                    let entry = HistoryEntry::new(pending.input, output);
                    if pending.replace {
                        self.history.replace_with(entry);
                    } else {
                        self.history.push(entry);
                    }
                },
                (Origin::Typed, Some(slot)) => {
                    self.history.fill(slot, output);
                },
                (Origin::Typed, None) => {},
            }
        }

        self.active_command = pending.active;
        true
    }

    fn handle_contact(&mut self, line: &str, env: &mut Environment<'_>) {
        let Some(reply) = self.contact.handle(line) else {
            return;
        };
        self.history.push(HistoryEntry::new(reply.label, reply.output));
        if let Some(tag) = reply.log_tag {
            self.log.push(tag);
        }
        if let Some(submission) = reply.submission {
            log::info!(
                "Contact submission from {} <{}>",
                submission.name,
                submission.email
            );
            env.host.submit_contact(&submission);
        }
    }

    /// Resolve the command, apply immediate state changes and describe the
    /// deferred work.
    fn plan(
        &mut self,
        inv: &Invocation<'_>,
        origin: Origin,
        env: &mut Environment<'_>,
    ) -> Pending {
        self.next_ticket += 1;
        let mut pending = Pending {
            ticket: Ticket(self.next_ticket),
            origin,
            input: inv.line.to_string(),
            active: inv.name.clone(),
            output: None,
            effect: Effect::None,
            slot: None,
            generation: self.history.generation(),
            to_terminal: true,
            replace: true,
        };

        let Some(kind) = inv.kind else {
            pending.active = NOT_FOUND.to_string();
            pending.output = Some(CommandOutput::NotFound {
                command: inv.line.to_string(),
            });
            return pending;
        };

        if origin == Origin::MenuClick
            && let Some(section) = kind.section()
        {
            pending.effect = Effect::ScrollTo(section);
            return pending;
        }

        let output = match kind {
            CommandKind::Help | CommandKind::Ls => CommandOutput::Help(help_entries()),
            CommandKind::About => CommandOutput::About(self.content.identity.clone()),
            CommandKind::Projects => CommandOutput::Projects(self.content.projects.clone()),
            CommandKind::Skills => CommandOutput::Skills(self.content.skills.clone()),
            CommandKind::Contact => {
                pending.effect = Effect::BeginContact;
                CommandOutput::ContactIntro
            },
            CommandKind::Clear => {
                pending.effect = Effect::Clear;
                return pending;
            },
            CommandKind::History => CommandOutput::History(self.log.entries().to_vec()),
            CommandKind::Cowsay => {
                let message = match inv.payload() {
                    "" => cowsay::DEFAULT_MESSAGE,
                    text => text,
                };
                CommandOutput::Cowsay(cowsay::render(message))
            },
            CommandKind::Ask => CommandOutput::Ask {
                question: inv.payload().to_string(),
            },
            CommandKind::Play => self.play(inv.arg(0), &mut pending, env),
            CommandKind::Run => self.run(inv.arg(0).unwrap_or(""), &mut pending),
            CommandKind::Theme => self.theme_cmd(inv.arg(0), inv.arg(1), env),
            CommandKind::View => {
                pending.to_terminal = false;
                match inv.arg(0).and_then(ViewMode::from_name) {
                    Some(mode @ (ViewMode::Normal | ViewMode::Terminal)) => {
                        self.set_view(mode, env.store);
                        CommandOutput::ViewSwitch(mode)
                    },
                    _ => CommandOutput::Error("Usage: view [normal|terminal]".to_string()),
                }
            },
        };
        pending.output = Some(output);
        pending
    }

    fn play(
        &mut self,
        game: Option<&str>,
        pending: &mut Pending,
        env: &mut Environment<'_>,
    ) -> CommandOutput {
        pending.replace = false;
        if game == Some(TICTACTOE) {
            pending.to_terminal = false;
            self.set_view(ViewMode::Game, env.store);
            self.game = Some(TicTacToe::new());
            CommandOutput::GameLaunch {
                title: TICTACTOE_TITLE.to_string(),
            }
        } else {
            CommandOutput::GameUsage {
                available: GAMES.iter().map(|g| g.to_string()).collect(),
            }
        }
    }

    fn run(&self, slug: &str, pending: &mut Pending) -> CommandOutput {
        match self.content.project(slug) {
            Some(project) => match &project.live_url {
                Some(url) => {
                    pending.effect = Effect::OpenModal {
                        name: project.name.clone(),
                        url: url.clone(),
                    };
                    CommandOutput::ProjectLaunch {
                        name: project.name.clone(),
                    }
                },
                None => {
                    CommandOutput::Error(format!("Error: Project '{slug}' has no live demo."))
                },
            },
            None => CommandOutput::Error(format!(
                "Error: Project '{slug}' not found or has no live demo."
            )),
        }
    }

    fn theme_cmd(
        &mut self,
        sub: Option<&str>,
        name: Option<&str>,
        env: &mut Environment<'_>,
    ) -> CommandOutput {
        match (sub, name.and_then(Theme::from_name)) {
            (Some("set"), Some(theme)) => {
                if self.theme != theme {
                    log::info!("Theme: {} -> {theme}", self.theme);
                }
                self.theme = theme;
                Preferences::persist_theme(env.store, theme);
                env.host.apply_theme(theme);
                CommandOutput::ThemeSet(theme)
            },
            (Some("list"), _) => CommandOutput::ThemeList(Theme::ALL.to_vec()),
            _ => CommandOutput::Error("Usage: theme [set|list] <theme_name>".to_string()),
        }
    }
}

/// Rows of the `help` panel.
pub fn help_entries() -> Vec<HelpEntry> {
    CommandKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_alias())
        .map(|kind| HelpEntry {
            usage: kind.usage(),
            description: kind.description(),
        })
        .collect()
}
