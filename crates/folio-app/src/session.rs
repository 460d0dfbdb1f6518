//! Line-driven session: reads input, routes it by view mode and prints
//! what changed.
//!
//! Lines starting with `:` are front-end controls standing in for the
//! sidebar and the view toggle:
//!
//! - `:menu <command>` runs a command as a menu click
//! - `:toggle` flips between terminal and normal view
//! - `:quit` ends the session

use std::io::{self, BufRead, Write};

use folio_store::KeyValueStore;
use folio_terminal::game::{GameReply, TICTACTOE_TITLE};
use folio_terminal::render::{render, render_entry, render_page, render_section};
use folio_terminal::{Environment, Origin, Submission, Terminal, ViewMode};

use crate::cli_host::{CliHost, Notice};

const SEPARATOR: &str = "----------------------------------------";

const CONTROLS_HELP: &str = "Controls:
  :menu <command>  run a command as a menu click
  :toggle          switch between terminal and normal view
  :quit            leave";

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running front-end session.
pub struct Session {
    terminal: Terminal,
    prompt: String,
    host: CliHost,
}

impl Session {
    pub fn new(terminal: Terminal, prompt: impl Into<String>) -> Self {
        Self {
            terminal,
            prompt: prompt.into(),
            host: CliHost::new(),
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Read lines until EOF or `:quit`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        store: &mut dyn KeyValueStore,
    ) -> io::Result<()> {
        self.render_screen(out)?;
        self.write_prompt(out)?;
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out, store)? == Flow::Quit {
                break;
            }
            self.write_prompt(out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Prompt for the current view and dialogue step.
    pub fn current_prompt(&self) -> &str {
        match self.terminal.view_mode() {
            ViewMode::Terminal => match self.terminal.prompt() {
                Some(label) => label,
                None => &self.prompt,
            },
            ViewMode::Normal => "normal>",
            ViewMode::Game => "tictactoe>",
        }
    }

    /// Process one input line.
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        store: &mut dyn KeyValueStore,
    ) -> io::Result<Flow> {
        // The contact dialogue takes every line verbatim.
        if !self.terminal.contact().is_active()
            && let Some(control) = line.trim().strip_prefix(':')
        {
            return self.control(control.trim(), out, store);
        }

        match self.terminal.view_mode() {
            ViewMode::Terminal => self.submit(line, Origin::Typed, out, store)?,
            ViewMode::Normal => {
                if !line.trim().is_empty() {
                    writeln!(
                        out,
                        "Normal view: use ':menu <command>' to navigate or ':toggle' for the terminal."
                    )?;
                }
            },
            ViewMode::Game => self.game_input(line, out, store)?,
        }
        Ok(Flow::Continue)
    }

    fn control<W: Write>(
        &mut self,
        control: &str,
        out: &mut W,
        store: &mut dyn KeyValueStore,
    ) -> io::Result<Flow> {
        let (name, rest) = control.split_once(' ').unwrap_or((control, ""));
        match name {
            "quit" | "q" => return Ok(Flow::Quit),
            "toggle" => {
                self.terminal.toggle_view_mode(store);
                self.render_screen(out)?;
            },
            "menu" if !rest.trim().is_empty() => {
                self.submit(rest, Origin::MenuClick, out, store)?;
            },
            _ => writeln!(out, "{CONTROLS_HELP}")?,
        }
        Ok(Flow::Continue)
    }

    fn submit<W: Write>(
        &mut self,
        line: &str,
        origin: Origin,
        out: &mut W,
        store: &mut dyn KeyValueStore,
    ) -> io::Result<()> {
        let generation = self.terminal.history_generation();
        let shown = self.terminal.history().len();
        let view = self.terminal.view_mode();

        let mut env = Environment {
            store,
            host: &mut self.host,
        };
        if self.terminal.execute(line, origin, &mut env) == Submission::Ignored {
            return Ok(());
        }

        if self.terminal.history_generation() == generation {
            let new_entries = self.terminal.history().get(shown..).unwrap_or_default();
            for (i, entry) in new_entries.iter().enumerate() {
                // The typed line is already on screen.
                if i == 0 && origin == Origin::Typed {
                    if let Some(result) = &entry.result {
                        writeln!(out, "{}", render(result))?;
                    }
                } else {
                    writeln!(out, "{}", render_entry(&self.prompt, entry))?;
                }
            }
        }

        for notice in self.host.drain() {
            match notice {
                Notice::Preview { name, url } => writeln!(out, "[preview] {name}: {url}")?,
                Notice::Scroll(section) => {
                    writeln!(out, "{}", render_section(self.terminal.content(), section))?;
                },
                Notice::Theme(theme) => log::debug!("Theme applied: {theme}"),
            }
        }

        if self.terminal.history_generation() != generation || self.terminal.view_mode() != view {
            self.render_screen(out)?;
        }
        Ok(())
    }

    fn game_input<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        store: &mut dyn KeyValueStore,
    ) -> io::Result<()> {
        let reply = match self.terminal.game_mut() {
            Some(game) => game.handle_input(line),
            None => GameReply::Exit,
        };
        match reply {
            GameReply::Text(text) => writeln!(out, "{text}")?,
            GameReply::Exit => {
                self.terminal.exit_game(store);
                writeln!(out, "Leaving {TICTACTOE_TITLE}.")?;
                self.render_screen(out)?;
            },
        }
        Ok(())
    }

    /// Print the whole screen for the current view.
    fn render_screen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{SEPARATOR}")?;
        match self.terminal.view_mode() {
            ViewMode::Terminal => {
                for entry in self.terminal.history() {
                    writeln!(out, "{}", render_entry(&self.prompt, entry))?;
                }
            },
            ViewMode::Normal => {
                writeln!(out, "{}", render_page(self.terminal.content()))?;
                writeln!(out, "\n{CONTROLS_HELP}")?;
            },
            ViewMode::Game => match self.terminal.game_mut() {
                Some(game) => {
                    writeln!(
                        out,
                        "{TICTACTOE_TITLE}: you are X. Enter a cell (1-9), 'new' or 'exit'."
                    )?;
                    writeln!(out, "{game}")?;
                },
                None => writeln!(out, "No game running. Type 'exit' to leave.")?,
            },
        }
        Ok(())
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{} ", self.current_prompt())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use folio_store::MemoryStore;
    use folio_terminal::prefs::VIEW_MODE_KEY;
    use folio_terminal::{Content, Preferences};

    use super::*;

    fn session(store: &MemoryStore) -> Session {
        let terminal = Terminal::new(Content::default(), Preferences::load(store))
            .with_latency(Duration::ZERO);
        Session::new(terminal, "user@portfolio:~$")
    }

    fn run_script(script: &str, store: &mut MemoryStore) -> (Session, String) {
        let mut s = session(store);
        let mut out = Vec::new();
        s.run(Cursor::new(script.to_string()), &mut out, store).unwrap();
        (s, String::from_utf8(out).unwrap())
    }

    #[test]
    fn welcome_on_start() {
        let (_, out) = run_script("", &mut MemoryStore::new());
        assert!(out.contains("Welcome to the portfolio of Sam Rivera."));
        assert!(out.contains("user@portfolio:~$ "));
    }

    #[test]
    fn typed_command_prints_result() {
        let (s, out) = run_script("help\n", &mut MemoryStore::new());
        assert!(out.contains("Available commands:"));
        assert_eq!(s.terminal().history().len(), 2);
    }

    #[test]
    fn preview_notice_for_run() {
        let (_, out) = run_script("run pixel-garden\n", &mut MemoryStore::new());
        assert!(out.contains("Launching project: Pixel Garden..."));
        assert!(out.contains("[preview] Pixel Garden: https://example.com/pixel-garden"));
    }

    #[test]
    fn contact_prompt_labels() {
        let (s, out) = run_script("contact\nAlice\n", &mut MemoryStore::new());
        assert!(out.contains("Name: "));
        assert!(out.contains("Email: "));
        assert_eq!(s.current_prompt(), "Email:");
    }

    #[test]
    fn contact_takes_colon_lines_verbatim() {
        let (s, _) = run_script("contact\n:quit\n", &mut MemoryStore::new());
        assert_eq!(s.terminal().contact().name(), ":quit");
    }

    #[test]
    fn toggle_and_menu_scroll() {
        let mut store = MemoryStore::new();
        let (s, out) = run_script(":toggle\n:menu skills\n", &mut store);
        assert_eq!(s.terminal().view_mode(), ViewMode::Normal);
        assert!(out.contains("== Skills =="));
        assert_eq!(store.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("normal"));
    }

    #[test]
    fn menu_click_from_normal_returns_to_terminal() {
        let mut store = MemoryStore::with_entries([(VIEW_MODE_KEY, "normal")]);
        let (s, out) = run_script(":menu help\n", &mut store);
        assert_eq!(s.terminal().view_mode(), ViewMode::Terminal);
        assert!(out.contains("user@portfolio:~$ help"));
    }

    #[test]
    fn game_round_trip() {
        let (s, out) = run_script("play tictactoe\n1\nexit\n", &mut MemoryStore::new());
        assert!(out.contains("Launching Tic-Tac-Toe..."));
        assert!(out.contains(" X | 2 | 3 "));
        assert!(out.contains("Leaving Tic-Tac-Toe."));
        assert_eq!(s.terminal().view_mode(), ViewMode::Terminal);
    }

    #[test]
    fn quit_stops_reading() {
        let (s, _) = run_script(":quit\nhelp\n", &mut MemoryStore::new());
        assert_eq!(s.terminal().history().len(), 1);
    }

    #[test]
    fn clear_redraws_screen() {
        let (s, out) = run_script("help\nclear\n", &mut MemoryStore::new());
        assert_eq!(s.terminal().history().len(), 1);
        assert_eq!(out.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn unknown_control_shows_help() {
        let (_, out) = run_script(":bogus\n", &mut MemoryStore::new());
        assert!(out.contains("Controls:"));
    }
}
