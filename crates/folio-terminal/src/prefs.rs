//! View mode and theme preferences, persisted to a key-value store.

use std::fmt;

use folio_store::KeyValueStore;

/// Store key for the selected theme.
pub const THEME_KEY: &str = "portfolio-theme";

/// Store key for the selected view mode.
pub const VIEW_MODE_KEY: &str = "portfolio-view-mode";

/// Top-level presentation mode. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Terminal,
    Normal,
    Game,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Normal => "normal",
            Self::Game => "game",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "terminal" => Some(Self::Terminal),
            "normal" => Some(Self::Normal),
            "game" => Some(Self::Game),
            _ => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Default,
    Matrix,
    Dracula,
    Solarized,
    Retro,
}

impl Theme {
    /// The supported theme set, in listing order.
    pub const ALL: [Theme; 5] = [
        Theme::Default,
        Theme::Matrix,
        Theme::Dracula,
        Theme::Solarized,
        Theme::Retro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Matrix => "matrix",
            Self::Dracula => "dracula",
            Self::Solarized => "solarized",
            Self::Retro => "retro",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two persisted preference flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub view_mode: ViewMode,
}

impl Preferences {
    /// Read both flags from the store.
    ///
    /// Absent, unreadable or unrecognized values fall back to the defaults.
    /// A stored `game` view restores to `terminal`, since no game session
    /// survives a restart.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let theme = read(store, THEME_KEY, Theme::from_name).unwrap_or_default();
        let view_mode = match read(store, VIEW_MODE_KEY, ViewMode::from_name) {
            Some(ViewMode::Game) => {
                log::debug!("Stored view mode 'game' restored as 'terminal'");
                ViewMode::Terminal
            },
            Some(mode) => mode,
            None => ViewMode::default(),
        };
        log::info!("Preferences loaded: theme={theme}, view={view_mode}");
        Self { theme, view_mode }
    }

    /// Write the theme flag. Failures are logged and otherwise ignored.
    pub fn persist_theme(store: &mut dyn KeyValueStore, theme: Theme) {
        write(store, THEME_KEY, theme.as_str());
    }

    /// Write the view mode flag. Failures are logged and otherwise ignored.
    pub fn persist_view_mode(store: &mut dyn KeyValueStore, mode: ViewMode) {
        write(store, VIEW_MODE_KEY, mode.as_str());
    }
}

fn read<T>(store: &dyn KeyValueStore, key: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse(&raw);
            if parsed.is_none() {
                log::warn!("Ignoring unrecognized value '{raw}' for '{key}'");
            }
            parsed
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("Failed to read '{key}': {e}");
            None
        },
    }
}

fn write(store: &mut dyn KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("Failed to persist '{key}={value}': {e}");
    }
}
