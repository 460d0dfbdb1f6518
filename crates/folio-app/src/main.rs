//! folio desktop entry point.
//!
//! Runs the portfolio terminal over stdin/stdout. Preferences persist to a
//! JSON file; content and timing come from `folio.toml`.
//! Type `help` for commands, `:toggle` to switch views, `:quit` to leave.

mod cli_host;
mod session;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use folio_store::JsonFileStore;
use folio_terminal::{Content, Preferences, Terminal};
use folio_types::config::FolioConfig;

use session::Session;

const DEFAULT_CONFIG_FILE: &str = "folio.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, FOLIO_CONFIG env var, or ./folio.toml.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from)
        .or_else(|| {
            let local = Path::new(DEFAULT_CONFIG_FILE);
            local.exists().then(|| local.to_path_buf())
        });
    let config = match &config_path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FolioConfig::default(),
    };
    log::info!(
        "Starting folio (latency {}ms, store {})",
        config.latency_ms,
        config.store_path.display(),
    );

    let content = Content::from_config(&config)?;
    log::info!(
        "Loaded portfolio for {} ({} projects)",
        content.identity.name,
        content.projects.len()
    );

    let mut store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening preference store {}", config.store_path.display()))?;
    let prefs = Preferences::load(&store);
    log::info!("Restored view {} with theme {}", prefs.view_mode, prefs.theme);

    let terminal = Terminal::new(content, prefs).with_latency(config.latency());
    let mut session = Session::new(terminal, config.prompt.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout, &mut store)?;

    log::info!(
        "Session ended after {} commands",
        session.terminal().command_log().len()
    );
    Ok(())
}
