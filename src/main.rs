use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use folio::app::config::{config_dir, Config};
use folio::app::navigation::Location;
use folio::app::persistence::{get_preferences_path, PreferenceStore};
use folio::app::r#loop::{run_loop, Runtime};
use folio::app::router::ProfileViewLoader;
use folio::app::state::AppState;
use folio::domain::profile::ProfileData;
use folio::theme::ThemeMode;

/// A terminal portfolio: profile, resume, projects, blog and contact form.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// TOML profile to show instead of the built-in one
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Section to open, e.g. `blog` or `#blog`
    #[arg(long)]
    route: Option<String>,

    /// Color scheme, overriding the saved preference
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Config file (default: ~/.config/folio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (default: ~/.config/folio/folio.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path.or_else(|| config_dir().map(|dir| dir.join("folio.log"))) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone())?;
    setup_panic_hook();

    // Everything that can fail happens BEFORE terminal setup so a bad file
    // never leaves the terminal in raw mode.
    let config = Config::load(cli.config.as_deref())?;
    let profile = match cli.profile.as_ref().or(config.profile_path.as_ref()) {
        Some(path) => ProfileData::load(path)?,
        None => ProfileData::builtin(),
    };
    let profile = Arc::new(profile);

    let preferences = PreferenceStore::open(get_preferences_path());
    let theme_mode = cli
        .theme
        .or(preferences.prefs.theme)
        .or(config.default_theme)
        .unwrap_or_else(ThemeMode::detect);
    let initial = cli
        .route
        .clone()
        .or_else(|| preferences.prefs.last_fragment.clone())
        .unwrap_or_default();
    info!(%initial, ?theme_mode, "launching");

    let app_state = AppState::new(profile.clone(), config, theme_mode);
    let runtime = Runtime {
        loader: Arc::new(ProfileViewLoader::new(profile)),
        location: Location::new(&initial),
        preferences,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, runtime).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
