use std::io::stdout;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use vitae::app::{App, AppOutcome};
use vitae::logging;
use vitae::view::theme::Theme;

/// A terminal-based resume builder
#[derive(Parser, Debug)]
#[command(name = "vitae")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Project list to edit (JSON; created on first save)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Theme: a built-in name (dark, light) or a path to a theme JSON file
    #[arg(long, value_name = "NAME_OR_PATH", default_value = "dark")]
    theme: String,

    /// Path to log file for diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let theme = resolve_theme(&cli.theme)?;
    let mut app = App::load(cli.file, theme)?;

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = run(terminal, &mut app);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn resolve_theme(name_or_path: &str) -> Result<Theme> {
    if let Some(theme) = Theme::builtin(name_or_path) {
        return Ok(theme);
    }
    let path = PathBuf::from(name_or_path);
    if path.exists() {
        return Theme::load(&path);
    }
    Err(anyhow!(
        "unknown theme '{}' (expected 'dark', 'light', or a theme file path)",
        name_or_path
    ))
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        match app.handle_event(event::read()?) {
            AppOutcome::Quit => break Ok(()),
            AppOutcome::Continue => {}
        }
    }
}
