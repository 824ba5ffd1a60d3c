use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::ui::App;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore the terminal even when the loop errored
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal.show_cursor();

    res.context("terminal event loop failed")
}
