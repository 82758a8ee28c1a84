// bubbletty: Step-Through Bubble Sort Tracer

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use bubbletty::ascii::{render_frame, CLEAR_SCREEN};
use bubbletty::input::{parse_values, random_values};
use bubbletty::logging::{log_filter, log_writer, StderrPause};
use bubbletty::snapshot::TraceHistory;
use bubbletty::trace::{Trace, TraceOptions};
use bubbletty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "bubbletty", about = "Watch bubble sort compare and swap, one step at a time")]
struct Cli {
    /// Number of random elements
    #[arg(long, default_value_t = 18)]
    n: usize,

    /// Milliseconds between frames during playback
    #[arg(long, default_value_t = 220)]
    interval: u64,

    /// Random seed for a reproducible array
    #[arg(long)]
    seed: Option<u64>,

    /// Sort this comma-separated list instead of random values
    #[arg(long)]
    values: Option<String>,

    /// Print ASCII frames instead of starting the TUI
    #[arg(long)]
    ascii: bool,

    /// Also trace function entry and loop headers
    #[arg(long)]
    checkpoints: bool,

    /// Upper bound on recorded snapshot memory, in bytes
    #[arg(long, default_value_t = 256 * 1024 * 1024)]
    snapshot_limit: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(log_writer)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    let values = match &cli.values {
        Some(list) => parse_values(list)?,
        None => random_values(cli.n, cli.seed)?,
    };
    info!("Initial array: {:?}", values);

    let options = TraceOptions {
        checkpoints: cli.checkpoints,
    };
    let interval = Duration::from_millis(cli.interval);

    if cli.ascii {
        return play_ascii(&values, options, interval);
    }

    let mut history = TraceHistory::new(cli.snapshot_limit);
    match history.record(Trace::with_options(&values, options)) {
        Ok(()) => info!("Recorded {} events", history.len()),
        Err(e) => warn!(
            "{e}; entering TUI with {} of the trace's events",
            history.len()
        ),
    }

    run_tui(App::new(history, interval))
}

/// Print each event as a text frame, pausing between frames
fn play_ascii(values: &[u64], options: TraceOptions, interval: Duration) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for event in Trace::with_options(values, options) {
        write!(stdout, "{}{}", CLEAR_SCREEN, render_frame(&event, 60))?;
        stdout.flush()?;
        thread::sleep(interval);
    }
    writeln!(stdout, "Done.")?;
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Log lines would draw over the alternate screen
    let _pause = StderrPause::new();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
