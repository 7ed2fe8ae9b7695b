//! Terminal raycaster (default binary).
//!
//! Interactive mode renders the minimap and first-person view with crossterm.
//! `--dump-frames N` renders headlessly and prints JSON frame snapshots.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use tui_raycaster::core::World;
use tui_raycaster::engine::{load_grid, parse_action_list, run_headless, FrameClock, Session};
use tui_raycaster::input::{handle_key_event, should_quit};
use tui_raycaster::term::{TerminalRenderer, Viewport};

/// First-person raycaster with a live minimap.
#[derive(Parser, Debug)]
#[command(name = "tui-raycaster", version, about)]
struct Cli {
    /// Map file: plain text (`#` wall, space empty) or a `.json` array of rows.
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG, default `info`).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Render N frames without a terminal and print one JSON snapshot per line.
    #[arg(long, value_name = "N")]
    dump_frames: Option<u64>,

    /// Comma-separated actions applied one per frame in headless mode
    /// (left, right, up, down, or `-` for an idle frame).
    #[arg(long, value_name = "LIST", requires = "dump_frames")]
    actions: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let (grid, source) = load_grid(cli.map.as_deref())?;
    log::info!("map: {} ({}x{})", source, grid.side(), grid.side());
    let world = World::new(grid);

    if let Some(frames) = cli.dump_frames {
        let actions = match cli.actions.as_deref() {
            Some(list) => parse_action_list(list)?,
            None => Vec::new(),
        };
        run_headless(world, frames, &actions, io::stdout().lock())?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::new(world));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Interactive sessions only log to a file; stderr would corrupt the
/// alternate screen. Headless runs log to stderr.
fn init_logging(cli: &Cli) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if cli.dump_frames.is_none() {
        return Ok(());
    }

    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let mut clock = FrameClock::start();
    log::info!("session started, frame period {:?}", clock.period());

    loop {
        // Input until the next frame is due.
        if event::poll(clock.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit after {} frames", session.frame());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.queue(action);
                    }
                }
                Event::Resize(w, h) => {
                    log::info!("terminal resized to {}x{}", w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Frame.
        if clock.poll_due(Instant::now()) {
            session.tick();
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            term.draw_swap(session.compose(Viewport::new(w, h)))?;
        }
    }
}
