//! A paged terminal presentation of Suzhou.
//!
//! The page opens behind a loader and an unrolling-scroll intro; once
//! revealed, wheel and drag gestures page between sections with edge
//! resistance.  Run with `--skip-intro` to go straight to the page.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Paged terminal presentation with an unrolling intro")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the intro and reveal the page right after loading.
    #[arg(long = "skip-intro")]
    skip_intro: bool,

    /// Frame rate of the render and animation loop.
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Write the effective config to the config path and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let mut user_config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::load(),
    };
    if cli.skip_intro {
        user_config.skip_intro = true;
    }
    if let Some(fps) = cli.fps {
        user_config.fps = fps.clamp(10, 240);
    }

    if cli.write_config {
        let path = user_config.save(cli.config.as_deref())?;
        println!("{}", path.display());
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    let (width, height) = crossterm::terminal::size()?;
    let frame_interval = user_config.frame_interval();
    let mut state = AppState::new(user_config, width, height);

    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async input + frame clock ─────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(20));
    let mut frames = tokio::time::interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let started = state.now();
    state.controller.page_ready(started);
    info!(width, height, ?frame_interval, "presentation started");

    // ── event loop ────────────────────────────────────────────
    loop {
        if state.redraw {
            let now = state.now();
            terminal.draw(|frame| ui::render(frame, &state, now))?;
            state.redraw = false;
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                let now = state.now();
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k, now),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m, now),
                    AppEvent::Resize(w, h) => handler::handle_resize(&mut state, w, h),
                }
            }

            _ = frames.tick() => {
                let now = state.now();
                handler::handle_frame(&mut state, now);
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
