//! Marquee CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`marquee_engine`] (page state) and [`marquee_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! # Event Loop
//!
//! A fixed 16ms (~60 FPS) frame cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`marquee_tui::InputPump`])
//! 3. Advance every timer by the measured frame delta (`page.tick()`)
//! 4. Render frame, which also reports layout back for visibility

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use marquee_engine::{LandingPage, MarqueeConfig, default_content, load_content};
use marquee_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than draw over the page.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.marquee/logs/marquee.log
    if let Some(config_path) = MarqueeConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("marquee.log"));
    }

    // Fallback: ./.marquee/logs/marquee.log
    candidates.push(PathBuf::from(".marquee").join("logs").join("marquee.log"));

    candidates
}

/// Build the page from config, falling back to defaults on any config or
/// content problem.
fn build_page() -> LandingPage {
    let config = match MarqueeConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            MarqueeConfig::default()
        }
    };

    let content = match config.content_path() {
        Some(path) => load_content(path).unwrap_or_else(|err| {
            tracing::warn!("Using built-in content: {err}");
            default_content()
        }),
        None => default_content(),
    };

    LandingPage::mount(
        content,
        config.carousel_config(),
        config.counter_config(),
        config.ui_options(),
    )
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored even after panics or
/// early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut page = build_page();

    let result = {
        let mut session = TerminalSession::new()?;
        run(&mut session.terminal, &mut page).await
    };

    page.unmount();

    if let Err(err) = &result {
        tracing::error!("Exited with error: {err:?}");
        eprintln!("Error: {err:?}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run<B>(terminal: &mut Terminal<B>, page: &mut LandingPage) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = frames.tick().await;

    let result: Result<()> = loop {
        let now = frames.tick().await;
        let delta = now.duration_since(last_frame);
        last_frame = now;

        // Non-blocking input (drain queue only)
        match handle_events(page, &mut input) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        page.tick(delta);

        if let Err(e) = terminal.draw(|frame| draw(frame, page)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
