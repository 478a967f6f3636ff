//! Entry point: wires CLI → reducer → layout → TUI event loop.
//!
//! This is the thin orchestrator that connects all pipeline stages. It
//! handles CLI argument parsing, file I/O, terminal initialization, the
//! event loop, and graceful shutdown. The file is replayed through the
//! `Reducer` one character at a time on a fixed delay, mirroring how a
//! live model or network stream would arrive.

mod app;
mod block;
mod cli;
mod context;
mod highlight;
mod inline;
mod layout;
mod mode;
mod reducer;
mod renderer;
mod repair;
mod subscribe;

use std::fs;
use std::io::Read as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use clap::Parser;
use ratatui::crossterm::event::{self, Event};

use crate::app::App;
use crate::block::{Block, Diff};
use crate::cli::Cli;
use crate::reducer::Reducer;
use crate::subscribe::DiffBus;

/// Set to `true` immediately after `ratatui::init()` so the panic hook knows
/// whether the terminal has been initialised and needs restoring.
///
/// Calling `ratatui::restore()` before `ratatui::init()` sends spurious
/// escape sequences to the terminal, which can corrupt the calling shell's
/// display on some terminals and multiplexers.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

const MAX_FILE_BYTES: u64 = 100 * 1024 * 1024; // 100 MB

fn main() -> color_eyre::Result<()> {
    // Install color_eyre error/panic hooks for pretty backtraces.
    color_eyre::install()?;

    // Chain our panic hook to restore the terminal before printing the backtrace.
    // The restore is guarded by TERMINAL_ACTIVE so it only runs after ratatui::init().
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if TERMINAL_ACTIVE.load(Ordering::SeqCst) {
            ratatui::restore();
        }
        original_hook(info);
    }));

    // Parse CLI arguments.
    let cli = Cli::parse();

    let source = read_source(&cli.file)?;

    // Load syntax highlighting resources (expensive, done once).
    let highlighter = highlight::Highlighter::new();

    // Get initial terminal size for layout.
    let (cols, _rows) = ratatui::crossterm::terminal::size()?;

    // The reducer hasn't produced anything yet — the document starts empty
    // and fills in as the event loop feeds characters through it.
    let blocks: Vec<Block> = Vec::new();
    let document = layout::flatten(&blocks, cols, &highlighter);

    // Sanitize filename for display: strip control characters and ANSI escape
    // sequences so a crafted filename cannot inject terminal escape codes into
    // the status bar output.
    let safe_filename = cli.file.chars().filter(|c| !c.is_control()).collect::<String>();

    // Create the application state.
    let mut app = App::new(document, safe_filename);

    // Initialize the terminal (enters raw mode + alternate screen).
    // TERMINAL_ACTIVE must be set immediately after so the panic hook is correct.
    let mut terminal = ratatui::init();
    TERMINAL_ACTIVE.store(true, Ordering::SeqCst);

    // Main event loop.
    let result = run_event_loop(&mut terminal, &mut app, &highlighter, &source, cli.delay_ms);

    // Always restore the terminal, even if the loop returned an error.
    ratatui::restore();

    result
}

/// Reads the markdown source from `path`, or from stdin when `path == "-"`.
///
/// The file-size guard only applies to regular files — stdin is a stream,
/// not something `fs::metadata` can size up front.
fn read_source(path: &str) -> color_eyre::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    // Guard against OOM: reject files that exceed a reasonable size threshold.
    // The check happens before ratatui::init() so the error prints to the normal
    // terminal instead of a raw alternate screen.
    let file_size = fs::metadata(path)?.len();
    if file_size > MAX_FILE_BYTES {
        return Err(color_eyre::eyre::eyre!(
            "{path}: file too large ({file_size} bytes; limit is {MAX_FILE_BYTES} bytes)"
        ));
    }
    Ok(fs::read_to_string(path)?)
}

/// Runs the TUI event loop until the user quits or an error occurs.
///
/// Separated from `main()` so that `ratatui::restore()` always runs
/// regardless of how this function exits. Drives two things on each
/// iteration: input events (key presses, resize) and, while the source
/// hasn't been fully replayed yet, one reducer step every `delay_ms`.
fn run_event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    highlighter: &highlight::Highlighter,
    source: &str,
    delay_ms: u64,
) -> color_eyre::Result<()> {
    let mut reducer = Reducer::new();
    let mut chars = source.chars();
    let delay = Duration::from_millis(delay_ms);
    let mut next_push = Instant::now();
    let mut streaming = true;

    // The view mirrors the reducer's blocks by subscribing to its diffs
    // through a `DiffBus` rather than reading `Reducer::blocks` directly —
    // the same seam a real renderer and a test harness would both use.
    let mirrored_blocks: Arc<Mutex<Vec<Block>>> = Arc::new(Mutex::new(Vec::new()));
    let mut bus = DiffBus::new();
    let sink = Arc::clone(&mirrored_blocks);
    let _subscription = bus.subscribe(move |diff| apply_diff(&mut sink.lock().unwrap(), diff));

    loop {
        app.viewport_height = terminal.size()?.height.saturating_sub(1) as usize;
        terminal.draw(|frame| renderer::draw(frame, app))?;

        let poll_timeout = if streaming {
            next_push.saturating_duration_since(Instant::now())
        } else {
            Duration::from_millis(200)
        };

        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(cols, _rows) => {
                    let blocks = mirrored_blocks.lock().unwrap();
                    app.document = layout::flatten(&blocks, cols, highlighter);
                    let max = app.max_scroll();
                    if app.scroll_offset > max {
                        app.scroll_offset = max;
                    }
                }
                // Ignore mouse, focus, and paste events.
                _ => {}
            }
        } else if streaming {
            let diffs = match chars.next() {
                Some(ch) => reducer.push(ch),
                None => {
                    streaming = false;
                    reducer.close()
                }
            };
            if !diffs.is_empty() {
                bus.publish_all(&diffs);
                let blocks = mirrored_blocks.lock().unwrap();
                let width = terminal.size()?.width;
                app.document = layout::flatten(&blocks, width, highlighter);
                drop(blocks);
                app.scroll_to_bottom();
            }
            next_push = Instant::now() + delay;
        }

        if app.quit {
            break;
        }
    }

    Ok(())
}

/// Mirrors one reducer diff into a flat, id-indexed block list: `Append`
/// adds to the end (ids are always assigned in increasing order), `Patch`
/// replaces the block carrying that id wherever it currently sits.
fn apply_diff(blocks: &mut Vec<Block>, diff: &Diff) {
    match diff {
        Diff::Append { block } => blocks.push(block.clone()),
        Diff::Patch { id, block } => {
            if let Some(existing) = blocks.iter_mut().find(|b| b.id() == *id) {
                *existing = block.clone();
            }
        }
    }
}
