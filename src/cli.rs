//! CLI argument definition for streamdown.
//!
//! This module is intentionally free of non-clap dependencies so that
//! a future xtask can import it via `#[path]` for man page and shell
//! completion generation.

use clap::Parser;

fn default_delay_ms() -> u64 {
    20
}

/// Terminal markdown viewer that replays a file through the streaming
/// reducer, one character at a time, so blocks render the way they would
/// from a live model or network source.
#[derive(Parser)]
#[command(name = "streamdown", version, about = "Streaming terminal markdown viewer")]
pub struct Cli {
    /// Markdown file to render (use "-" for stdin).
    pub file: String,

    /// Milliseconds to wait between feeding each character to the reducer.
    /// Set to 0 to replay as fast as possible.
    #[arg(long, default_value_t = default_delay_ms())]
    pub delay_ms: u64,
}
