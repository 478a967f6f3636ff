//! `CodeFenceReducer`, covering both the `FenceStart` and `Code` modes.
//!
//! The fence *trigger* itself (three consecutive backticks) is invoked
//! directly by the dispatcher, never through `ModeStrategy::process`: a
//! run of exactly three backticks never flows through the normal flush
//! or per-character path. `trigger` lives here because it is the one
//! piece of fence behavior that both `FenceStart` and `Code` modes
//! share.

use crate::block::{Block, Diff};
use crate::context::{Mode, ParseContext};
use crate::mode::{ModeStrategy, StrategyResult};

pub static FENCE_START_STRATEGY: FenceStartStrategy = FenceStartStrategy;
pub static CODE_STRATEGY: CodeStrategy = CodeStrategy;

/// Called by the dispatcher when `pending_backticks` reaches 3.
///
/// If already inside a fenced code block (`FenceStart` or `Code`),
/// closes it. Otherwise opens a new, empty `Code` block and switches to
/// `FenceStart` to collect the language info string.
pub fn trigger(ctx: &mut ParseContext) -> Vec<Diff> {
    if matches!(ctx.mode, Mode::FenceStart | Mode::Code) {
        ctx.close_current_block();
        return Vec::new();
    }

    ctx.language_buffer.clear();
    ctx.mode = Mode::FenceStart;
    let id = ctx.take_id();
    let block = ctx.append_block(Block::Code { id, lang: None, text: String::new() });
    vec![Diff::append(block)]
}

pub struct FenceStartStrategy;

impl ModeStrategy for FenceStartStrategy {
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult {
        if ch == '\n' {
            let diffs = finalize_language(ctx);
            ctx.mode = Mode::Code;
            StrategyResult::consumed(diffs)
        } else {
            ctx.language_buffer.push(ch);
            StrategyResult::consumed(Vec::new())
        }
    }

    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
        append_backticks_to_code_text(ctx, n)
    }
}

pub struct CodeStrategy;

impl ModeStrategy for CodeStrategy {
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult {
        if let Some(b) = ctx.current_block_mut() {
            b.text_mut().push(ch);
        }
        StrategyResult::consumed(vec![Diff::patch(ctx.current_block_snapshot())])
    }

    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
        append_backticks_to_code_text(ctx, n)
    }
}

/// Sets the code block's `lang` from the accumulated info string, if
/// non-empty after trimming, and emits a `Patch` if it changed.
fn finalize_language(ctx: &mut ParseContext) -> Vec<Diff> {
    let trimmed = ctx.language_buffer.trim().to_string();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if let Some(Block::Code { lang, .. }) = ctx.current_block_mut() {
        *lang = Some(trimmed);
    }
    vec![Diff::patch(ctx.current_block_snapshot())]
}

fn append_backticks_to_code_text(ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
    if let Some(b) = ctx.current_block_mut() {
        for _ in 0..n {
            b.text_mut().push('`');
        }
    }
    vec![Diff::patch(ctx.current_block_snapshot())]
}

#[cfg(test)]
#[path = "fence_tests.rs"]
mod tests;
