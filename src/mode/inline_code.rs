//! `InlineCodeReducer`.
//!
//! Entry is detected by the dispatcher, not by this module: a lone
//! backtick (`pending_backticks == 1`) followed by a non-backtick
//! character triggers entry on that *following* character, never on the
//! backtick itself. `enter` creates the block and emits its `Append`;
//! the dispatcher then defers the triggering character into `process`
//! immediately afterward.

use crate::block::{Block, Diff};
use crate::context::{Mode, ParseContext};
use crate::mode::{ModeStrategy, StrategyResult};

pub static STRATEGY: InlineCodeStrategy = InlineCodeStrategy;

pub struct InlineCodeStrategy;

/// True if a lone pending backtick in `ctx.mode` may open an inline-code
/// run. Excludes `Code`/`FenceStart` (a backtick there is fence business,
/// not inline code) and `InlineCode` itself (already inside one).
pub fn can_start(ctx: &ParseContext) -> bool {
    !matches!(ctx.mode, Mode::Code | Mode::FenceStart | Mode::InlineCode)
}

/// Creates the inline-code block and switches mode. Does not consume any
/// character — the dispatcher defers the current one into `process`
/// right after calling this.
pub fn enter(ctx: &mut ParseContext) -> Vec<Diff> {
    ctx.mode = Mode::InlineCode;
    let id = ctx.take_id();
    let block = ctx.append_block(Block::InlineCode { id, text: String::new() });
    vec![Diff::append(block)]
}

impl ModeStrategy for InlineCodeStrategy {
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult {
        if ch == '\n' {
            ctx.close_current_block();
            StrategyResult::consumed(Vec::new())
        } else {
            if let Some(b) = ctx.current_block_mut() {
                b.text_mut().push(ch);
            }
            StrategyResult::consumed(vec![Diff::patch(ctx.current_block_snapshot())])
        }
    }

    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
        if n == 1 {
            // The closing backtick. Content was already patched in full
            // by the last `process` call, so no diff is needed here.
            ctx.close_current_block();
            Vec::new()
        } else {
            if let Some(b) = ctx.current_block_mut() {
                for _ in 0..n {
                    b.text_mut().push('`');
                }
            }
            vec![Diff::patch(ctx.current_block_snapshot())]
        }
    }

    fn close(&self, ctx: &mut ParseContext) -> Vec<Diff> {
        // An inline-code run that never saw its closing backtick is
        // reinterpreted as literal paragraph text: the opening backtick,
        // consumed as the entry trigger and never stored in `text`, is
        // restored ahead of whatever content was collected.
        ctx.mode = Mode::Paragraph;
        let Some(idx) = ctx.current_block.take() else {
            return Vec::new();
        };
        let Block::InlineCode { id, text } = ctx.blocks[idx].clone() else {
            return Vec::new();
        };
        ctx.blocks[idx] = Block::Paragraph { id, text: format!("`{text}") };
        vec![Diff::patch(ctx.blocks[idx].clone())]
    }
}

#[cfg(test)]
#[path = "inline_code_tests.rs"]
mod tests;
