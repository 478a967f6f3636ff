//! `ParagraphStrategy`: the default, no-marker-recognized mode.
//!
//! Newline closes the current paragraph; every other character
//! accumulates into it, creating the block on first contact.

use crate::block::{Block, Diff};
use crate::context::ParseContext;
use crate::mode::{ModeStrategy, StrategyResult};

pub static STRATEGY: ParagraphStrategy = ParagraphStrategy;

pub struct ParagraphStrategy;

impl ModeStrategy for ParagraphStrategy {
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult {
        if ch == '\n' {
            ctx.close_current_block();
            return StrategyResult::consumed(Vec::new());
        }

        let diffs = append_char(ctx, ch);
        StrategyResult::consumed(diffs)
    }

    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
        let mut diffs = Vec::new();
        for _ in 0..n {
            diffs.extend(append_char(ctx, '`'));
        }
        diffs
    }
}

/// Appends one character of literal text to the current paragraph,
/// creating it on demand. Creating emits `Append` then `Patch` so a
/// listener sees the block exist before it sees its first character.
pub fn append_char(ctx: &mut ParseContext, ch: char) -> Vec<Diff> {
    let mut diffs = Vec::new();
    if ctx.current_block.is_none() {
        let id = ctx.take_id();
        let block = ctx.append_block(Block::Paragraph { id, text: String::new() });
        diffs.push(Diff::append(block));
    }
    if let Some(block) = ctx.current_block_mut() {
        block.text_mut().push(ch);
    }
    diffs.push(Diff::patch(ctx.current_block_snapshot()));
    diffs
}

#[cfg(test)]
#[path = "paragraph_tests.rs"]
mod tests;
