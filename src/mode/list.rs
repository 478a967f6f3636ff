//! `ListReducer` — unordered list items.
//!
//! Entry ('-' at line start) is handled by the dispatcher, which consumes
//! the `-` and switches to `List` mode with no block yet created. This
//! strategy only ever sees what comes after that marker.

use crate::block::{Block, Diff};
use crate::context::ParseContext;
use crate::mode::{ModeStrategy, StrategyResult};

pub static STRATEGY: ListStrategy = ListStrategy;

pub struct ListStrategy;

impl ModeStrategy for ListStrategy {
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult {
        if ch == '\n' {
            ctx.close_current_block();
            return StrategyResult::consumed(Vec::new());
        }
        StrategyResult::consumed(handle_char(ctx, ch))
    }

    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
        let mut diffs = Vec::new();
        for _ in 0..n {
            diffs.extend(handle_char(ctx, '`'));
        }
        diffs
    }
}

fn handle_char(ctx: &mut ParseContext, ch: char) -> Vec<Diff> {
    if ctx.current_block.is_some() {
        return append_char(ctx, ch);
    }
    if ch == ' ' {
        // The separator right after `-` — consumed, not added to text.
        create_empty(ctx)
    } else {
        create_with_char(ctx, ch)
    }
}

fn create_empty(ctx: &mut ParseContext) -> Vec<Diff> {
    let id = ctx.take_id();
    let block = ctx.append_block(Block::ListItem { id, text: String::new() });
    vec![Diff::append(block)]
}

fn create_with_char(ctx: &mut ParseContext, ch: char) -> Vec<Diff> {
    let id = ctx.take_id();
    let mut text = String::new();
    text.push(ch);
    let block = ctx.append_block(Block::ListItem { id, text });
    vec![Diff::append(block)]
}

fn append_char(ctx: &mut ParseContext, ch: char) -> Vec<Diff> {
    if let Some(b) = ctx.current_block_mut() {
        b.text_mut().push(ch);
    }
    vec![Diff::patch(ctx.current_block_snapshot())]
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
