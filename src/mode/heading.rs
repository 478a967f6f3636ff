//! `HeadingStrategy`.
//!
//! Entry (triggered by the dispatcher from Paragraph mode) leaves
//! `heading_level = 0` and defers the triggering `#` back into `process`,
//! which is what actually counts it. `heading_level` doubles as a phase
//! flag: nonzero while still counting `#`s and waiting for the
//! separating space, zero once the heading block exists — disambiguated
//! here by whether `current_block` has been created yet.

use crate::block::{Block, Diff};
use crate::context::{Mode, ParseContext};
use crate::mode::{paragraph, ModeStrategy, StrategyResult};

pub static STRATEGY: HeadingStrategy = HeadingStrategy;

pub struct HeadingStrategy;

impl ModeStrategy for HeadingStrategy {
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult {
        let diffs = if ctx.current_block.is_none() {
            handle_uncreated(ctx, ch)
        } else {
            handle_established(ctx, ch)
        };
        StrategyResult::consumed(diffs)
    }

    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff> {
        let mut diffs = Vec::new();
        for i in 0..n {
            // A backtick before the heading's block exists can overflow
            // or otherwise abort the heading, switching mode mid-flush.
            // Hand the rest of the run to whatever strategy is current.
            if ctx.mode != Mode::Heading {
                let remaining = n - i;
                diffs.extend(crate::mode::strategy(ctx.mode).flush_backticks(ctx, remaining));
                return diffs;
            }
            diffs.extend(self.process(ctx, '`').diffs);
        }
        diffs
    }
}

fn handle_uncreated(ctx: &mut ParseContext, ch: char) -> Vec<Diff> {
    match ch {
        '#' => {
            ctx.heading_level += 1;
            if ctx.heading_level > 6 {
                abort_to_paragraph(ctx, None)
            } else {
                Vec::new()
            }
        }
        ' ' => {
            let level = ctx.heading_level;
            ctx.heading_level = 0;
            let id = ctx.take_id();
            let block = ctx.append_block(Block::Heading { id, level, text: String::new() });
            vec![Diff::append(block)]
        }
        other => abort_to_paragraph(ctx, Some(other)),
    }
}

fn handle_established(ctx: &mut ParseContext, ch: char) -> Vec<Diff> {
    if ch == '\n' {
        ctx.close_current_block();
        Vec::new()
    } else {
        if let Some(b) = ctx.current_block_mut() {
            b.text_mut().push(ch);
        }
        vec![Diff::patch(ctx.current_block_snapshot())]
    }
}

/// Demotes the accumulated `#` run (plus an optional trailing char that
/// broke it) to literal paragraph text and returns to Paragraph mode.
fn abort_to_paragraph(ctx: &mut ParseContext, trailing: Option<char>) -> Vec<Diff> {
    let n = ctx.heading_level;
    ctx.heading_level = 0;
    ctx.mode = Mode::Paragraph;
    let mut diffs = Vec::new();
    for _ in 0..n {
        diffs.extend(paragraph::append_char(ctx, '#'));
    }
    if let Some(c) = trailing {
        diffs.extend(paragraph::append_char(ctx, c));
    }
    diffs
}

#[cfg(test)]
#[path = "heading_tests.rs"]
mod tests;
