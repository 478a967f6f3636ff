//! `OrderedListReducer`.
//!
//! Entry (a digit at line start) is handled by the dispatcher, which
//! consumes the digit and seeds `ordered_list_number`. This strategy
//! collects the remaining digits, the `.`, and the separating space
//! before the block exists; afterward it behaves like any other
//! line-item mode.

use crate::block::{Block, Diff};
use crate::context::{Mode, OrderedCounter, ParseContext};
use crate::mode::{paragraph, ModeStrategy, StrategyResult};

pub static STRATEGY: OrderedListStrategy = OrderedListStrategy;

pub struct OrderedListStrategy;

impl ModeStrategy for OrderedListStrategy {
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
            if ctx.mode != Mode::OrderedList {
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
    if ch.is_ascii_digit() && !ctx.ordered_list_number.is_awaiting_space() {
        let digit = ch.to_digit(10).expect("is_ascii_digit guarantees a base-10 digit");
        ctx.ordered_list_number = ctx.ordered_list_number.push_digit(digit);
        return Vec::new();
    }
    if ch == '.' && !ctx.ordered_list_number.is_awaiting_space() {
        ctx.ordered_list_number = ctx.ordered_list_number.mark_period_seen();
        return Vec::new();
    }
    if ch == ' ' && ctx.ordered_list_number.is_awaiting_space() {
        let number = ctx.ordered_list_number.number();
        ctx.ordered_list_number = OrderedCounter::INACTIVE;
        let id = ctx.take_id();
        let block = ctx.append_block(Block::OrderedListItem { id, number, text: String::new() });
        return vec![Diff::append(block)];
    }
    if ch == '\n' {
        return abort_to_paragraph(ctx, None);
    }
    abort_to_paragraph(ctx, Some(ch))
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

/// Demotes the digits collected so far (plus the `.` if already seen,
/// plus an optional trailing char that broke the marker) to literal
/// paragraph text and returns to Paragraph mode.
fn abort_to_paragraph(ctx: &mut ParseContext, trailing: Option<char>) -> Vec<Diff> {
    let counter = ctx.ordered_list_number;
    ctx.ordered_list_number = OrderedCounter::INACTIVE;
    ctx.mode = Mode::Paragraph;

    let mut literal = counter.number().to_string();
    if counter.is_awaiting_space() {
        literal.push('.');
    }

    let mut diffs = Vec::new();
    for c in literal.chars() {
        diffs.extend(paragraph::append_char(ctx, c));
    }
    if let Some(c) = trailing {
        diffs.extend(paragraph::append_char(ctx, c));
    }
    diffs
}

#[cfg(test)]
#[path = "ordered_list_tests.rs"]
mod tests;
