//! `Reducer`: the character-driven dispatcher tying `ParseContext` and
//! the `mode::*` strategies together into one `push`/`close` API.
//!
//! Each `push(ch)` call runs up to three phases:
//!
//! 1. Backtick accumulation. A backtick is never processed immediately;
//!    it increments `pending_backticks` and returns no diffs. Once the
//!    count reaches 3, the run is a fence marker and is handed straight
//!    to `mode::fence::trigger`, bypassing every other phase.
//! 2. Backtick flush / inline-code entry. A non-backtick character first
//!    flushes whatever backticks are pending. A single pending backtick
//!    is special: before it is flushed as literal text, the dispatcher
//!    checks whether it should instead open an inline-code run. If so,
//!    the block is entered with no diff for the backtick itself, and the
//!    current character is processed by the new mode below. Otherwise
//!    the pending backticks are flushed through the current mode's
//!    `flush_backticks`.
//! 3. Trigger scan and dispatch. At the start of a line, `#`, `-`, and a
//!    digit each have a chance to start a new structural mode before the
//!    character reaches the current mode's `process`. Once a trigger has
//!    fired (or none applied), the character is handed to the current
//!    mode's `process`.

use crate::block::Diff;
use crate::context::{Mode, ParseContext};
use crate::mode::{self, fence, heading, inline_code, ordered_list};
use crate::repair;

/// Owns a `ParseContext` and turns a character stream into a stream of
/// `Diff`s.
#[derive(Default)]
pub struct Reducer {
    ctx: ParseContext,
}

impl Reducer {
    pub fn new() -> Self {
        Self { ctx: ParseContext::new() }
    }

    /// Feeds one character and returns the diffs it produced.
    pub fn push(&mut self, ch: char) -> Vec<Diff> {
        if ch == '`' {
            self.ctx.pending_backticks += 1;
            if self.ctx.pending_backticks == 3 {
                self.ctx.pending_backticks = 0;
                let diffs = fence::trigger(&mut self.ctx);
                self.ctx.debug_check_invariants();
                return diffs;
            }
            debug_assert!(
                self.ctx.pending_backticks <= 2,
                "pending_backticks must never persist at 3 across a push call"
            );
            return Vec::new();
        }

        let mut diffs = self.flush_or_enter_inline_code();
        diffs.extend(self.dispatch(ch));
        self.ctx.debug_check_invariants();
        diffs
    }

    /// Flushes any pending (1 or 2) backticks ahead of a non-backtick
    /// character, or enters inline code if exactly one backtick is
    /// pending and the current mode allows it to open a run.
    fn flush_or_enter_inline_code(&mut self) -> Vec<Diff> {
        let n = self.ctx.pending_backticks;
        self.ctx.pending_backticks = 0;
        if n == 0 {
            return Vec::new();
        }
        if n == 1 && inline_code::can_start(&self.ctx) {
            return inline_code::enter(&mut self.ctx);
        }
        mode::strategy(self.ctx.mode).flush_backticks(&mut self.ctx, n)
    }

    /// Scans for a structural trigger at line start, then dispatches to
    /// whichever mode now owns the character.
    fn dispatch(&mut self, ch: char) -> Vec<Diff> {
        if self.ctx.at_line_start() {
            if let Some(diffs) = self.try_enter_heading(ch) {
                return diffs;
            }
            if let Some(diffs) = self.try_enter_list(ch) {
                return diffs;
            }
            if let Some(diffs) = self.try_enter_ordered_list(ch) {
                return diffs;
            }
        }
        mode::strategy(self.ctx.mode).process(&mut self.ctx, ch).diffs
    }

    fn try_enter_heading(&mut self, ch: char) -> Option<Vec<Diff>> {
        if ch != '#' || self.ctx.mode != Mode::Paragraph {
            return None;
        }
        self.ctx.mode = Mode::Heading;
        self.ctx.heading_level = 0;
        Some(heading::STRATEGY.process(&mut self.ctx, ch).diffs)
    }

    fn try_enter_list(&mut self, ch: char) -> Option<Vec<Diff>> {
        if ch != '-' || self.ctx.mode != Mode::Paragraph {
            return None;
        }
        self.ctx.mode = Mode::List;
        Some(Vec::new())
    }

    fn try_enter_ordered_list(&mut self, ch: char) -> Option<Vec<Diff>> {
        if self.ctx.mode != Mode::Paragraph || !ch.is_ascii_digit() {
            return None;
        }
        self.ctx.mode = Mode::OrderedList;
        Some(ordered_list::STRATEGY.process(&mut self.ctx, ch).diffs)
    }

    /// Ends the stream: discards any still-pending, never-disambiguated
    /// backtick run, closes out the current mode, then runs the
    /// end-of-stream inline-code repair pass against the last paragraph.
    ///
    /// A pending backtick run only ever gets resolved (flushed as
    /// literal text, or opening/closing an inline-code run) in response
    /// to a character that follows it. If the stream ends first, that
    /// decision was never reached, so the run is dropped silently
    /// instead of being guessed at: a bare trailing backtick or pair of
    /// backticks produces no block and no diff.
    pub fn close(&mut self) -> Vec<Diff> {
        let mut diffs = Vec::new();

        self.ctx.pending_backticks = 0;
        diffs.extend(mode::strategy(self.ctx.mode).close(&mut self.ctx));
        diffs.extend(self.repair_last_paragraph());

        self.ctx.debug_check_invariants();
        self.ctx.reset();
        diffs
    }

    fn repair_last_paragraph(&mut self) -> Vec<Diff> {
        let Some(last) = self.ctx.blocks.last() else {
            return Vec::new();
        };
        let crate::block::Block::Paragraph { text, .. } = last else {
            return Vec::new();
        };
        let Some(repaired) = repair::repair(text) else {
            return Vec::new();
        };
        let idx = self.ctx.blocks.len() - 1;
        if let crate::block::Block::Paragraph { text, .. } = &mut self.ctx.blocks[idx] {
            *text = repaired;
        }
        vec![Diff::patch(self.ctx.blocks[idx].clone())]
    }

    /// The blocks produced so far, in creation order.
    pub fn blocks(&self) -> &[crate::block::Block] {
        &self.ctx.blocks
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
