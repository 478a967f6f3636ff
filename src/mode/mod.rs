//! Mode strategies: one handler per parse mode, coordinated by `reducer::Reducer`.
//!
//! Each strategy exposes `process` (the per-character handler once the
//! dispatcher has decided this mode owns the character) and
//! `flush_backticks` (how 1 or 2 pending backticks are interpreted in
//! this mode). `close` defaults to a no-op; only `InlineCode` overrides
//! it, since an unterminated inline-code run needs to be silently
//! demoted rather than left dangling.
//!
//! The registry below maps `Mode -> &'static dyn ModeStrategy` via a
//! fixed table of zero-sized strategy values rather than an exhaustive
//! match in the dispatcher. This is the one point where a new block type
//! could be added without touching `reducer.rs`.

pub mod fence;
pub mod heading;
pub mod inline_code;
pub mod list;
pub mod ordered_list;
pub mod paragraph;

use crate::block::Diff;
use crate::context::{Mode, ParseContext};

/// Outcome of a strategy's `process` call.
pub struct StrategyResult {
    /// Diffs produced while handling this character.
    pub diffs: Vec<Diff>,
    /// `true` if this character should not flow to any further handler.
    /// Always `true` for `process` results today; kept as a field (rather
    /// than implied) because trigger-entry call sites need the same
    /// shape when a trigger both switches mode and consumes the char.
    pub handled: bool,
}

impl StrategyResult {
    pub fn consumed(diffs: Vec<Diff>) -> Self {
        Self { diffs, handled: true }
    }
}

pub trait ModeStrategy {
    /// Handles one character once the dispatcher has routed it here.
    fn process(&self, ctx: &mut ParseContext, ch: char) -> StrategyResult;

    /// Interprets 1 or 2 pending backticks that were not followed by a
    /// third. A run of 3 is a fence and is handled directly by the
    /// dispatcher, which never calls this for that case.
    fn flush_backticks(&self, ctx: &mut ParseContext, n: u8) -> Vec<Diff>;

    /// Called once from `Reducer::close`, after any still-pending backtick
    /// run has been discarded unresolved. Most modes have nothing to do
    /// here; `InlineCode` overrides it to demote its unterminated block.
    fn close(&self, _ctx: &mut ParseContext) -> Vec<Diff> {
        Vec::new()
    }
}

/// Returns the strategy registered for `mode`.
pub fn strategy(mode: Mode) -> &'static dyn ModeStrategy {
    match mode {
        Mode::Paragraph => &paragraph::STRATEGY,
        Mode::Heading => &heading::STRATEGY,
        Mode::FenceStart => &fence::FENCE_START_STRATEGY,
        Mode::Code => &fence::CODE_STRATEGY,
        Mode::InlineCode => &inline_code::STRATEGY,
        Mode::List => &list::STRATEGY,
        Mode::OrderedList => &ordered_list::STRATEGY,
    }
}
