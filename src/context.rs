//! `ParseContext`: all mutable parse state threaded through a single `push` call.
//!
//! Strategies (in `mode::*`) mutate this context exclusively through the
//! `&mut ParseContext` the dispatcher hands them for the duration of one
//! call; there is no aliasing and no concurrent access, so no interior
//! mutability is needed.

use crate::block::{Block, BlockId};

/// Which mode strategy is currently driving character processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Paragraph,
    Heading,
    FenceStart,
    Code,
    InlineCode,
    List,
    OrderedList,
}

/// Encodes the in-progress ordered-list marker digits in a single signed
/// counter: positive while still collecting digits, negative once `.`
/// has been seen and the separating space is awaited, zero when no
/// marker is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderedCounter(pub i64);

impl OrderedCounter {
    pub const INACTIVE: Self = Self(0);

    pub fn is_active(self) -> bool {
        self.0 != 0
    }

    pub fn is_awaiting_space(self) -> bool {
        self.0 < 0
    }

    pub fn push_digit(self, digit: u32) -> Self {
        Self(self.0 * 10 + digit as i64)
    }

    pub fn mark_period_seen(self) -> Self {
        Self(-self.0)
    }

    pub fn number(self) -> u64 {
        self.0.unsigned_abs()
    }
}

/// All mutable state for one reducer instance.
///
/// `current_block` is a *non-owning* index back into `blocks` rather than
/// a pointer or reference, sidestepping reference invalidation as the
/// vector grows.
pub struct ParseContext {
    pub blocks: Vec<Block>,
    pub current_block: Option<usize>,
    pub next_block_id: BlockId,
    pub mode: Mode,
    pub pending_backticks: u8,
    pub language_buffer: String,
    pub heading_level: u8,
    pub ordered_list_number: OrderedCounter,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseContext {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            current_block: None,
            next_block_id: BlockId(0),
            mode: Mode::Paragraph,
            pending_backticks: 0,
            language_buffer: String::new(),
            heading_level: 0,
            ordered_list_number: OrderedCounter::INACTIVE,
        }
    }

    /// Hands out the next block id and advances the counter.
    pub fn take_id(&mut self) -> BlockId {
        let id = self.next_block_id;
        self.next_block_id = id.next();
        id
    }

    /// Appends `block` to `blocks`, makes it `current_block`, and returns
    /// a by-value copy suitable for an `Append` diff.
    pub fn append_block(&mut self, block: Block) -> Block {
        self.blocks.push(block.clone());
        self.current_block = Some(self.blocks.len() - 1);
        block
    }

    /// Returns a mutable reference to the current block, if any.
    pub fn current_block_mut(&mut self) -> Option<&mut Block> {
        self.current_block.map(|idx| &mut self.blocks[idx])
    }

    /// Returns a by-value copy of the current block's new state, suitable
    /// for a `Patch` diff. Panics if there is no current block — callers
    /// only invoke this right after mutating a block they know exists.
    pub fn current_block_snapshot(&self) -> Block {
        self.blocks[self.current_block.expect("current_block_snapshot with no current block")]
            .clone()
    }

    /// True if the current block is absent or has empty text: the
    /// condition under which `#`, `-`, and digits acquire structural
    /// meaning as line-leading markers instead of literal text.
    pub fn at_line_start(&self) -> bool {
        match self.current_block {
            None => true,
            Some(idx) => self.blocks[idx].text().is_empty(),
        }
    }

    /// Closes whatever block is open, returning to `Paragraph` mode with
    /// no current block. Pure bookkeeping — does not emit a diff.
    pub fn close_current_block(&mut self) {
        self.current_block = None;
        self.mode = Mode::Paragraph;
    }

    /// Resets all state to the initial configuration. Called once a
    /// stream has been fully closed out, so a `Reducer` can be reused for
    /// a fresh document without reallocating.
    pub fn reset(&mut self) {
        *self = ParseContext::new();
    }

    /// Debug-only self-check for the invariants documented in spec.md §3.
    /// A no-op in release builds; `Reducer` calls this after every `push`
    /// and before `close` resets state.
    pub(crate) fn debug_check_invariants(&self) {
        debug_assert!(
            self.pending_backticks <= 3,
            "pending_backticks must stay in 0..=3, got {}",
            self.pending_backticks
        );
        if let Some(idx) = self.current_block {
            debug_assert_eq!(
                idx,
                self.blocks.len() - 1,
                "current_block must index the last element of blocks"
            );
            debug_assert!(
                self.blocks[idx].id() < self.next_block_id,
                "current_block's id must be < next_block_id"
            );
        }
        debug_assert!(
            self.language_buffer.is_empty() || self.mode == Mode::FenceStart,
            "language_buffer must be empty outside FenceStart mode, got mode={:?}",
            self.mode
        );
        if self.heading_level > 0 {
            debug_assert_eq!(
                self.mode,
                Mode::Heading,
                "heading_level > 0 is only valid in Heading mode"
            );
            if let Some(idx) = self.current_block {
                debug_assert!(
                    !matches!(self.blocks[idx], Block::Heading { .. }),
                    "heading_level > 0 but the heading block already exists"
                );
            }
        }
    }
}
