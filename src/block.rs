//! Block and Diff data model.
//!
//! `Block` is the append-only unit the reducer produces; `Diff` is the
//! incremental instruction a view applies to stay in sync with it. Both
//! are plain data — nothing here drives the state machine in `reducer`.

/// Stable, monotonically increasing identifier for a block.
///
/// Ids are handed out in the order blocks are created and are never
/// reused, even if the block they named is later "closed". Because
/// `ParseContext::blocks` is append-only and never reordered, a block's
/// id also happens to equal its index in that vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u64);

impl BlockId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A structured chunk of parsed Markdown output.
///
/// Every variant carries its `id` and accumulated `text`; heading/code/
/// ordered-list variants carry their extra structural field alongside.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { id: BlockId, text: String },
    Heading { id: BlockId, level: u8, text: String },
    Code { id: BlockId, lang: Option<String>, text: String },
    InlineCode { id: BlockId, text: String },
    ListItem { id: BlockId, text: String },
    OrderedListItem { id: BlockId, number: u64, text: String },
}

impl Block {
    pub fn id(&self) -> BlockId {
        match self {
            Block::Paragraph { id, .. }
            | Block::Heading { id, .. }
            | Block::Code { id, .. }
            | Block::InlineCode { id, .. }
            | Block::ListItem { id, .. }
            | Block::OrderedListItem { id, .. } => *id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Block::Paragraph { text, .. }
            | Block::Heading { text, .. }
            | Block::Code { text, .. }
            | Block::InlineCode { text, .. }
            | Block::ListItem { text, .. }
            | Block::OrderedListItem { text, .. } => text,
        }
    }

    pub fn text_mut(&mut self) -> &mut String {
        match self {
            Block::Paragraph { text, .. }
            | Block::Heading { text, .. }
            | Block::Code { text, .. }
            | Block::InlineCode { text, .. }
            | Block::ListItem { text, .. }
            | Block::OrderedListItem { text, .. } => text,
        }
    }
}

/// An incremental instruction describing how a view should mutate its
/// own block list to stay in sync with the reducer.
///
/// Both variants carry a by-value copy of the block (never a reference),
/// so the emitted history stays decoupled from later in-place mutation
/// of that block.
#[derive(Debug, Clone, PartialEq)]
pub enum Diff {
    /// A new block was appended. `block` carries its full state at the
    /// moment of emission (almost always empty or near-empty text).
    Append { block: Block },
    /// The block with the given id changed. `block` carries its full
    /// new state; the view replaces wholesale rather than patching a
    /// delta.
    Patch { id: BlockId, block: Block },
}

impl Diff {
    pub fn append(block: Block) -> Self {
        Diff::Append { block }
    }

    pub fn patch(block: Block) -> Self {
        Diff::Patch { id: block.id(), block }
    }
}
