//! Layout engine: flattens `Block`s into `DocumentLine` sequences for rendering.
//!
//! This module is the second stage of the rendering pipeline. It takes
//! the reducer's append-only block list and produces a flat sequence of
//! `DocumentLine`s sized to fit a given terminal width. Because the
//! reducer splits one source line into several blocks whenever inline
//! code interrupts it (`Paragraph`, `InlineCode`, `Paragraph`, ...),
//! `flatten` first regroups adjacent blocks that belong to the same
//! visual line before wrapping.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::block::Block;
use crate::highlight::Highlighter;
use crate::inline::{self, StyledSpan};

const CODE_THEME: &str = "base16-ocean.dark";

/// A pre-rendered document ready for viewport slicing and rendering.
///
/// Contains all lines laid out for a specific terminal width. Rebuilt
/// whenever the block list changes or the terminal is resized.
pub struct PreRenderedDocument {
    /// All document lines in display order.
    pub lines: Vec<DocumentLine>,
    /// Total number of lines (== `lines.len()`).
    pub total_height: usize,
}

/// A single line of the pre-rendered document.
///
/// The renderer matches on this enum exhaustively to produce frame output.
pub enum DocumentLine {
    /// A line of styled text (paragraph, heading, list item).
    Text(Line<'static>),
    /// A line of syntax-highlighted code, rendered with a distinct background.
    Code(Line<'static>),
    /// An empty line used for inter-block spacing.
    Empty,
    /// A horizontal rule spanning the terminal width.
    Rule,
}

/// One unit of the regrouped block sequence.
enum Group<'a> {
    /// A run of `Paragraph`/`InlineCode` blocks sharing one visual line.
    Line(Vec<&'a Block>),
    /// A block that always occupies its own line(s): heading, code, list item.
    Standalone(&'a Block),
}

/// Flattens `blocks` into a `PreRenderedDocument` sized to `width` columns.
///
/// Text lines are word-wrapped; code blocks are run through `highlighter`.
/// An `Empty` line separates adjacent groups, except between consecutive
/// items of the same list kind, which render tight (no blank line).
pub fn flatten(blocks: &[Block], width: u16, highlighter: &Highlighter) -> PreRenderedDocument {
    let width = (width as usize).max(1);
    let groups = group_blocks(blocks);
    let mut lines: Vec<DocumentLine> = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 && !tight(&groups[i - 1], group) {
            lines.push(DocumentLine::Empty);
        }
        render_group(group, width, highlighter, &mut lines);
    }

    let total_height = lines.len();
    PreRenderedDocument { lines, total_height }
}

fn render_group(group: &Group, width: usize, highlighter: &Highlighter, lines: &mut Vec<DocumentLine>) {
    match group {
        Group::Line(run) => {
            let spans = line_spans(run);
            let wrapped = wrap_styled_spans(&spans, width);
            if wrapped.is_empty() {
                lines.push(DocumentLine::Empty);
            } else {
                lines.extend(wrapped.into_iter().map(DocumentLine::Text));
            }
        }
        Group::Standalone(block) => match block {
            Block::Heading { level, text, .. } => {
                let spans = heading_spans(*level, text);
                let wrapped = wrap_styled_spans(&spans, width);
                if wrapped.is_empty() {
                    lines.push(DocumentLine::Empty);
                } else {
                    lines.extend(wrapped.into_iter().map(DocumentLine::Text));
                }
            }
            Block::Code { lang, text, .. } => {
                let highlighted = highlighter.highlight_code(text, lang.as_deref().unwrap_or(""), CODE_THEME);
                if highlighted.is_empty() {
                    lines.push(DocumentLine::Empty);
                } else {
                    lines.extend(highlighted.into_iter().map(DocumentLine::Code));
                }
            }
            Block::ListItem { text, .. } => {
                let mut spans = vec![StyledSpan { text: "- ".to_string(), style: Style::default() }];
                spans.extend(inline::plain_spans(text));
                let wrapped = wrap_styled_spans(&spans, width);
                lines.extend(wrapped.into_iter().map(DocumentLine::Text));
            }
            Block::OrderedListItem { number, text, .. } => {
                let mut spans =
                    vec![StyledSpan { text: format!("{number}. "), style: Style::default() }];
                spans.extend(inline::plain_spans(text));
                let wrapped = wrap_styled_spans(&spans, width);
                lines.extend(wrapped.into_iter().map(DocumentLine::Text));
            }
            // Paragraph/InlineCode never appear standalone — group_blocks
            // always places them in a Group::Line.
            Block::Paragraph { .. } | Block::InlineCode { .. } => {}
        },
    }
}

/// Regroups a flat block list into visual-line and standalone groups.
fn group_blocks(blocks: &[Block]) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < blocks.len() {
        match &blocks[i] {
            Block::Paragraph { .. } | Block::InlineCode { .. } => {
                let mut run = vec![&blocks[i]];
                let mut j = i + 1;
                while j < blocks.len() && joinable(&blocks[j - 1], &blocks[j]) {
                    run.push(&blocks[j]);
                    j += 1;
                }
                groups.push(Group::Line(run));
                i = j;
            }
            other => {
                groups.push(Group::Standalone(other));
                i += 1;
            }
        }
    }
    groups
}

/// True when `next` continues the same source line `prev` started — the
/// reducer only ever splits a line into multiple blocks to carve out an
/// inline-code run, never between two complete paragraph lines.
fn joinable(prev: &Block, next: &Block) -> bool {
    matches!(
        (prev, next),
        (Block::Paragraph { .. }, Block::InlineCode { .. })
            | (Block::InlineCode { .. }, Block::Paragraph { .. })
            | (Block::InlineCode { .. }, Block::InlineCode { .. })
    )
}

/// True when no blank line should separate two adjacent groups: both are
/// list items of the same kind.
fn tight(prev: &Group, cur: &Group) -> bool {
    matches!(
        (prev, cur),
        (Group::Standalone(Block::ListItem { .. }), Group::Standalone(Block::ListItem { .. }))
            | (
                Group::Standalone(Block::OrderedListItem { .. }),
                Group::Standalone(Block::OrderedListItem { .. })
            )
    )
}

/// Builds the flat span sequence for one `Group::Line` run.
fn line_spans(run: &[&Block]) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    for block in run {
        match block {
            Block::Paragraph { text, .. } => spans.extend(inline::plain_spans(text)),
            Block::InlineCode { text, .. } => spans.push(inline::code_span(text)),
            _ => {}
        }
    }
    spans
}

/// Returns the heading style for a given level (1–6): a distinct accent
/// color for levels 1–3, bold everywhere, with h4–h6 additionally italic.
fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::LightCyan,
        2 => Color::Green,
        3 => Color::Yellow,
        _ => Color::White,
    };
    let modifier = match level {
        1..=3 => Modifier::BOLD,
        _ => Modifier::BOLD | Modifier::ITALIC,
    };
    Style::default().fg(color).add_modifier(modifier)
}

fn heading_spans(level: u8, text: &str) -> Vec<StyledSpan> {
    let base = heading_style(level);
    inline::plain_spans(text)
        .into_iter()
        .map(|s| StyledSpan { text: s.text, style: base.patch(s.style) })
        .collect()
}

/// Wraps styled spans to fit within a given width, preserving styles.
///
/// Algorithm:
/// 1. Concatenate all span text into a single plain-text string, building
///    a parallel byte-to-style map.
/// 2. Use `textwrap::wrap()` to determine line break positions.
/// 3. Walk a cursor through the plain text for each wrapped line, skipping
///    whitespace break points, then extract styled spans by consulting
///    the byte-to-style map.
fn wrap_styled_spans(spans: &[StyledSpan], width: usize) -> Vec<Line<'static>> {
    if spans.is_empty() {
        return Vec::new();
    }

    // Handle hard breaks (\n) by splitting into sub-paragraphs.
    if spans.iter().any(|s| s.text.contains('\n')) {
        return wrap_with_hard_breaks(spans, width);
    }

    // 1. Build plain text and parallel byte-to-style map.
    let mut plain = String::new();
    let mut byte_styles: Vec<Style> = Vec::new();
    for span in spans {
        for _ in span.text.bytes() {
            byte_styles.push(span.style);
        }
        plain.push_str(&span.text);
    }

    if plain.is_empty() {
        return Vec::new();
    }

    // 2. Wrap the plain text.
    let wrap_options = textwrap::Options::new(width)
        .word_separator(textwrap::WordSeparator::UnicodeBreakProperties);
    let wrapped_lines = textwrap::wrap(&plain, &wrap_options);

    // 3. Map each wrapped line back to styled spans using a monotonic cursor.
    let mut result = Vec::with_capacity(wrapped_lines.len());
    let mut cursor: usize = 0;

    for wrapped_text in &wrapped_lines {
        // Skip whitespace between wrapped lines (break points consumed by textwrap).
        // Only advance forward — the cursor never goes backward.
        while cursor < plain.len() {
            if plain[cursor..].starts_with(wrapped_text.as_ref()) {
                break;
            }
            // Advance by one character (not one byte) to stay on char boundaries.
            let ch_len = plain[cursor..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            cursor += ch_len;
        }

        let line_start = cursor;
        let line_end = cursor + wrapped_text.len();
        // Clamp to plain text length for safety.
        let line_end = line_end.min(plain.len());

        let line_spans = build_spans_for_range(&plain, &byte_styles, line_start, line_end);
        result.push(Line::from(line_spans));

        cursor = line_end;
    }

    result
}

/// Builds styled `Span`s for a byte range of the plain text.
///
/// Walks through the range by characters, grouping consecutive bytes
/// that share the same style into a single `Span`. All slicing happens
/// at character boundaries.
fn build_spans_for_range(
    plain: &str,
    byte_styles: &[Style],
    start: usize,
    end: usize,
) -> Vec<Span<'static>> {
    if start >= end || start >= plain.len() {
        return Vec::new();
    }

    let segment = &plain[start..end];
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run_start = start;
    let mut run_style = byte_styles[start];

    for (i, _ch) in segment.char_indices() {
        let abs_pos = start + i;
        if byte_styles[abs_pos] != run_style {
            let text = &plain[run_start..abs_pos];
            if !text.is_empty() {
                spans.push(Span::styled(text.to_string(), run_style));
            }
            run_start = abs_pos;
            run_style = byte_styles[abs_pos];
        }
    }

    // Emit final run.
    let text = &plain[run_start..end];
    if !text.is_empty() {
        spans.push(Span::styled(text.to_string(), run_style));
    }

    spans
}

/// Handles text containing hard breaks by splitting at `\n` boundaries
/// first, then wrapping each segment independently.
fn wrap_with_hard_breaks(spans: &[StyledSpan], width: usize) -> Vec<Line<'static>> {
    let mut groups: Vec<Vec<StyledSpan>> = Vec::new();
    let mut current_group: Vec<StyledSpan> = Vec::new();

    for span in spans {
        if span.text.contains('\n') {
            let parts: Vec<&str> = span.text.split('\n').collect();
            for (i, part) in parts.iter().enumerate() {
                if !part.is_empty() {
                    current_group.push(StyledSpan {
                        text: part.to_string(),
                        style: span.style,
                    });
                }
                if i < parts.len() - 1 {
                    groups.push(std::mem::take(&mut current_group));
                }
            }
        } else {
            current_group.push(StyledSpan {
                text: span.text.clone(),
                style: span.style,
            });
        }
    }
    if !current_group.is_empty() {
        groups.push(current_group);
    }

    let mut result = Vec::new();
    for group in &groups {
        let wrapped = wrap_styled_spans(group, width);
        if wrapped.is_empty() {
            result.push(Line::from(Vec::<Span<'static>>::new()));
        } else {
            result.extend(wrapped);
        }
    }

    result
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
