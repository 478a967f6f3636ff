use super::*;
use crate::block::BlockId;
use ratatui::style::{Color, Modifier};

fn id(n: u64) -> BlockId {
    BlockId(n)
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph { id: id(0), text: text.to_string() }
}

#[test]
fn test_layout_empty_blocks() {
    let highlighter = Highlighter::new();
    let doc = flatten(&[], 80, &highlighter);
    assert_eq!(doc.total_height, 0);
    assert!(doc.lines.is_empty());
}

#[test]
fn test_layout_single_paragraph_no_wrap() {
    let highlighter = Highlighter::new();
    let blocks = vec![paragraph("Hello world")];
    let doc = flatten(&blocks, 80, &highlighter);
    assert_eq!(doc.total_height, 1);
    assert!(matches!(&doc.lines[0], DocumentLine::Text(_)));
}

#[test]
fn test_layout_paragraph_wraps_at_width() {
    let highlighter = Highlighter::new();
    let long_text = "word ".repeat(20);
    let blocks = vec![paragraph(long_text.trim())];
    let doc = flatten(&blocks, 40, &highlighter);
    assert!(doc.total_height > 1, "expected wrapping, got {} lines", doc.total_height);
}

#[test]
fn test_layout_inter_block_spacing() {
    let highlighter = Highlighter::new();
    let blocks = vec![
        Block::Paragraph { id: id(0), text: "First".into() },
        Block::Heading { id: id(1), level: 1, text: "Second".into() },
    ];
    let doc = flatten(&blocks, 80, &highlighter);
    // paragraph line + blank separator + heading line = 3
    assert_eq!(doc.total_height, 3);
    assert!(matches!(&doc.lines[1], DocumentLine::Empty));
}

#[test]
fn test_layout_heading_renders_with_style() {
    let highlighter = Highlighter::new();
    let blocks = vec![Block::Heading { id: id(0), level: 1, text: "Title".into() }];
    let doc = flatten(&blocks, 80, &highlighter);
    assert_eq!(doc.total_height, 1);
    match &doc.lines[0] {
        DocumentLine::Text(line) => {
            assert!(line.spans.iter().any(|s| s.style.add_modifier.contains(Modifier::BOLD)));
        }
        other => panic!("expected Text, got heading rendered as {other:?}"),
    }
}

#[test]
fn test_layout_code_block_uses_code_lines() {
    let highlighter = Highlighter::new();
    let blocks =
        vec![Block::Code { id: id(0), lang: Some("rust".into()), text: "fn main() {}\n".into() }];
    let doc = flatten(&blocks, 80, &highlighter);
    assert!(doc.lines.iter().any(|l| matches!(l, DocumentLine::Code(_))));
}

#[test]
fn test_layout_inline_code_joins_surrounding_paragraph_line() {
    let highlighter = Highlighter::new();
    let blocks = vec![
        Block::Paragraph { id: id(0), text: "use ".into() },
        Block::InlineCode { id: id(1), text: "len".into() },
        Block::Paragraph { id: id(2), text: " here".into() },
    ];
    let doc = flatten(&blocks, 80, &highlighter);
    // All three blocks share one source line — no blank separators between them.
    assert_eq!(doc.total_height, 1);
    match &doc.lines[0] {
        DocumentLine::Text(line) => {
            let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert_eq!(joined, "use len here");
        }
        other => panic!("expected Text, got {other:?}"),
    }
}

#[test]
fn test_layout_separate_paragraph_lines_not_joined() {
    let highlighter = Highlighter::new();
    let blocks = vec![
        Block::Paragraph { id: id(0), text: "foo".into() },
        Block::Paragraph { id: id(1), text: "bar".into() },
    ];
    let doc = flatten(&blocks, 80, &highlighter);
    // Two separate lines closed by distinct newlines get a blank separator.
    assert_eq!(doc.total_height, 3);
}

#[test]
fn test_layout_list_items_render_tight() {
    let highlighter = Highlighter::new();
    let blocks = vec![
        Block::ListItem { id: id(0), text: "apple".into() },
        Block::ListItem { id: id(1), text: "pear".into() },
    ];
    let doc = flatten(&blocks, 80, &highlighter);
    assert_eq!(doc.total_height, 2);
    assert!(doc.lines.iter().all(|l| matches!(l, DocumentLine::Text(_))));
}

#[test]
fn test_layout_ordered_list_items_include_number_prefix() {
    let highlighter = Highlighter::new();
    let blocks = vec![Block::OrderedListItem { id: id(0), number: 1, text: "one".into() }];
    let doc = flatten(&blocks, 80, &highlighter);
    match &doc.lines[0] {
        DocumentLine::Text(line) => {
            let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert!(joined.starts_with("1. "));
        }
        other => panic!("expected Text, got {other:?}"),
    }
}

#[test]
fn test_layout_single_long_word() {
    let highlighter = Highlighter::new();
    let blocks = vec![paragraph("abcdefghijklmnopqrstuvwxyz")];
    let doc = flatten(&blocks, 10, &highlighter);
    assert!(doc.total_height >= 2, "long word should wrap");
}

#[test]
fn test_layout_preserves_styles_across_wrap() {
    let highlighter = Highlighter::new();
    let text = format!("**{}**", "word ".repeat(20).trim());
    let blocks = vec![paragraph(&text)];
    let doc = flatten(&blocks, 40, &highlighter);
    for line in &doc.lines {
        if let DocumentLine::Text(l) = line {
            for span in &l.spans {
                assert!(span.style.add_modifier.contains(Modifier::BOLD), "style lost after wrapping");
            }
        }
    }
}

#[test]
fn test_layout_repeated_text_no_misalignment() {
    let highlighter = Highlighter::new();
    let blocks = vec![paragraph("aaa bbb aaa bbb aaa bbb")];
    let doc = flatten(&blocks, 8, &highlighter);
    let mut all_text = String::new();
    for line in &doc.lines {
        if let DocumentLine::Text(l) = line {
            for span in &l.spans {
                all_text.push_str(&span.content);
            }
            all_text.push(' ');
        }
    }
    assert_eq!(all_text.matches("aaa").count(), 3, "word 'aaa' count");
    assert_eq!(all_text.matches("bbb").count(), 3, "word 'bbb' count");
}

#[test]
fn test_layout_unicode_emoji_no_panic() {
    let highlighter = Highlighter::new();
    let blocks =
        vec![paragraph("Hello \u{1f30d} world \u{1f389} test \u{1f680} more text here for wrapping")];
    let doc = flatten(&blocks, 15, &highlighter);
    assert!(doc.total_height >= 1);
}

#[test]
fn test_layout_cjk_text_no_panic() {
    let highlighter = Highlighter::new();
    let blocks = vec![paragraph("日本語のテキスト処理テスト")];
    let doc = flatten(&blocks, 10, &highlighter);
    assert!(doc.total_height >= 1);
}

#[test]
fn test_layout_zero_width_no_panic() {
    let highlighter = Highlighter::new();
    let blocks = vec![paragraph("text")];
    let doc = flatten(&blocks, 0, &highlighter);
    assert!(doc.total_height >= 1);
}

#[test]
fn test_layout_mixed_inline_styles_content_preserved() {
    let highlighter = Highlighter::new();
    let blocks = vec![paragraph("Use `fmt` for **formatting** output in your programs")];
    let doc = flatten(&blocks, 20, &highlighter);
    let mut all_text = String::new();
    for line in &doc.lines {
        if let DocumentLine::Text(l) = line {
            for span in &l.spans {
                all_text.push_str(&span.content);
            }
        }
    }
    assert!(all_text.contains("Use "), "should contain 'Use '");
    assert!(all_text.contains("fmt"), "should contain 'fmt'");
    assert!(all_text.contains("formatting"), "should contain 'formatting'");
}

#[test]
fn test_layout_inline_code_style_survives_into_joined_line() {
    let highlighter = Highlighter::new();
    let blocks = vec![
        Block::Paragraph { id: id(0), text: "see ".into() },
        Block::InlineCode { id: id(1), text: "x".into() },
    ];
    let doc = flatten(&blocks, 80, &highlighter);
    match &doc.lines[0] {
        DocumentLine::Text(line) => {
            assert!(line.spans.iter().any(|s| s.style.bg == Some(Color::Indexed(236))));
        }
        other => panic!("expected Text, got {other:?}"),
    }
}
