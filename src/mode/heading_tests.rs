use super::*;
use crate::block::Block;

#[test]
fn test_heading_counts_hashes_then_creates_on_space() {
    let mut ctx = ParseContext::new();
    ctx.mode = Mode::Heading;
    STRATEGY.process(&mut ctx, '#');
    assert_eq!(ctx.heading_level, 1);
    assert!(ctx.current_block.is_none());
    let diffs = STRATEGY.process(&mut ctx, ' ').diffs;
    assert_eq!(diffs.len(), 1);
    assert!(matches!(diffs[0], Diff::Append { .. }));
    match &ctx.blocks[0] {
        Block::Heading { level, text, .. } => {
            assert_eq!(*level, 1);
            assert_eq!(text, "");
        }
        _ => panic!("expected Heading block"),
    }
}

#[test]
fn test_heading_overflow_past_six_demotes_to_paragraph() {
    let mut ctx = ParseContext::new();
    ctx.mode = Mode::Heading;
    for _ in 0..6 {
        STRATEGY.process(&mut ctx, '#');
    }
    assert_eq!(ctx.heading_level, 6);
    let diffs = STRATEGY.process(&mut ctx, '#').diffs;
    assert_eq!(ctx.mode, Mode::Paragraph);
    assert_eq!(ctx.heading_level, 0);
    match &ctx.blocks[0] {
        Block::Paragraph { text, .. } => assert_eq!(text, "#######"),
        _ => panic!("expected Paragraph block after overflow"),
    }
    assert!(!diffs.is_empty());
}

#[test]
fn test_heading_non_hash_non_space_before_space_aborts() {
    let mut ctx = ParseContext::new();
    ctx.mode = Mode::Heading;
    STRATEGY.process(&mut ctx, '#');
    STRATEGY.process(&mut ctx, '#');
    STRATEGY.process(&mut ctx, 'x');
    assert_eq!(ctx.mode, Mode::Paragraph);
    match &ctx.blocks[0] {
        Block::Paragraph { text, .. } => assert_eq!(text, "##x"),
        _ => panic!("expected Paragraph block"),
    }
}

#[test]
fn test_heading_established_block_newline_closes() {
    let mut ctx = ParseContext::new();
    ctx.mode = Mode::Heading;
    STRATEGY.process(&mut ctx, '#');
    STRATEGY.process(&mut ctx, ' ');
    STRATEGY.process(&mut ctx, 'H');
    STRATEGY.process(&mut ctx, 'i');
    STRATEGY.process(&mut ctx, '\n');
    assert_eq!(ctx.mode, Mode::Paragraph);
    assert!(ctx.current_block.is_none());
    match &ctx.blocks[0] {
        Block::Heading { level, text, .. } => {
            assert_eq!(*level, 1);
            assert_eq!(text, "Hi");
        }
        _ => panic!("expected Heading block"),
    }
}

#[test]
fn test_heading_space_is_content_once_block_exists() {
    let mut ctx = ParseContext::new();
    ctx.mode = Mode::Heading;
    STRATEGY.process(&mut ctx, '#');
    STRATEGY.process(&mut ctx, ' ');
    STRATEGY.process(&mut ctx, 'A');
    STRATEGY.process(&mut ctx, ' ');
    STRATEGY.process(&mut ctx, 'B');
    match &ctx.blocks[0] {
        Block::Heading { text, .. } => assert_eq!(text, "A B"),
        _ => panic!("expected Heading block"),
    }
}
