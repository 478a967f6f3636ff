use super::*;
use crate::block::Block;

fn seed(ctx: &mut ParseContext, first_digit: u32) {
    ctx.mode = Mode::OrderedList;
    ctx.ordered_list_number = OrderedCounter::INACTIVE.push_digit(first_digit);
}

#[test]
fn test_ordered_list_multi_digit_then_period_then_space_materializes() {
    let mut ctx = ParseContext::new();
    seed(&mut ctx, 1);
    STRATEGY.process(&mut ctx, '2'); // "12"
    STRATEGY.process(&mut ctx, '.');
    let diffs = STRATEGY.process(&mut ctx, ' ').diffs;
    assert_eq!(diffs.len(), 1);
    match &ctx.blocks[0] {
        Block::OrderedListItem { number, text, .. } => {
            assert_eq!(*number, 12);
            assert!(text.is_empty());
        }
        _ => panic!("expected OrderedListItem block"),
    }
}

#[test]
fn test_ordered_list_newline_before_period_aborts_to_paragraph() {
    let mut ctx = ParseContext::new();
    seed(&mut ctx, 3);
    let diffs = STRATEGY.process(&mut ctx, '\n').diffs;
    assert_eq!(ctx.mode, Mode::Paragraph);
    assert!(!diffs.is_empty());
    match &ctx.blocks[0] {
        Block::Paragraph { text, .. } => assert_eq!(text, "3"),
        _ => panic!("expected Paragraph block"),
    }
}

#[test]
fn test_ordered_list_other_char_after_period_aborts_with_period_included() {
    let mut ctx = ParseContext::new();
    seed(&mut ctx, 1);
    STRATEGY.process(&mut ctx, '.');
    STRATEGY.process(&mut ctx, 'x');
    assert_eq!(ctx.mode, Mode::Paragraph);
    match &ctx.blocks[0] {
        Block::Paragraph { text, .. } => assert_eq!(text, "1.x"),
        _ => panic!("expected Paragraph block"),
    }
}

#[test]
fn test_ordered_list_established_item_appends_and_closes_on_newline() {
    let mut ctx = ParseContext::new();
    seed(&mut ctx, 2);
    STRATEGY.process(&mut ctx, '.');
    STRATEGY.process(&mut ctx, ' ');
    STRATEGY.process(&mut ctx, 'h');
    STRATEGY.process(&mut ctx, 'i');
    STRATEGY.process(&mut ctx, '\n');
    assert_eq!(ctx.mode, Mode::Paragraph);
    assert!(ctx.current_block.is_none());
    match &ctx.blocks[0] {
        Block::OrderedListItem { number, text, .. } => {
            assert_eq!(*number, 2);
            assert_eq!(text, "hi");
        }
        _ => panic!("expected OrderedListItem block"),
    }
}
