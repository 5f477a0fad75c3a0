//! Integration tests for content parsing.

use mathtext::model::{Block, InlineNode, MathMode};
use mathtext::parser::{parse_math_spans, ContentParser, ParseOptions, Segment, Segmenter};
use mathtext::{parse, parse_with_options};

fn paragraph_nodes(block: &Block) -> &[InlineNode] {
    match block {
        Block::Paragraph(p) => &p.content,
        other => panic!("Expected paragraph, got {:?}", other),
    }
}

#[test]
fn test_line_without_delimiters_is_single_text_node() {
    let doc = parse("Just a sentence, nothing special.");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(
        paragraph_nodes(&doc.blocks[0]),
        &[InlineNode::text("Just a sentence, nothing special.")]
    );
}

#[test]
fn test_text_round_trip_preserves_source() {
    let lines = [
        "The area is $\\pi r^2$ for radius $r$.",
        "$$\\int_0^1 x\\,dx = \\frac{1}{2}$$",
        "Unbalanced $ stays, as does $$ this",
        "price $5",
    ];
    for line in lines {
        let nodes = parse_math_spans(line);
        let rebuilt: String = nodes.iter().map(InlineNode::source_text).collect();
        assert_eq!(rebuilt, line, "source not preserved for {:?}", line);
    }
}

#[test]
fn test_unterminated_display_leaves_rest_as_text() {
    let nodes = parse_math_spans("Start $a$ then $$b and $c$");
    assert_eq!(
        nodes,
        vec![
            InlineNode::text("Start "),
            InlineNode::math("a", MathMode::Inline),
            InlineNode::text(" then $$b and $c$"),
        ]
    );
}

#[test]
fn test_blank_lines_become_spacers() {
    let doc = parse("a\n\n   \nb");
    let kinds: Vec<bool> = doc.blocks.iter().map(Block::is_spacer).collect();
    assert_eq!(kinds, vec![false, true, true, false]);
}

#[test]
fn test_table_with_separator_and_math_cells() {
    let doc = parse("| x | $x^2$ |\n|:-:|:-:|\n| 2 | 4 |\n| 3 | 9 |");
    assert_eq!(doc.block_count(), 1);

    let table = doc.tables().next().expect("table block");
    assert_eq!(table.header_texts(), vec!["x", "$x^2$"]);
    assert_eq!(
        table.header[1].content.content,
        vec![InlineNode::math("x^2", MathMode::Inline)]
    );
    assert_eq!(table.body_texts(), vec![vec!["2", "4"], vec!["3", "9"]]);
}

#[test]
fn test_separator_rows_never_appear_in_output() {
    let doc = parse("|---|---|\n| a | b |\n|---|---|\n| c | d |");
    let table = doc.tables().next().expect("table block");
    assert_eq!(table.header_texts(), vec!["a", "b"]);
    assert_eq!(table.body_texts(), vec![vec!["c", "d"]]);
}

#[test]
fn test_only_separators_yield_empty_table() {
    let doc = parse("|---|\n|---|");
    assert_eq!(doc.block_count(), 1);
    assert!(doc.tables().next().is_some_and(|t| t.is_empty()));
}

#[test]
fn test_table_followed_by_prose_flushes() {
    let doc = parse("| h |\n| v |\nafter the table");
    assert!(doc.blocks[0].is_table());
    assert_eq!(
        paragraph_nodes(&doc.blocks[1]),
        &[InlineNode::text("after the table")]
    );
}

#[test]
fn test_single_bare_pipe_is_prose() {
    let doc = parse("either a | b");
    assert!(doc.blocks[0].is_paragraph());
}

#[test]
fn test_segmenter_order_matches_input() {
    let segments: Vec<_> = Segmenter::new("p1\n|a|b|\n\np2").collect();
    assert_eq!(
        segments,
        vec![
            Segment::Prose("p1"),
            Segment::Table(vec!["|a|b|"]),
            Segment::Blank,
            Segment::Prose("p2"),
        ]
    );
}

#[test]
fn test_options_disable_tables_and_math() {
    let options = ParseOptions::new().without_tables().without_math();
    let doc = parse_with_options("| $x$ |", options);
    assert_eq!(
        paragraph_nodes(&doc.blocks[0]),
        &[InlineNode::text("| $x$ |")]
    );
}

#[test]
fn test_trailing_newline_adds_no_spacer() {
    assert_eq!(parse("one line\n").block_count(), 1);
}

#[test]
fn test_batch_parsing_matches_single() {
    let inputs: Vec<String> = (0..32)
        .map(|i| format!("Item {}: $x_{}$\n| a | b |\n| {} | {} |", i, i, i, i * i))
        .collect();
    let parser = ContentParser::new();
    let batch = parser.parse_all(inputs.as_slice());

    assert_eq!(batch.len(), inputs.len());
    for (input, doc) in inputs.iter().zip(&batch) {
        assert_eq!(doc, &parser.parse(input));
    }
}
