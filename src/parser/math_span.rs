//! Math span detection within a single line.
//!
//! Display spans (`$$...$$`) are located first; inline spans (`$...$`) are
//! then searched only in the plain text between them. Matching is
//! left-to-right and never crosses the end of the line. A delimiter that is
//! opened but not closed turns itself and the rest of the line into text.

use crate::model::{InlineNode, MathMode};

const DISPLAY: &str = "$$";
const INLINE: char = '$';

/// Split one line into alternating text and math nodes.
///
/// Adjacent text runs are merged, so a line without balanced delimiters
/// comes back as a single text node equal to the input.
pub fn parse_math_spans(line: &str) -> Vec<InlineNode> {
    let mut nodes = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(DISPLAY) {
        let after = &rest[open + DISPLAY.len()..];
        match after.find(DISPLAY) {
            Some(close) => {
                split_inline(&rest[..open], &mut nodes);
                nodes.push(InlineNode::math(&after[..close], MathMode::Display));
                rest = &after[close + DISPLAY.len()..];
            }
            None => {
                log::debug!("Unterminated display math at byte {}", line.len() - rest.len() + open);
                split_inline(&rest[..open], &mut nodes);
                push_text(&mut nodes, &rest[open..]);
                return merge_text_runs(nodes);
            }
        }
    }

    split_inline(rest, &mut nodes);
    merge_text_runs(nodes)
}

/// Locate `$...$` spans in a run that holds no display spans.
fn split_inline(segment: &str, nodes: &mut Vec<InlineNode>) {
    let mut rest = segment;

    while let Some(open) = rest.find(INLINE) {
        let after = &rest[open + 1..];
        match after.find(INLINE) {
            Some(close) => {
                push_text(nodes, &rest[..open]);
                nodes.push(InlineNode::math(&after[..close], MathMode::Inline));
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    push_text(nodes, rest);
}

fn push_text(nodes: &mut Vec<InlineNode>, text: &str) {
    if !text.is_empty() {
        nodes.push(InlineNode::text(text));
    }
}

fn merge_text_runs(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut merged: Vec<InlineNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let InlineNode::Text { text } = &node {
            if let Some(InlineNode::Text { text: prev }) = merged.last_mut() {
                prev.push_str(text);
                continue;
            }
        }
        merged.push(node);
    }
    merged
}
