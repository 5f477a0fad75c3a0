//! Embedded SVG payloads.
//!
//! Payloads often arrive wrapped in prose or a fenced code block. Only the
//! span from the first `<svg` opening tag to the first `</svg>` after it is
//! kept, and its root element is restyled to scale with the container.

use crate::error::Error;
use crate::render::{Fragment, Layout, RenderResult};

use super::DiagramOptions;

const CLOSE_TAG: &str = "</svg>";

/// Find the `<svg ...>...</svg>` span inside arbitrary text.
///
/// Returns `None` when there is no opening tag, or no closing tag after it.
pub fn extract_svg_span(data: &str) -> Option<&str> {
    let start = find_open_tag(data)?;
    let end = data[start..].find(CLOSE_TAG)? + start + CLOSE_TAG.len();
    Some(&data[start..end])
}

fn find_open_tag(data: &str) -> Option<usize> {
    data.match_indices("<svg").map(|(i, _)| i).find(|&i| {
        data[i + 4..]
            .chars()
            .next()
            .map_or(false, |c| c.is_whitespace() || c == '>' || c == '/')
    })
}

/// Byte range of the root element's opening tag.
///
/// A `>` inside a quoted attribute value does not close the tag.
pub(crate) fn root_tag_bounds(svg: &str) -> Option<(usize, usize)> {
    let start = find_open_tag(svg)?;
    let mut quote = None;
    for (i, c) in svg[start..].char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some((start, start + i + 1)),
            None => {}
        }
    }
    None
}

/// Offset in an opening tag where a new attribute can be inserted.
pub(crate) fn attribute_insert_point(tag: &str) -> usize {
    let body = tag.trim_end_matches('>');
    body.trim_end_matches('/').trim_end().len()
}

/// Remove every attribute called `name` (ASCII case-insensitive) from an
/// opening tag, leaving quoted values of other attributes untouched.
fn strip_attribute(tag: &str, name: &str) -> String {
    let bytes = tag.as_bytes();
    let len = bytes.len();
    let mut i = tag
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(len);
    let mut out = String::with_capacity(len);
    out.push_str(&tag[..i]);

    while i < len {
        let attr_start = i;
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < len
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        if i == name_start {
            out.push_str(&tag[attr_start..]);
            break;
        }
        let attr_name = &tag[name_start..i];

        let mut j = i;
        while j < len && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j < len && bytes[j] == b'=' {
            j += 1;
            while j < len && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            match bytes.get(j) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    j = tag[j + 1..]
                        .find(char::from(q))
                        .map_or(len, |k| j + 1 + k + 1);
                }
                _ => {
                    while j < len && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
                        j += 1;
                    }
                }
            }
            i = j;
        }

        if !attr_name.eq_ignore_ascii_case(name) {
            out.push_str(&tag[attr_start..i]);
        }
    }
    out
}

/// Set an attribute on the root element, replacing any existing value.
pub(crate) fn set_root_attribute(svg: &str, name: &str, value: &str) -> String {
    let Some((start, end)) = root_tag_bounds(svg) else {
        return svg.to_string();
    };
    let root = strip_attribute(&svg[start..end], name);
    let insert_at = attribute_insert_point(&root);
    format!(
        "{}{} {}=\"{}\"{}{}",
        &svg[..start],
        &root[..insert_at],
        name,
        value,
        &root[insert_at..],
        &svg[end..]
    )
}

/// Replace the root element's `style` attribute with the layout's CSS.
pub fn apply_root_style(svg: &str, layout: &Layout) -> String {
    set_root_attribute(svg, "style", &layout.to_css())
}

/// Render an SVG payload.
pub(crate) fn render(data: &str, options: &DiagramOptions) -> RenderResult {
    let Some(span) = extract_svg_span(data) else {
        return RenderResult::failure(Error::InvalidPayload("Invalid SVG data".into()));
    };

    let layout = Layout::fill()
        .with_max_height(options.svg_max_height)
        .with_font(options.svg_font_family.clone());
    let markup = apply_root_style(span, &layout);

    RenderResult::Success(Fragment::Svg { markup, layout })
}
