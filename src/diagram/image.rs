//! Image reference payloads.

use crate::render::{Fragment, Layout, RenderResult};

use super::DiagramOptions;

/// Render an IMAGE payload. The reference is passed through unchecked;
/// whether it loads is up to the host.
pub(crate) fn render(data: &str, options: &DiagramOptions) -> RenderResult {
    RenderResult::Success(Fragment::Image {
        src: data.trim().to_string(),
        alt: options.image_alt.clone(),
        layout: Layout::auto()
            .with_max_height(options.image_max_height)
            .centered(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_image() {
        let result = render(" data:image/png;base64,AAAA\n", &DiagramOptions::default());
        match result {
            RenderResult::Success(Fragment::Image { src, alt, layout }) => {
                assert_eq!(src, "data:image/png;base64,AAAA");
                assert_eq!(alt, "Diagram");
                assert_eq!(layout.max_height, Some(300));
                assert!(layout.centered);
            }
            other => panic!("Expected image fragment, got {:?}", other),
        }
    }
}
