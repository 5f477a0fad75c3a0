//! Displayable fragments produced by renderers.

use serde::{Deserialize, Serialize};

use crate::model::MathMode;

/// Horizontal sizing policy of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthPolicy {
    /// Natural width
    #[default]
    Auto,
    /// Fill the host container's width
    Fill,
}

/// SVG view box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewBox {
    /// Minimum x
    pub x: f64,
    /// Minimum y
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl ViewBox {
    /// Format as the value of an SVG `viewBox` attribute.
    pub fn to_attribute(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Display hints attached to a diagram fragment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Horizontal sizing
    pub width: WidthPolicy,
    /// Maximum height in CSS pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    /// View box to apply to SVG content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_box: Option<ViewBox>,
    /// Font family for embedded text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Center horizontally in the container
    #[serde(default)]
    pub centered: bool,
}

impl Layout {
    /// Layout filling the container width.
    pub fn fill() -> Self {
        Self {
            width: WidthPolicy::Fill,
            ..Self::default()
        }
    }

    /// Layout keeping the natural width.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Cap the height.
    pub fn with_max_height(mut self, px: u32) -> Self {
        self.max_height = Some(px);
        self
    }

    /// Set the view box.
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Set the font family.
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Center horizontally.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Inline CSS expressing this layout, e.g.
    /// `width:100%; height:auto; max-height:300px`.
    pub fn to_css(&self) -> String {
        let mut rules = Vec::new();
        match self.width {
            WidthPolicy::Fill => rules.push("width:100%".to_string()),
            WidthPolicy::Auto => rules.push("max-width:100%".to_string()),
        }
        rules.push("height:auto".to_string());
        if let Some(px) = self.max_height {
            rules.push(format!("max-height:{}px", px));
        }
        if let Some(ref family) = self.font_family {
            rules.push(format!("font-family: {}", family));
        }
        if self.centered {
            rules.push("display:block; margin:0 auto".to_string());
        }
        rules.join("; ")
    }
}

/// A renderable unit of output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// Plain text, escaped on output
    Text {
        /// Text content
        text: String,
    },

    /// Typeset math markup
    Math {
        /// Markup produced by the typesetter
        html: String,
        /// Inline or display layout
        mode: MathMode,
    },

    /// Vector drawing
    Svg {
        /// SVG markup
        markup: String,
        /// Display hints
        layout: Layout,
    },

    /// Raster drawing
    Canvas {
        /// Pixel width
        width: u32,
        /// Pixel height
        height: u32,
        /// Encoded image data
        data: String,
        /// Display hints
        layout: Layout,
    },

    /// External image reference
    Image {
        /// Image source URL
        src: String,
        /// Alternative text
        alt: String,
        /// Display hints
        layout: Layout,
    },

    /// Visible error indicator
    ErrorBox {
        /// Message shown to the reader
        message: String,
    },
}

impl Fragment {
    /// Create a text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }

    /// Create an error box, truncating the message to `limit` characters.
    pub fn error_box(message: &str, limit: usize) -> Self {
        let message = if message.chars().count() > limit {
            let mut truncated: String = message.chars().take(limit).collect();
            truncated.push('…');
            truncated
        } else {
            message.to_string()
        };
        Fragment::ErrorBox { message }
    }

    /// Check if this is an error box.
    pub fn is_error(&self) -> bool {
        matches!(self, Fragment::ErrorBox { .. })
    }

    /// Get the display hints, if this fragment carries any.
    pub fn layout(&self) -> Option<&Layout> {
        match self {
            Fragment::Svg { layout, .. }
            | Fragment::Canvas { layout, .. }
            | Fragment::Image { layout, .. } => Some(layout),
            _ => None,
        }
    }
}
