//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Alternate `row-even`/`row-odd` classes on table body rows
    pub row_striping: bool,

    /// Prefix prepended to every CSS class name the renderer emits
    pub class_prefix: String,

    /// How math spans that could not be typeset are shown
    pub math_fallback: MathFallback,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable row striping.
    pub fn with_row_striping(mut self, striping: bool) -> Self {
        self.row_striping = striping;
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the math fallback mode.
    pub fn with_math_fallback(mut self, fallback: MathFallback) -> Self {
        self.math_fallback = fallback;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Prefixed class name.
    pub(crate) fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            row_striping: true,
            class_prefix: String::new(),
            math_fallback: MathFallback::Source,
            collect_stats: false,
        }
    }
}

/// How to show a math span the typesetter could not render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathFallback {
    /// The LaTeX source without delimiters
    #[default]
    Source,
    /// The LaTeX source wrapped in its original delimiters
    Delimited,
}
