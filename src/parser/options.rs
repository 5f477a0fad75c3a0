//! Parsing options and configuration.

/// Options for parsing raw content.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Parse for inline placement (e.g. answer options inside a sentence)
    pub inline: bool,

    /// Whether to assemble pipe-delimited lines into tables
    pub detect_tables: bool,

    /// Whether to split `$...$` / `$$...$$` spans into math nodes
    pub parse_math: bool,

    /// Whether to use parallel processing for batch parsing
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse for inline placement.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Enable or disable table detection.
    pub fn with_tables(mut self, detect: bool) -> Self {
        self.detect_tables = detect;
        self
    }

    /// Treat every line as prose.
    pub fn without_tables(self) -> Self {
        self.with_tables(false)
    }

    /// Enable or disable math span parsing.
    pub fn with_math(mut self, parse: bool) -> Self {
        self.parse_math = parse;
        self
    }

    /// Keep `$` delimiters as literal text.
    pub fn without_math(self) -> Self {
        self.with_math(false)
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            inline: false,
            detect_tables: true,
            parse_math: true,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .inline()
            .without_tables()
            .without_math()
            .sequential();

        assert!(options.inline);
        assert!(!options.detect_tables);
        assert!(!options.parse_math);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(!options.inline);
        assert!(options.detect_tables);
        assert!(options.parse_math);
        assert!(options.parallel);
    }
}
