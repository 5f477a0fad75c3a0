//! Mixed-content parsing module.

mod content_parser;
mod math_span;
mod options;
mod segmenter;
mod table_assembler;

pub use content_parser::ContentParser;
pub use math_span::parse_math_spans;
pub use options::ParseOptions;
pub use segmenter::{classify_line, LineKind, Segment, Segmenter};
pub use table_assembler::{is_separator_row, split_row, TableAssembler};
