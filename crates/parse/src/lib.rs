pub mod parser;
pub mod types;

// Re-export main types
pub use parser::{parse_class, parse_classes, ParseError};
pub use types::{arbitrary_value, Breakpoint, Modifier, ParsedClass, ThemeMode, Variant};
