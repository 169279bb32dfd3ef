pub mod color;
pub mod config;
pub mod error;
pub mod merge;
pub mod naming;
pub mod normalize;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use color::ColorTable;
pub use config::{Config, ConfigCache, DEFAULT_CONFIG_FILE};
pub use error::ConfigError;
pub use theme::{ColorValue, Theme, ThemeExtend};
pub use types::{Declaration, Diagnostic, DiagnosticLevel};
