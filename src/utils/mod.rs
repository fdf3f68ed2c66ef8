//! Utility functions and helpers.

pub mod sql_splitter;
pub mod template;

// Re-export commonly used types
pub use sql_splitter::SqlSplitter;
pub use template::fill_placeholders;
