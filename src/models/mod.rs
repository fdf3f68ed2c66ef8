//! Shared data models.

pub mod config;
pub mod paging;

// Re-export commonly used types
pub use config::PostgresConfig;
pub use paging::{Pagination, SortColumn, SortDirection};
