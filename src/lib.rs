//! Utilities for using relational databases.
//!
//! Provides:
//! - connection configuration with `${name}` placeholder filling in the
//!   connection URL template ([`models::config`])
//! - pagination and sorting models parseable from query params
//!   ([`models::paging`])
//! - splitting a file of sql statements into executable statements
//!   ([`utils::sql_splitter`])
//! - connectivity checks against live pools ([`connection`])

pub mod connection;
pub mod dao;
pub mod errors;
pub mod models;
pub mod utils;

pub use connection::DatabasePool;
pub use dao::DaoOperation;
pub use errors::{RdbmsError, RdbmsResult};
pub use models::{Pagination, PostgresConfig, SortColumn, SortDirection};
pub use utils::{fill_placeholders, SqlSplitter};
