//! DAO operation taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// All supported DAO operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DaoOperation {
    /// Efficiently insert multiple rows.
    BulkCreate,

    /// Insert new row.
    Create,

    /// Delete/Remove.
    Delete,

    /// Retrieve at most one result by some unique row id.
    FindById,

    /// Efficiently return boolean indicating presence or absence of a row.
    Has,

    /// Retrieve zero or more rows (possibly user driven with filtering).
    List,

    /// Mutate at most one column on one row.
    Patch,

    /// Mutate multiple columns on one row.
    Update,

    /// Insert when absent, Update when present.
    Upsert,
}

impl fmt::Display for DaoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaoOperation::BulkCreate => write!(f, "bulk_create"),
            DaoOperation::Create => write!(f, "create"),
            DaoOperation::Delete => write!(f, "delete"),
            DaoOperation::FindById => write!(f, "find_by_id"),
            DaoOperation::Has => write!(f, "has"),
            DaoOperation::List => write!(f, "list"),
            DaoOperation::Patch => write!(f, "patch"),
            DaoOperation::Update => write!(f, "update"),
            DaoOperation::Upsert => write!(f, "upsert"),
        }
    }
}
