//! Database connectivity checks.
//!
//! Forces a connection test against a live pool by executing a query.

use std::time::{Duration, Instant};

use sqlx::{MySqlPool, PgPool, SqlitePool};

use crate::errors::{RdbmsError, RdbmsResult};

/// Query used when the caller does not supply one.
pub const DEFAULT_TEST_QUERY: &str = "SELECT 1";

/// Connection pool wrapper for the supported database types.
#[derive(Clone)]
pub enum DatabasePool {
    /// MySQL connection pool.
    MySql(MySqlPool),
    /// PostgreSQL connection pool.
    Postgres(PgPool),
    /// SQLite connection pool.
    Sqlite(SqlitePool),
}

impl DatabasePool {
    /// Forces a connection test by executing `SELECT 1`.
    ///
    /// # Errors
    /// Returns [`RdbmsError::DatabaseQuery`] when the query cannot be
    /// executed against the pool.
    pub async fn test_connection(&self) -> RdbmsResult<Duration> {
        self.test_connection_with(DEFAULT_TEST_QUERY).await
    }

    /// Forces a connection test by executing a database specific
    /// `test_query`, returning the measured latency.
    ///
    /// # Errors
    /// Returns [`RdbmsError::Validation`] for a blank query and
    /// [`RdbmsError::DatabaseQuery`] when execution fails.
    pub async fn test_connection_with(&self, test_query: &str) -> RdbmsResult<Duration> {
        if test_query.trim().is_empty() {
            return Err(RdbmsError::Validation("test query is required".into()));
        }

        let start = Instant::now();

        match self {
            DatabasePool::MySql(pool) => {
                sqlx::query(test_query)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| connection_test_error(&e))?;
            }
            DatabasePool::Postgres(pool) => {
                sqlx::query(test_query)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| connection_test_error(&e))?;
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query(test_query)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| connection_test_error(&e))?;
            }
        }

        let latency = start.elapsed();
        tracing::debug!(latency_ms = latency.as_millis() as u64, "connection test passed");
        Ok(latency)
    }
}

fn connection_test_error(e: &sqlx::Error) -> RdbmsError {
    RdbmsError::DatabaseQuery(format!("failed on database connection test: {e}"))
}
