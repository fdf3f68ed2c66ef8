//! Connection configuration models.
//!
//! Contains the flat config record used to produce a concrete database
//! connection URL.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{RdbmsError, RdbmsResult};
use crate::utils::template::fill_placeholders;

/// PostgreSQL connection configuration.
///
/// `jdbc_url` may be a template containing `${name}` placeholders, filled
/// later via [`PostgresConfig::fill_jdbc_url`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostgresConfig {
    /// Connection URL, possibly a template with `${name}` placeholders.
    #[validate(length(min = 1, message = "jdbcUrl is required"))]
    pub jdbc_url: String,

    /// Database username.
    #[validate(length(min = 1, message = "user is required"))]
    pub user: String,

    /// Database password (not serialized in responses).
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Property key for the connection URL.
pub const KEY_JDBC_URL: &str = "pg.jdbcUrl";
/// Property key for the password.
pub const KEY_PASSWORD: &str = "pg.password";
/// Property key for the username.
pub const KEY_USER: &str = "pg.user";

impl PostgresConfig {
    /// Builds a validated config.
    ///
    /// `jdbc_url` and `user` are trimmed and required. `password` is never
    /// trimmed (whitespace may be significant) but a blank password collapses
    /// to empty.
    ///
    /// # Errors
    /// Returns [`RdbmsError::Validation`] when a required field is blank.
    pub fn new(jdbc_url: &str, user: &str, password: &str) -> RdbmsResult<Self> {
        let config = Self {
            jdbc_url: jdbc_url.trim().to_string(),
            user: user.trim().to_string(),
            password: if password.trim().is_empty() {
                String::new()
            } else {
                password.to_string()
            },
        };

        config
            .validate()
            .map_err(|e| RdbmsError::Validation(e.to_string()))?;

        Ok(config)
    }

    /// Builds a config from a flat property map, see the `KEY_*` constants.
    ///
    /// # Errors
    /// Returns [`RdbmsError::MissingProperty`] naming the first absent or
    /// blank key.
    pub fn from_properties(props: &HashMap<String, String>) -> RdbmsResult<Self> {
        let jdbc_url = require_property(props, KEY_JDBC_URL)?;
        let user = require_property(props, KEY_USER)?;
        let password = require_property(props, KEY_PASSWORD)?;

        Self::new(jdbc_url, user, password)
    }

    /// Fills `${name}` placeholders in the URL template, producing a concrete
    /// connection URL.
    ///
    /// # Errors
    /// Returns [`RdbmsError::UnresolvedPlaceholder`] when the template
    /// references a name missing from `values`.
    pub fn fill_jdbc_url(&self, values: &HashMap<String, String>) -> RdbmsResult<String> {
        fill_placeholders(&self.jdbc_url, values)
    }
}

fn require_property<'a>(props: &'a HashMap<String, String>, key: &str) -> RdbmsResult<&'a str> {
    match props.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.as_str()),
        _ => Err(RdbmsError::MissingProperty(key.to_string())),
    }
}
