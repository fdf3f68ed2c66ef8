//! Pagination models.
//!
//! Contains models for paging and sorting query results.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RdbmsError, RdbmsResult};

/// Ascending or descending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns true if ascending, false if descending.
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }

    /// Returns true if descending, false if ascending.
    pub fn is_descending(self) -> bool {
        self == SortDirection::Desc
    }
}

impl FromStr for SortDirection {
    type Err = RdbmsError;

    /// Lenient parse: case-insensitive, surrounding whitespace forgiven, only
    /// the first 4 characters are considered.
    fn from_str(raw: &str) -> RdbmsResult<Self> {
        if raw.trim().is_empty() {
            return Err(RdbmsError::Validation("sort direction is required".into()));
        }

        let clean: String = raw.trim().to_lowercase().chars().take(4).collect();

        match clean.as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(RdbmsError::Validation(format!(
                "unknown sort direction '{raw}'"
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// A column used for sorting query results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortColumn {
    /// Column name (snake_case).
    pub name: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortColumn {
    /// Builds a sort column; the name is required non-blank.
    pub fn new(name: impl Into<String>, direction: SortDirection) -> RdbmsResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RdbmsError::Validation("column name is required".into()));
        }

        Ok(Self { name, direction })
    }

    /// Ascending sort on the given column.
    pub fn ascending(name: impl Into<String>) -> RdbmsResult<Self> {
        Self::new(name, SortDirection::Asc)
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.direction)
    }
}

/// Represents a "page" of results from a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Row offset, from zero.
    pub offset: u64,
    /// Page size.
    pub limit: u64,
    /// Columns for sorting rows.
    pub columns: Vec<SortColumn>,
}

impl Pagination {
    /// Default page size when the `limit` query param is absent.
    pub const DEFAULT_LIMIT: u64 = 100;
    /// Default offset when the `offset` query param is absent.
    pub const DEFAULT_OFFSET: u64 = 0;

    /// Builds a validated page descriptor.
    ///
    /// # Errors
    /// Returns [`RdbmsError::Validation`] when limit is zero or no sort
    /// columns were given.
    pub fn new(offset: u64, limit: u64, columns: Vec<SortColumn>) -> RdbmsResult<Self> {
        if limit == 0 {
            return Err(RdbmsError::Validation("limit must be positive".into()));
        }
        if columns.is_empty() {
            return Err(RdbmsError::Validation(
                "Pagination requires at least one column".into(),
            ));
        }

        Ok(Self {
            offset,
            limit,
            columns,
        })
    }

    /// Builds a page descriptor from HTTP-style query params, e.g.
    /// `?limit=10&offset=0&columns=+name,-age`.
    ///
    /// Keys are matched case-insensitively. An empty map yields `None`.
    /// Missing `limit`/`offset` fall back to the defaults; each key allows
    /// exactly one value. Every column entry must start with `+` or `-`.
    pub fn from_query_params(
        query_params: &HashMap<String, Vec<String>>,
    ) -> RdbmsResult<Option<Self>> {
        if query_params.is_empty() {
            return Ok(None);
        }

        // case insensitive lookup
        let mut params: HashMap<String, &Vec<String>> =
            HashMap::with_capacity(query_params.len());
        for (key, values) in query_params {
            params.insert(key.to_lowercase(), values);
        }

        let offset = parse_u64_param(&params, "offset", Self::DEFAULT_OFFSET)?;
        let limit = parse_u64_param(&params, "limit", Self::DEFAULT_LIMIT)?;
        let columns = parse_sort_columns(&params)?;

        Self::new(offset, limit, columns).map(Some)
    }

    /// Same page shape, at offset zero.
    pub fn first_page(&self) -> Pagination {
        Pagination {
            offset: 0,
            limit: self.limit,
            columns: self.columns.clone(),
        }
    }
}

fn parse_u64_param(
    params: &HashMap<String, &Vec<String>>,
    key: &str,
    default_value: u64,
) -> RdbmsResult<u64> {
    let values = match params.get(key) {
        Some(values) if !values.is_empty() => values,
        _ => return Ok(default_value),
    };

    if values.len() != 1 {
        return Err(RdbmsError::Validation(format!(
            "exactly one value required for {key}"
        )));
    }

    let raw = values[0].trim();
    if raw.is_empty() {
        return Ok(default_value);
    }

    raw.parse::<u64>()
        .map_err(|_| RdbmsError::Validation(format!("invalid value for {key}: '{raw}'")))
}

fn parse_sort_column(part: &str) -> RdbmsResult<SortColumn> {
    let clean = part.trim();
    if clean.chars().count() < 2 {
        return Err(RdbmsError::Validation(format!(
            "column sort info requires at least 2 characters: {part}"
        )));
    }

    let direction = if clean.starts_with('+') {
        SortDirection::Asc
    } else if clean.starts_with('-') {
        SortDirection::Desc
    } else {
        return Err(RdbmsError::Validation(format!(
            "column sort info must start with + or -: {part}"
        )));
    };

    SortColumn::new(&clean[1..], direction)
}

fn parse_sort_columns(params: &HashMap<String, &Vec<String>>) -> RdbmsResult<Vec<SortColumn>> {
    let values = match params.get("columns") {
        Some(values) if !values.is_empty() => values,
        _ => return Ok(Vec::new()),
    };

    if values.len() != 1 {
        return Err(RdbmsError::Validation(
            "exactly one query param required for columns".into(),
        ));
    }

    let raw = values[0].trim();
    if raw.is_empty() {
        return Err(RdbmsError::Validation(
            "sorting column(s) required".into(),
        ));
    }

    raw.split(',').map(parse_sort_column).collect()
}
