//! Placeholder substitution for connection URL templates.
//!
//! Fills `${name}` tokens in a template string from a map of values, e.g.
//! `jdbc:postgresql://${host}:${port}/${dbName}`.

use std::collections::HashMap;

use crate::errors::{RdbmsError, RdbmsResult};

/// Substitutes `${name}` placeholders in `template` with values from the map.
///
/// Supported syntax:
/// - `${name}` — replaced with the mapped value
/// - `${name:-default}` — falls back to `default` when `name` is unmapped
/// - `$${` — escapes to a literal `${`
///
/// Substitution is single-pass: substituted values are not scanned again.
///
/// # Errors
/// Returns [`RdbmsError::UnresolvedPlaceholder`] when a placeholder without a
/// default has no mapped value, and [`RdbmsError::MalformedTemplate`] for an
/// empty or unterminated placeholder.
pub fn fill_placeholders(
    template: &str,
    values: &HashMap<String, String>,
) -> RdbmsResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos..];

        if let Some(tail) = after.strip_prefix("$${") {
            out.push_str("${");
            rest = tail;
        } else if let Some(tail) = after.strip_prefix("${") {
            let close = tail.find('}').ok_or_else(|| {
                let near: String = after.chars().take(32).collect();
                RdbmsError::MalformedTemplate(format!("unterminated placeholder near: {near}"))
            })?;

            let body = &tail[..close];
            let (name, default) = match body.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (body, None),
            };

            if name.is_empty() {
                return Err(RdbmsError::MalformedTemplate(
                    "empty placeholder name".into(),
                ));
            }

            match values.get(name) {
                Some(value) => out.push_str(value),
                None => match default {
                    Some(default) => out.push_str(default),
                    None => {
                        return Err(RdbmsError::UnresolvedPlaceholder(name.to_string()));
                    }
                },
            }
            rest = &tail[close + 1..];
        } else {
            // lone '$', not a placeholder
            out.push('$');
            rest = &after[1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fills_jdbc_url_template() {
        let got = fill_placeholders(
            "jdbc:postgresql://${host}:${port}/${dbName}",
            &values(&[("host", "db.example.com"), ("port", "5432"), ("dbName", "app")]),
        )
        .unwrap();

        assert_eq!(got, "jdbc:postgresql://db.example.com:5432/app");
    }

    #[test]
    fn test_missing_placeholder_is_an_error() {
        let err = fill_placeholders("postgres://${host}/${dbName}", &values(&[("host", "h")]))
            .unwrap_err();

        match err {
            RdbmsError::UnresolvedPlaceholder(name) => assert_eq!(name, "dbName"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_value_is_used_when_unmapped() {
        let got = fill_placeholders("${host}:${port:-5432}", &values(&[("host", "h")])).unwrap();
        assert_eq!(got, "h:5432");
    }

    #[test]
    fn test_mapped_value_beats_default() {
        let got = fill_placeholders("${port:-5432}", &values(&[("port", "6543")])).unwrap();
        assert_eq!(got, "6543");
    }

    #[test]
    fn test_escaped_placeholder_stays_literal() {
        let got = fill_placeholders("$${host} and ${host}", &values(&[("host", "h")])).unwrap();
        assert_eq!(got, "${host} and h");
    }

    #[test]
    fn test_lone_dollar_passes_through() {
        let got = fill_placeholders("cost: $5", &values(&[])).unwrap();
        assert_eq!(got, "cost: $5");
    }

    #[test]
    fn test_unterminated_placeholder_is_an_error() {
        let err = fill_placeholders("${host", &values(&[("host", "h")])).unwrap_err();
        assert!(matches!(err, RdbmsError::MalformedTemplate(_)));
    }

    #[test]
    fn test_empty_placeholder_name_is_an_error() {
        let err = fill_placeholders("${}", &values(&[])).unwrap_err();
        assert!(matches!(err, RdbmsError::MalformedTemplate(_)));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(fill_placeholders("", &values(&[])).unwrap(), "");
    }

    #[test]
    fn test_substitution_is_single_pass() {
        let got = fill_placeholders("${a}", &values(&[("a", "${b}"), ("b", "x")])).unwrap();
        assert_eq!(got, "${b}");
    }
}
