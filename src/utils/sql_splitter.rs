//! SQL statement splitter.
//!
//! Splits a collection (file) of sql statements into single executable
//! statements.

/// Splits raw SQL text into single executable statements.
pub struct SqlSplitter;

impl SqlSplitter {
    /// Splits one or more SQL statements (e.g. read from a file) into a
    /// collection of executable statements.
    ///
    /// Comments (`-- ...` and `/* ... */`) are removed first, then the text is
    /// split on `;`. Blank pieces and bare `GO` separators (mssql) are
    /// dropped. The result is possibly empty, never panics.
    pub fn split_statements(raw: &str) -> Vec<String> {
        if raw.trim().is_empty() {
            return Vec::new();
        }

        let clean = Self::strip_trailing_spaces(&Self::without_comments(raw.trim()));

        clean
            .trim()
            .split(';')
            .map(str::trim)
            .filter(|stmt| !stmt.eq_ignore_ascii_case("GO"))
            .filter(|stmt| !stmt.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Removes `/* ... */` and `-- ...` style comments.
    ///
    /// String literals are not recognized; a `--` inside a literal is treated
    /// as a comment, matching the splitter's documented limitation.
    fn without_comments(raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;

        loop {
            let line = rest.find("--");
            let block = rest.find("/*");

            let (pos, is_block) = match (line, block) {
                (Some(l), Some(b)) if b < l => (b, true),
                (Some(l), _) => (l, false),
                (None, Some(b)) => (b, true),
                (None, None) => {
                    out.push_str(rest);
                    return out;
                }
            };

            out.push_str(&rest[..pos]);
            let after = &rest[pos..];

            if is_block {
                match after[2..].find("*/") {
                    Some(end) => rest = &after[2 + end + 2..],
                    None => {
                        // unterminated block comment, leave it as-is
                        out.push_str("/*");
                        rest = &after[2..];
                    }
                }
            } else {
                // line comment runs to end of line, newline is kept
                match after.find('\n') {
                    Some(end) => rest = &after[end..],
                    None => return out,
                }
            }
        }
    }

    /// Strips trailing whitespace from every line.
    fn strip_trailing_spaces(raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        raw.split('\n')
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(SqlSplitter::split_statements("").is_empty());
        assert!(SqlSplitter::split_statements("   \n\t  ").is_empty());
    }

    #[test]
    fn test_comments_only() {
        let raw = "-- nothing here\n/* or\nhere */";
        assert!(SqlSplitter::split_statements(raw).is_empty());
    }

    #[test]
    fn test_go_separator_is_dropped() {
        let raw = "SELECT 1;\nGO\nSELECT 2;\ngo\n";
        let got = SqlSplitter::split_statements(raw);
        assert_eq!(got, vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_line_comment_keeps_rest_of_statement() {
        let raw = "SELECT a -- pick a\nFROM t;";
        let got = SqlSplitter::split_statements(raw);
        assert_eq!(got, vec!["SELECT a\nFROM t"]);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let raw = "SELECT a /* b\nc */ FROM t;";
        let got = SqlSplitter::split_statements(raw);
        assert_eq!(got, vec!["SELECT a  FROM t"]);
    }

    #[test]
    fn test_splits_mixed_script() {
        let want = [
            "CREATE TABLE employees (\n    employee_id SERIAL PRIMARY KEY,\n    first_name VARCHAR(50),\n    last_name VARCHAR(50),\n    birth_date DATE,\n    hire_date DATE\n)",
            "INSERT INTO employees (first_name, last_name, birth_date, hire_date)\n                VALUES ('John', 'Doe', '1990-01-15', '2015-03-20')",
            "SELECT * FROM employees WHERE birth_date > '1990-01-01'",
            "UPDATE employees\nSET hire_date = '2020-01-01'\nWHERE employee_id = 1",
            "DELETE FROM employees WHERE employee_id = 2",
            "CREATE INDEX idx_birth_date ON employees(birth_date)",
            "CREATE VIEW employee_view AS\nSELECT employee_id, first_name, last_name\nFROM employees\nWHERE hire_date > '2019-01-01'",
            "SELECT employees.first_name, employees.last_name, departments.department_name\nFROM employees\nJOIN departments ON employees.department_id = departments.department_id",
        ];

        let raw = concat!(
            "CREATE TABLE employees (\n",
            "    employee_id SERIAL PRIMARY KEY,\n",
            "    first_name VARCHAR(50),\n",
            "    last_name VARCHAR(50),\n",
            "    birth_date DATE,\n",
            "    hire_date DATE\n",
            ");",
            "INSERT INTO employees (first_name, last_name, birth_date, hire_date)\n",
            "                VALUES ('John', 'Doe', '1990-01-15', '2015-03-20');",
            "SELECT * FROM employees WHERE birth_date > '1990-01-01';",
            "\n\n\nUPDATE employees\n",
            "SET hire_date = '2020-01-01'\n",
            "WHERE employee_id = 1;",
            ";;;\n",
            "DELETE FROM employees WHERE employee_id = 2;  -- == ** ^^;",
            "\n-- ;\n",
            "CREATE INDEX idx_birth_date ON employees(birth_date);",
            "\n-- zzzzzz\n",
            "CREATE VIEW employee_view AS\n",
            "SELECT employee_id, first_name, last_name  /* a b c d e */\n",
            "FROM employees\n",
            "WHERE hire_date > '2019-01-01';",
            "\n/* foo bar */\n",
            "SELECT employees.first_name, employees.last_name, departments.department_name\n",
            "FROM employees\n",
            "JOIN departments ON employees.department_id = departments.department_id;",
            "\nGO\n",
        );

        let got = SqlSplitter::split_statements(raw);

        assert_eq!(got.len(), want.len());
        for (i, (g, w)) in got.iter().zip(want.iter()).enumerate() {
            assert_eq!(g, w, "failed on statement {i}");
        }
    }
}
