//! Source preprocessing applied before any schema scanning.
//!
//! Single-line `--` comments are removed from the whole document first, so
//! commented-out DDL never contributes tables, columns or relationships.
//!
//! # Example
//!
//! ```
//! use sql_erd::preprocessor::strip_line_comments;
//!
//! let sql = "-- CREATE TABLE old (id INT);\nCREATE TABLE t (id INT); -- note";
//! let stripped = strip_line_comments(sql);
//!
//! assert!(!stripped.contains("old"));
//! assert!(stripped.contains("CREATE TABLE t"));
//! ```

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Everything from `--` up to (not including) the end of the line.
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*").expect("valid regex"));

/// Remove every `--` comment, keeping line breaks intact.
///
/// Quoted strings are not special-cased: a `--` inside a literal also starts
/// a comment.
#[must_use]
pub fn strip_line_comments(sql: &str) -> Cow<'_, str> {
    LINE_COMMENT_REGEX.replace_all(sql, "")
}
