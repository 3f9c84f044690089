//! Key role detection for column declarations.
//!
//! Role rules are an ordered list evaluated top to bottom; the first rule
//! that matches decides the role. Table-level `FOREIGN KEY (col)` clauses
//! are collected up front so a column can be marked as a foreign key even
//! when its own declaration says nothing about it.
//!
//! Role signals are plain case-insensitive substrings: `apk_version INT`
//! carries `PK` and is marked as a primary key.

use std::sync::LazyLock;

use compact_str::CompactString;
use indexmap::IndexSet;
use regex::Regex;

use super::types::KeyRole;

static PRIMARY_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PRIMARY\s+KEY|PK").expect("valid regex"));

static REFERENCES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)REFERENCES").expect("valid regex"));

static UNIQUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)UNIQUE").expect("valid regex"));

/// Inline comment: `COMMENT 'text'` (no `=`, single quotes only)
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCOMMENT\s+'([^']*)'").expect("valid regex"));

/// Column named by a table-level `FOREIGN KEY (col) REFERENCES` clause
static FK_COLUMN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bFOREIGN\s+KEY\s*\(\s*`?(\w+)`?\s*\)\s*REFERENCES\b").expect("valid regex")
});

/// Everything the role rules look at for one column.
struct Declaration<'a> {
    text:       &'a str,
    column:     &'a str,
    fk_columns: &'a IndexSet<CompactString>
}

type RolePredicate = fn(&Declaration<'_>) -> bool;

static ROLE_RULES: [(RolePredicate, KeyRole); 3] = [
    (is_primary, KeyRole::Primary),
    (is_foreign, KeyRole::Foreign),
    (is_unique, KeyRole::Unique)
];

fn is_primary(decl: &Declaration<'_>) -> bool {
    PRIMARY_KEY_REGEX.is_match(decl.text)
}

// Either signal is enough: table-level FK membership or an inline REFERENCES.
fn is_foreign(decl: &Declaration<'_>) -> bool {
    decl.fk_columns.contains(decl.column) || REFERENCES_REGEX.is_match(decl.text)
}

fn is_unique(decl: &Declaration<'_>) -> bool {
    UNIQUE_REGEX.is_match(decl.text)
}

/// Collect column names used in table-level foreign key clauses of a body.
pub fn foreign_key_columns(body: &str) -> IndexSet<CompactString> {
    FK_COLUMN_REGEX
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|m| CompactString::from(m.as_str()))
        .collect()
}

/// Determine the key role of `column_name` from its declaration.
///
/// # Example
///
/// ```
/// use indexmap::IndexSet;
/// use sql_erd::schema::{KeyRole, detect_role};
///
/// let fks = IndexSet::new();
/// let role = detect_role("id BIGINT PRIMARY KEY", &fks, "id");
/// assert_eq!(role, KeyRole::Primary);
/// ```
pub fn detect_role(
    declaration: &str,
    fk_columns: &IndexSet<CompactString>,
    column_name: &str
) -> KeyRole {
    let decl = Declaration {
        text: declaration,
        column: column_name,
        fk_columns
    };
    ROLE_RULES
        .iter()
        .find(|(matches, _)| matches(&decl))
        .map(|&(_, role)| role)
        .unwrap_or_default()
}

/// Extract the text of an inline `COMMENT '...'` clause.
pub fn extract_comment(declaration: &str) -> Option<String> {
    COMMENT_REGEX
        .captures(declaration)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
