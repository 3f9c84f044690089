//! Table parsing: turns `CREATE TABLE` blocks into [`Table`] definitions.

use std::sync::LazyLock;

use compact_str::CompactString;
use indexmap::IndexMap;
use regex::Regex;

use super::{
    classify::classify,
    constraint::{detect_role, extract_comment, foreign_key_columns},
    scanner::{TableBlock, split_declarations, table_blocks},
    types::{Column, SkippedDeclaration, Table}
};
use crate::preprocessor::strip_line_comments;

/// Table-level constraint declarations, which never describe a column.
static CONSTRAINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:PRIMARY\s+KEY|FOREIGN\s+KEY|UNIQUE|INDEX|KEY|CHECK|CONSTRAINT)\b")
        .expect("valid regex")
});

/// Column shape: identifier, then a type made of letters with optional
/// argument list.
static COLUMN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^`?(\w+)`?\s+([A-Z]+(?:\([^)]*\))?)").expect("valid regex")
});

/// Result of parsing one block.
#[derive(Debug)]
pub(crate) struct ParsedBlock {
    /// `None` when no declaration was recognized as a column
    pub table:   Option<Table>,
    pub skipped: Vec<SkippedDeclaration>
}

/// Parse every `CREATE TABLE` statement in `sql`.
///
/// Tables keep the position of their first definition; a later definition
/// with the same name replaces the columns. Tables without any recognized
/// column are left out.
///
/// # Example
///
/// ```
/// use sql_erd::schema::{KeyRole, parse_tables};
///
/// let tables = parse_tables(
///     "CREATE TABLE users (id BIGINT PRIMARY KEY, email VARCHAR(255) UNIQUE);"
/// );
///
/// let users = &tables["users"];
/// assert_eq!(users.columns[0].key_role, KeyRole::Primary);
/// assert_eq!(users.columns[1].key_role, KeyRole::Unique);
/// ```
pub fn parse_tables(sql: &str) -> IndexMap<CompactString, Table> {
    let source = strip_line_comments(sql);
    let mut tables = IndexMap::new();
    for block in table_blocks(&source) {
        if let Some(table) = parse_block(&block).table {
            tables.insert(table.name.clone(), table);
        }
    }
    tables
}

/// Parse the columns of a single block.
pub(crate) fn parse_block(block: &TableBlock<'_>) -> ParsedBlock {
    let fk_columns = foreign_key_columns(block.body);
    let mut columns = Vec::new();
    let mut skipped = Vec::new();

    for declaration in split_declarations(block.body) {
        if CONSTRAINT_REGEX.is_match(declaration) {
            continue;
        }
        let Some(cap) = COLUMN_REGEX.captures(declaration) else {
            skipped.push(SkippedDeclaration {
                table: CompactString::from(block.name),
                text:  declaration.to_string()
            });
            continue;
        };
        let (Some(name), Some(raw_type)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        columns.push(Column {
            name:            CompactString::from(name.as_str()),
            normalized_type: classify(raw_type.as_str()),
            key_role:        detect_role(declaration, &fk_columns, name.as_str()),
            comment:         extract_comment(declaration)
        });
    }

    let table = (!columns.is_empty()).then(|| Table {
        name: CompactString::from(block.name),
        columns,
        comment: block.comment.map(str::to_string)
    });

    ParsedBlock {
        table,
        skipped
    }
}
