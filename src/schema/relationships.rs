//! Foreign key relationship extraction.

use std::{collections::BTreeSet, sync::LazyLock};

use compact_str::CompactString;
use regex::Regex;

use super::{
    scanner::{TableBlock, table_blocks},
    types::Relationship
};
use crate::preprocessor::strip_line_comments;

/// `FOREIGN KEY (col) REFERENCES table(col)`
static FOREIGN_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bFOREIGN\s+KEY\s*\(\s*`?(\w+)`?\s*\)\s*REFERENCES\s+`?(\w+)`?\s*\(\s*`?(\w+)`?\s*\)"
    )
    .expect("valid regex")
});

/// Extract all table-level foreign keys declared in `sql`.
///
/// Identical relationships collapse into one entry; iteration order is
/// source table, target table, then columns.
///
/// # Example
///
/// ```
/// use sql_erd::schema::extract_relationships;
///
/// let rels = extract_relationships(
///     "CREATE TABLE orders (id INT, user_id INT, FOREIGN KEY (user_id) REFERENCES users(id));"
/// );
///
/// let rel = rels.first().unwrap();
/// assert_eq!(rel.source_table, "orders");
/// assert_eq!(rel.target_table, "users");
/// ```
pub fn extract_relationships(sql: &str) -> BTreeSet<Relationship> {
    let source = strip_line_comments(sql);
    table_blocks(&source)
        .iter()
        .flat_map(block_relationships)
        .collect()
}

/// Relationships declared inside one block.
pub(crate) fn block_relationships(block: &TableBlock<'_>) -> Vec<Relationship> {
    FOREIGN_KEY_REGEX
        .captures_iter(block.body)
        .filter_map(|cap| {
            Some(Relationship {
                source_table:  CompactString::from(block.name),
                target_table:  CompactString::from(cap.get(2)?.as_str()),
                source_column: CompactString::from(cap.get(1)?.as_str()),
                target_column: CompactString::from(cap.get(3)?.as_str())
            })
        })
        .collect()
}
