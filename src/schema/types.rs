//! Type definitions for the extracted schema model.
//!
//! - [`NormalizedType`] - Small column type vocabulary used in diagrams
//! - [`KeyRole`] - Key classification of a column (PK, FK, UK)
//! - [`Column`] - A classified column declaration
//! - [`Table`] - A table with its columns in declaration order
//! - [`Relationship`] - A table-level foreign key between two tables
//! - [`SkippedDeclaration`] - A body entry that did not look like a column

use compact_str::CompactString;
use serde::Serialize;

/// Normalized column type.
///
/// Raw SQL types are collapsed into this vocabulary; anything unrecognized
/// becomes [`NormalizedType::Varchar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizedType {
    Int,
    Bigint,
    #[default]
    Varchar,
    Decimal,
    Timestamp,
    Datetime,
    Date,
    Text,
    Boolean
}

impl NormalizedType {
    /// Label used in the rendered diagram
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bigint => "bigint",
            Self::Varchar => "varchar",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Text => "text",
            Self::Boolean => "boolean"
        }
    }
}

impl std::fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key role of a column.
///
/// A column carries at most one role. When several signals are present the
/// precedence is primary, then foreign, then unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
    #[default]
    None,
    Primary,
    Foreign,
    Unique
}

impl KeyRole {
    /// Diagram abbreviation (`PK`, `FK`, `UK`), `None` for plain columns
    pub const fn abbreviation(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Primary => Some("PK"),
            Self::Foreign => Some("FK"),
            Self::Unique => Some("UK")
        }
    }
}

/// Column extracted from a single declaration inside a table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column name as written in the source
    pub name:            CompactString,
    /// Normalized type label
    pub normalized_type: NormalizedType,
    /// Key role annotation
    pub key_role:        KeyRole,
    /// Text of an inline `COMMENT '...'` clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment:         Option<String>
}

/// Table definition found in a `CREATE TABLE` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Table name
    pub name:    CompactString,
    /// Columns in declaration order
    pub columns: Vec<Column>,
    /// Text of the table-level `COMMENT = '...'` clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>
}

/// Foreign key edge between two tables.
///
/// Ordering follows field order, which gives relationship sets a stable
/// iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Relationship {
    /// Table declaring the foreign key ("many" side)
    pub source_table:  CompactString,
    /// Referenced table ("one" side)
    pub target_table:  CompactString,
    /// Foreign key column in the source table
    pub source_column: CompactString,
    /// Referenced column in the target table
    pub target_column: CompactString
}

/// Declaration in a table body that was neither a column nor a constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeclaration {
    /// Table whose body contained the declaration
    pub table: CompactString,
    /// Declaration text, trimmed
    pub text:  String
}
