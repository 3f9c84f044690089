//! Schema extraction from SQL `CREATE TABLE` source text.
//!
//! Parsing is best-effort and never fails: anything that does not look like
//! a table, a column or a foreign key is left out of the result.
//!
//! # Pipeline
//!
//! ```text
//! SQL text ──▶ strip `--` comments ──▶ locate CREATE TABLE blocks
//!                                             │
//!                    ┌────────────────────────┴──────────────┐
//!                    ▼                                       ▼
//!         columns (type + key role)              FOREIGN KEY relationships
//! ```
//!
//! # Example
//!
//! ```
//! use sql_erd::schema::{KeyRole, NormalizedType, Schema};
//!
//! let sql = r#"
//!     CREATE TABLE users (
//!         id BIGINT PRIMARY KEY,
//!         email VARCHAR(255) UNIQUE
//!     );
//!     CREATE TABLE orders (
//!         id BIGINT PRIMARY KEY,
//!         user_id BIGINT,
//!         FOREIGN KEY (user_id) REFERENCES users(id)
//!     );
//! "#;
//!
//! let schema = Schema::parse(sql);
//!
//! assert_eq!(schema.tables.len(), 2);
//! let orders = &schema.tables["orders"];
//! assert_eq!(orders.columns[1].normalized_type, NormalizedType::Bigint);
//! assert_eq!(orders.columns[1].key_role, KeyRole::Foreign);
//! assert_eq!(schema.relationships.len(), 1);
//! ```

mod classify;
mod constraint;
mod parser;
mod relationships;
mod scanner;
mod types;

use std::collections::BTreeSet;

pub use classify::classify;
use compact_str::CompactString;
pub use constraint::{detect_role, extract_comment, foreign_key_columns};
use indexmap::IndexMap;
pub use parser::parse_tables;
pub use relationships::extract_relationships;
pub use scanner::{TableBlock, split_declarations, table_blocks};
use serde::Serialize;
pub use types::{Column, KeyRole, NormalizedType, Relationship, SkippedDeclaration, Table};

use crate::{preprocessor::strip_line_comments, render::render};

/// Tables and relationships extracted from one SQL document.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Schema {
    /// Tables in order of first appearance
    pub tables:        IndexMap<CompactString, Table>,
    /// Deduplicated foreign keys
    pub relationships: BTreeSet<Relationship>,
    /// Body declarations that were not recognized as columns
    #[serde(skip)]
    pub skipped:       Vec<SkippedDeclaration>
}

impl Schema {
    /// Parse a whole SQL document.
    ///
    /// Equivalent to running [`parse_tables`] and [`extract_relationships`]
    /// on the same text, with a single scan.
    pub fn parse(sql: &str) -> Self {
        let source = strip_line_comments(sql);
        let mut schema = Self::default();

        for block in table_blocks(&source) {
            schema
                .relationships
                .extend(relationships::block_relationships(&block));
            let parsed = parser::parse_block(&block);
            schema.skipped.extend(parsed.skipped);
            if let Some(table) = parsed.table {
                schema.tables.insert(table.name.clone(), table);
            }
        }

        schema
    }

    /// Whether no table was recognized
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Render the schema as a Mermaid `erDiagram`
    pub fn to_diagram(&self) -> String {
        render(&self.tables, &self.relationships)
    }
}
