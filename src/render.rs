//! Mermaid `erDiagram` rendering.
//!
//! Output layout:
//!
//! ```text
//! erDiagram
//!     users {
//!         bigint id PK
//!         varchar email UK "Login address"
//!     }
//!
//!     %% Relationships
//!     users ||--o{ orders : "user_id"
//! ```
//!
//! The referenced table sits on the "one" side of every edge and the
//! declaring table on the "many" side.

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::schema::{Column, Relationship, Table};

/// Render tables and relationships as diagram text.
///
/// Tables are emitted in map order, relationships in iteration order. The
/// same input always produces the same bytes.
pub fn render<'a, R>(tables: &IndexMap<CompactString, Table>, relationships: R) -> String
where
    R: IntoIterator<Item = &'a Relationship>
{
    let mut output = String::from("erDiagram\n");

    for (name, table) in tables {
        output.push_str(&format!("    {} {{\n", name));
        for column in &table.columns {
            output.push_str(&format!("        {}\n", render_column(column)));
        }
        output.push_str("    }\n\n");
    }

    output.push_str("    %% Relationships\n");
    for rel in relationships {
        output.push_str(&format!(
            "    {target} ||--o{{ {source} : \"{label}\"\n",
            target = rel.target_table,
            source = rel.source_table,
            label = rel.source_column
        ));
    }

    output
}

/// `<type> <name> [PK|FK|UK] ["comment"]`
fn render_column(column: &Column) -> String {
    let mut line = format!("{} {}", column.normalized_type, column.name);
    if let Some(abbreviation) = column.key_role.abbreviation() {
        line.push(' ');
        line.push_str(abbreviation);
    }
    if let Some(comment) = &column.comment {
        // Mermaid has no escape for double quotes inside a label
        line.push_str(&format!(" \"{}\"", comment.replace('"', "'")));
    }
    line
}
