// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use sql_erd::{
    app::{FolderOutcome, FolderReport, GeneratedDiagram, MarkdownStatus},
    output::{
        OutputFormat, OutputOptions, format_banner, format_discovered, format_folder_report,
        format_schema, format_summary
    },
    schema::{Schema, SkippedDeclaration}
};

fn plain() -> OutputOptions {
    OutputOptions {
        colored: false,
        verbose: false
    }
}

fn sample_schema() -> Schema {
    Schema::parse(
        "CREATE TABLE users (id BIGINT PRIMARY KEY);\nCREATE TABLE posts (id INT, author_id \
         BIGINT, FOREIGN KEY (author_id) REFERENCES users(id));"
    )
}

fn generated(markdown: MarkdownStatus) -> FolderReport {
    FolderReport {
        folder:  PathBuf::from("/work/blog"),
        outcome: FolderOutcome::Generated(GeneratedDiagram {
            schema_path: PathBuf::from("/work/blog/schema.sql"),
            diagram_path: PathBuf::from("/work/blog/ERD.mmd"),
            tables: 2,
            relationships: 1,
            markdown,
            skipped: vec![SkippedDeclaration {
                table: "posts".into(),
                text:  "weird".to_string()
            }]
        })
    }
}

#[test]
fn test_output_format_default() {
    assert!(matches!(OutputFormat::default(), OutputFormat::Mermaid));
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert!(opts.colored);
    assert!(!opts.verbose);
}

#[test]
fn test_format_schema_mermaid() {
    let output = format_schema(&sample_schema(), OutputFormat::Mermaid).unwrap();
    let expected = "erDiagram\n    users {\n        bigint id PK\n    }\n\n    posts {\n        \
                    int id\n        bigint author_id FK\n    }\n\n    %% Relationships\n    \
                    users ||--o{ posts : \"author_id\"\n";
    assert_eq!(output, expected);
}

#[test]
fn test_format_schema_json() {
    let output = format_schema(&sample_schema(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["tables"]["users"]["columns"][0]["key_role"], "primary");
    assert_eq!(value["relationships"][0]["target_table"], "users");
    assert!(value.get("skipped").is_none());
}

#[test]
fn test_format_schema_yaml() {
    let output = format_schema(&sample_schema(), OutputFormat::Yaml).unwrap();
    assert!(output.contains("normalized_type: bigint"));
}

#[test]
fn test_format_banner() {
    let banner = format_banner(&plain());
    assert!(banner.contains("ERD Generator - SQL to Mermaid"));
}

#[test]
fn test_format_discovered() {
    let output = format_discovered(
        &[PathBuf::from("./ecommerce"), PathBuf::from("./finance")],
        &plain()
    );
    assert!(output.contains("Found 2 domain folders:"));
    assert!(output.contains("   - ecommerce/"));
    assert!(output.contains("   - finance/"));
}

#[test]
fn test_format_discovered_empty() {
    let output = format_discovered(&[], &plain());
    assert!(output.contains("No domain folders"));
}

#[test]
fn test_format_generated_report() {
    let output = format_folder_report(
        &generated(MarkdownStatus::Updated(PathBuf::from("/work/blog/ERD.md"))),
        &plain()
    );
    assert_eq!(
        output,
        "\nProcessing blog/\n   Reading: schema.sql\n   Found: 2 tables, 1 relationships\n   \
         Created: ERD.mmd\n   Updated: ERD.md"
    );
}

#[test]
fn test_format_generated_report_verbose() {
    let opts = OutputOptions {
        colored: false,
        verbose: true
    };
    let output = format_folder_report(&generated(MarkdownStatus::Missing), &opts);
    assert!(output.ends_with("Created: ERD.mmd\n   Ignored in posts: weird"));
}

#[test]
fn test_format_markdown_without_block() {
    let output = format_folder_report(
        &generated(MarkdownStatus::NoMermaidBlock(PathBuf::from("/work/blog/ERD.md"))),
        &plain()
    );
    assert!(output.contains("Unchanged: ERD.md has no mermaid block"));
}

#[test]
fn test_format_failure_reports() {
    let missing = FolderReport {
        folder:  PathBuf::from("/work/hr"),
        outcome: FolderOutcome::MissingSchema(PathBuf::from("/work/hr/schema.sql"))
    };
    assert_eq!(
        format_folder_report(&missing, &plain()),
        "\nSkipping hr: schema.sql not found"
    );

    let no_tables = FolderReport {
        folder:  PathBuf::from("/work/hr"),
        outcome: FolderOutcome::NoTables(PathBuf::from("/work/hr/schema.sql"))
    };
    assert!(format_folder_report(&no_tables, &plain()).contains("No tables found in schema.sql"));

    let failed = FolderReport {
        folder:  PathBuf::from("/work/hr"),
        outcome: FolderOutcome::Failed("disk full".to_string())
    };
    assert!(format_folder_report(&failed, &plain()).contains("Error processing hr: disk full"));
}

#[test]
fn test_format_summary() {
    assert!(format_summary(2, 3, &plain()).contains("Successfully processed 2/3 folders"));
    assert!(format_summary(0, 3, &plain()).contains("No folders were processed successfully"));
}

#[test]
fn test_colored_output_differs() {
    let colored = OutputOptions {
        colored: true,
        verbose: false
    };
    colored::control::set_override(true);
    assert_ne!(format_summary(1, 1, &colored), format_summary(1, 1, &plain()));
}
