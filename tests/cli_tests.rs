// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use clap::Parser;
use sql_erd::cli::{Cli, Commands, Format};

#[test]
fn test_generate_defaults() {
    let cli = Cli::parse_from(["sql-erd", "generate"]);
    let Commands::Generate {
        folders,
        root,
        schema_file,
        no_markdown,
        no_color,
        ..
    } = cli.command
    else {
        panic!("expected generate command");
    };
    assert!(folders.is_empty());
    assert_eq!(root.to_str(), Some("."));
    assert!(schema_file.is_none());
    assert!(!no_markdown);
    assert!(!no_color);
}

#[test]
fn test_generate_with_folders_and_flags() {
    let cli = Cli::parse_from([
        "sql-erd",
        "generate",
        "finance",
        "ecommerce",
        "--markdown-file",
        "README.md",
        "--no-markdown",
        "-v"
    ]);
    let Commands::Generate {
        folders,
        markdown_file,
        no_markdown,
        verbose,
        ..
    } = cli.command
    else {
        panic!("expected generate command");
    };
    assert_eq!(folders.len(), 2);
    assert_eq!(markdown_file.as_deref(), Some("README.md"));
    assert!(no_markdown);
    assert!(verbose);
}

#[test]
fn test_render_default_format() {
    let cli = Cli::parse_from(["sql-erd", "render", "schema.sql"]);
    let Commands::Render {
        input,
        format
    } = cli.command
    else {
        panic!("expected render command");
    };
    assert_eq!(input.to_str(), Some("schema.sql"));
    assert!(matches!(format, Format::Mermaid));
}

#[test]
fn test_render_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["sql-erd", "render", "schema.sql", "-f", "svg"]).is_err());
}

#[test]
fn test_format_debug() {
    let format = Format::Yaml;
    let debug = format!("{:?}", format);
    assert!(debug.contains("Yaml"));
}
