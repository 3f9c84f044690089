//! # SQL ERD
//!
//! Keep Mermaid entity-relationship diagrams in sync with hand-written SQL
//! schema files, without a database connection.
//!
//! `sql-erd` reads `CREATE TABLE` statements, classifies every column into a
//! small type vocabulary, marks primary, foreign and unique keys, collects
//! table-level foreign keys as relationships and renders the result as a
//! Mermaid `erDiagram`.
//!
//! # Quick Start
//!
//! ```bash
//! # Every sub-folder of the current directory that has a schema.sql
//! sql-erd generate
//!
//! # Only some folders
//! sql-erd generate finance ecommerce
//!
//! # One file to stdout, or the parsed model as JSON
//! sql-erd render finance/schema.sql
//! cat schema.sql | sql-erd render - -f json
//! ```
//!
//! For each folder `generate` writes `ERD.mmd` and, when `ERD.md` exists,
//! replaces its ```` ```mermaid ```` block with the new diagram.
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_ERD_SCHEMA_FILE`, `SQL_ERD_DIAGRAM_FILE`,
//!    `SQL_ERD_MARKDOWN_FILE`)
//! 3. `.sql-erd.toml` in current directory
//! 4. `~/.config/sql-erd/config.toml`
//!
//! ```toml
//! [files]
//! schema = "schema.sql"
//! diagram = "ERD.mmd"
//! markdown = "ERD.md"
//!
//! [markdown]
//! update = true
//! ```
//!
//! # Type Mapping
//!
//! | SQL type contains | Diagram type |
//! |-------------------|--------------|
//! | `BIGINT` | `bigint` |
//! | `INT`, `SERIAL` | `int` |
//! | `VARCHAR`, `CHAR` | `varchar` |
//! | `DECIMAL`, `NUMERIC` | `decimal` |
//! | `TIMESTAMP` | `timestamp` |
//! | `DATETIME` | `datetime` |
//! | `DATE` | `date` |
//! | `TEXT`, `JSON` | `text` |
//! | `BOOLEAN`, `BOOL` | `boolean` |
//! | anything else | `varchar` |
//!
//! # Exit Codes
//!
//! - `0` - At least one folder processed, or nothing to process
//! - `1` - No folder processed successfully, or a fatal error

use std::process;

use clap::Parser;
use sql_erd::{
    app::{GenerateParams, RenderParams, create_output_options, run_generate, run_render},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult,
    output::{format_banner, format_discovered, format_folder_report, format_summary}
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Generate {
            folders,
            root,
            schema_file,
            diagram_file,
            markdown_file,
            no_markdown,
            verbose,
            no_color
        } => {
            let output_opts = create_output_options(no_color, verbose);
            println!("{}", format_banner(&output_opts));

            let result = run_generate(
                GenerateParams {
                    folders,
                    root,
                    schema_file,
                    diagram_file,
                    markdown_file,
                    no_markdown
                },
                config
            )?;

            if let Some(discovered) = &result.discovered {
                println!("{}", format_discovered(discovered, &output_opts));
                if discovered.is_empty() {
                    return Ok(result.exit_code);
                }
            }

            for report in &result.reports {
                println!("{}", format_folder_report(report, &output_opts));
            }
            println!(
                "{}",
                format_summary(result.succeeded(), result.reports.len(), &output_opts)
            );

            Ok(result.exit_code)
        }
        Commands::Render {
            input,
            format
        } => {
            let output = run_render(RenderParams {
                input: input.display().to_string(),
                format
            })?;
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(0)
        }
    }
}
