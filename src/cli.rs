use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL ERD - Generate Mermaid ER diagrams from SQL schema files
#[derive(Parser, Debug)]
#[command(name = "sql-erd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate diagram files for domain folders
    Generate {
        /// Folders to process (default: every folder under --root with a
        /// schema file)
        folders: Vec<PathBuf>,

        /// Directory scanned for domain folders when none are given
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Schema file name inside each folder
        #[arg(long, env = "SQL_ERD_SCHEMA_FILE")]
        schema_file: Option<String>,

        /// Diagram file name written into each folder
        #[arg(long, env = "SQL_ERD_DIAGRAM_FILE")]
        diagram_file: Option<String>,

        /// Markdown file name whose mermaid block is refreshed
        #[arg(long, env = "SQL_ERD_MARKDOWN_FILE")]
        markdown_file: Option<String>,

        /// Do not touch markdown files
        #[arg(long)]
        no_markdown: bool,

        /// List declarations that were not recognized as columns
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Print the diagram of a single schema file
    Render {
        /// Path to SQL schema file (use - for stdin)
        input: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "mermaid")]
        format: Format
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Mermaid,
    Json,
    Yaml
}
