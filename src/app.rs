//! Application logic for the `sql-erd` CLI.
//!
//! This module contains the folder-processing pipeline separated from the
//! main entry point to enable testing.
//!
//! # Modules
//!
//! - `commands` - `generate` and `render` command execution
//! - `helpers` - Folder discovery, input reading, exit codes
//! - `convert` - CLI type to internal type conversion
//! - `types` - Parameters, per-folder outcomes and results

mod commands;
mod convert;
mod helpers;
mod types;

pub use commands::{process_folder, run_generate, run_render};
pub use convert::convert_format;
pub use helpers::{
    calculate_exit_code, create_output_options, find_domain_folders, read_schema_input,
    resolve_files
};
pub use types::{
    FolderOutcome, FolderReport, GenerateParams, GenerateResult, GeneratedDiagram,
    MarkdownStatus, RenderParams
};
