//! Helper functions for CLI operations.
//!
//! Folder discovery, input reading, exit codes and the merging of CLI
//! overrides with configuration defaults.

use std::{
    fs::{read_dir, read_to_string},
    io::{self, Read},
    path::{Path, PathBuf}
};

use super::types::{FolderReport, GenerateParams};
use crate::{
    config::{Config, FilesConfig},
    error::{AppResult, file_read_error},
    output::OutputOptions
};

/// Calculates the process exit code of a generate run.
///
/// - `0` - At least one folder produced a diagram
/// - `1` - No folder was processed successfully
///
/// # Example
///
/// ```
/// use sql_erd::app::calculate_exit_code;
///
/// assert_eq!(calculate_exit_code(&[]), 1);
/// ```
pub fn calculate_exit_code(reports: &[FolderReport]) -> i32 {
    if reports.iter().any(FolderReport::is_success) {
        0
    } else {
        1
    }
}

/// Finds domain folders below `root`.
///
/// A domain folder is a direct, non-hidden sub-directory of `root` that
/// contains `schema_file`. The result is sorted by path.
///
/// # Errors
///
/// Returns an error if `root` cannot be listed.
pub fn find_domain_folders(root: &Path, schema_file: &str) -> AppResult<Vec<PathBuf>> {
    let entries = read_dir(root).map_err(|e| file_read_error(&root.display().to_string(), e))?;

    let mut folders: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| !name.to_string_lossy().starts_with('.'))
        })
        .filter(|path| path.join(schema_file).is_file())
        .collect();

    folders.sort();
    Ok(folders)
}

/// Reads schema SQL from a file or stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin fails.
pub fn read_schema_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Applies CLI file name overrides on top of the configured names.
pub fn resolve_files(params: &GenerateParams, config: &Config) -> FilesConfig {
    let defaults = &config.files;
    FilesConfig {
        schema:   params
            .schema_file
            .clone()
            .unwrap_or_else(|| defaults.schema.clone()),
        diagram:  params
            .diagram_file
            .clone()
            .unwrap_or_else(|| defaults.diagram.clone()),
        markdown: params
            .markdown_file
            .clone()
            .unwrap_or_else(|| defaults.markdown.clone())
    }
}

/// Creates console output options from CLI flags.
pub fn create_output_options(no_color: bool, verbose: bool) -> OutputOptions {
    OutputOptions {
        colored: !no_color,
        verbose
    }
}
