//! Command execution.
//!
//! `generate` runs the full pipeline for every folder: read the schema file,
//! parse it, write the diagram file and refresh the markdown document.
//! Folders are independent, so they are processed in parallel with
//! [`rayon`]; reports come back in input order. A failing folder never stops
//! the others.

use std::{
    fs::{self, read_to_string},
    path::{Path, PathBuf}
};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::{
    convert::convert_format,
    helpers::{calculate_exit_code, find_domain_folders, read_schema_input, resolve_files},
    types::{
        FolderOutcome, FolderReport, GenerateParams, GenerateResult, GeneratedDiagram,
        MarkdownStatus, RenderParams
    }
};
use crate::{
    config::{Config, FilesConfig},
    error::{AppResult, file_read_error, file_write_error},
    markdown::replace_mermaid_blocks,
    output::format_schema,
    schema::Schema
};

/// Processes a single domain folder.
///
/// Never fails: read and write errors are reported as
/// [`FolderOutcome::Failed`].
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use sql_erd::{app::process_folder, config::FilesConfig};
///
/// let report = process_folder(Path::new("finance"), &FilesConfig::default(), true);
/// println!("success: {}", report.is_success());
/// ```
pub fn process_folder(folder: &Path, files: &FilesConfig, update_markdown: bool) -> FolderReport {
    let outcome = if !folder.is_dir() {
        FolderOutcome::NotADirectory
    } else {
        let schema_path = folder.join(&files.schema);
        if schema_path.is_file() {
            generate_diagram(folder, schema_path, files, update_markdown)
                .unwrap_or_else(|e| FolderOutcome::Failed(e.to_string()))
        } else {
            FolderOutcome::MissingSchema(schema_path)
        }
    };

    FolderReport {
        folder: folder.to_path_buf(),
        outcome
    }
}

fn generate_diagram(
    folder: &Path,
    schema_path: PathBuf,
    files: &FilesConfig,
    update_markdown: bool
) -> AppResult<FolderOutcome> {
    let sql = read_to_string(&schema_path)
        .map_err(|e| file_read_error(&schema_path.display().to_string(), e))?;
    let schema = Schema::parse(&sql);
    if schema.is_empty() {
        return Ok(FolderOutcome::NoTables(schema_path));
    }

    let diagram = schema.to_diagram();
    let diagram_path = folder.join(&files.diagram);
    fs::write(&diagram_path, &diagram)
        .map_err(|e| file_write_error(&diagram_path.display().to_string(), e))?;

    let markdown = if update_markdown {
        refresh_markdown(&folder.join(&files.markdown), &diagram)?
    } else {
        MarkdownStatus::Disabled
    };

    Ok(FolderOutcome::Generated(GeneratedDiagram {
        schema_path,
        diagram_path,
        tables: schema.tables.len(),
        relationships: schema.relationships.len(),
        markdown,
        skipped: schema.skipped
    }))
}

fn refresh_markdown(path: &Path, diagram: &str) -> AppResult<MarkdownStatus> {
    if !path.is_file() {
        return Ok(MarkdownStatus::Missing);
    }
    let document =
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))?;

    match replace_mermaid_blocks(&document, diagram) {
        Some(updated) => {
            fs::write(path, updated)
                .map_err(|e| file_write_error(&path.display().to_string(), e))?;
            Ok(MarkdownStatus::Updated(path.to_path_buf()))
        }
        None => Ok(MarkdownStatus::NoMermaidBlock(path.to_path_buf()))
    }
}

/// Runs the generate command.
///
/// Without explicit folders, every domain folder under `params.root` is
/// processed. Finding nothing to process is not an error (exit code 0).
///
/// # Errors
///
/// Returns an error only if discovery cannot list `params.root`.
pub fn run_generate(params: GenerateParams, config: Config) -> AppResult<GenerateResult> {
    let files = resolve_files(&params, &config);
    let update_markdown = config.markdown.update && !params.no_markdown;

    let (folders, discovered) = if params.folders.is_empty() {
        let found = find_domain_folders(&params.root, &files.schema)?;
        (found.clone(), Some(found))
    } else {
        (params.folders, None)
    };

    let pb = ProgressBar::new(folders.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.green} {pos}/{len} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message("Generating diagrams...");

    let reports: Vec<FolderReport> = folders
        .par_iter()
        .map(|folder| {
            let report = process_folder(folder, &files, update_markdown);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_and_clear();

    let exit_code = if reports.is_empty() {
        0
    } else {
        calculate_exit_code(&reports)
    };

    Ok(GenerateResult {
        exit_code,
        discovered,
        reports
    })
}

/// Runs the render command and returns the text to print.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the model cannot be
/// serialized.
pub fn run_render(params: RenderParams) -> AppResult<String> {
    let sql = read_schema_input(&params.input)?;
    let schema = Schema::parse(&sql);
    format_schema(&schema, convert_format(params.format))
}
