use std::path::{Path, PathBuf};

use colored::{ColoredString, Colorize};

use crate::{
    app::{FolderOutcome, FolderReport, GeneratedDiagram, MarkdownStatus},
    error::{AppResult, output_error},
    schema::Schema
};

const RULE: &str = "============================================================";

/// Output format for a rendered schema
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Mermaid,
    Json,
    Yaml
}

/// Console output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            colored: true,
            verbose: false
        }
    }
}

/// Format a parsed schema in the requested format
pub fn format_schema(schema: &Schema, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Mermaid => Ok(schema.to_diagram()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(schema).map_err(|e| output_error("JSON", e))
        }
        OutputFormat::Yaml => serde_yaml::to_string(schema).map_err(|e| output_error("YAML", e))
    }
}

/// Banner printed before processing folders
pub fn format_banner(opts: &OutputOptions) -> String {
    let title = paint("ERD Generator - SQL to Mermaid", opts, |s| s.bold());
    format!("{RULE}\n{title}\n{RULE}")
}

/// List of folders found by discovery
pub fn format_discovered(folders: &[PathBuf], opts: &OutputOptions) -> String {
    if folders.is_empty() {
        let msg = "No domain folders with a schema file found";
        return format!("\n{}", paint(msg, opts, |s| s.yellow()));
    }
    let mut output = format!("\nFound {} domain folders:", folders.len());
    for folder in folders {
        output.push_str(&format!("\n   - {}/", path_label(folder)));
    }
    output
}

/// Format the outcome of one folder
pub fn format_folder_report(report: &FolderReport, opts: &OutputOptions) -> String {
    let label = path_label(&report.folder);
    let header = paint(&format!("Processing {}/", label), opts, |s| s.cyan().bold());

    match &report.outcome {
        FolderOutcome::NotADirectory => paint(
            &format!("\nError: {} is not a valid directory", report.folder.display()),
            opts,
            |s| s.red()
        ),
        FolderOutcome::MissingSchema(schema) => paint(
            &format!("\nSkipping {}: {} not found", label, path_label(schema)),
            opts,
            |s| s.yellow()
        ),
        FolderOutcome::NoTables(schema) => format!(
            "\n{header}\n   Reading: {file}\n   {warning}",
            file = path_label(schema),
            warning = paint(
                &format!("No tables found in {}", path_label(schema)),
                opts,
                |s| s.yellow()
            )
        ),
        FolderOutcome::Failed(message) => format!(
            "\n{header}\n   {error}",
            error = paint(
                &format!("Error processing {}: {}", label, message),
                opts,
                |s| s.red()
            )
        ),
        FolderOutcome::Generated(generated) => {
            format!("\n{header}{}", format_generated(generated, opts))
        }
    }
}

fn format_generated(generated: &GeneratedDiagram, opts: &OutputOptions) -> String {
    let mut output = format!(
        "\n   Reading: {}\n   Found: {} tables, {} relationships",
        path_label(&generated.schema_path),
        generated.tables,
        generated.relationships
    );
    output.push_str(&format!(
        "\n   {}",
        paint(
            &format!("Created: {}", path_label(&generated.diagram_path)),
            opts,
            |s| s.green()
        )
    ));

    match &generated.markdown {
        MarkdownStatus::Updated(path) => output.push_str(&format!(
            "\n   {}",
            paint(&format!("Updated: {}", path_label(path)), opts, |s| s.green())
        )),
        MarkdownStatus::NoMermaidBlock(path) => output.push_str(&format!(
            "\n   {}",
            paint(
                &format!("Unchanged: {} has no mermaid block", path_label(path)),
                opts,
                |s| s.yellow()
            )
        )),
        MarkdownStatus::Missing | MarkdownStatus::Disabled => {}
    }

    if opts.verbose {
        for skipped in &generated.skipped {
            output.push_str(&format!(
                "\n   {}",
                paint(
                    &format!("Ignored in {}: {}", skipped.table, skipped.text),
                    opts,
                    |s| s.dimmed()
                )
            ));
        }
    }

    output
}

/// Final `n/m` summary
pub fn format_summary(succeeded: usize, total: usize, opts: &OutputOptions) -> String {
    let line = if succeeded > 0 {
        paint(
            &format!("Successfully processed {}/{} folders", succeeded, total),
            opts,
            |s| s.green().bold()
        )
    } else {
        paint("No folders were processed successfully", opts, |s| s.red().bold())
    };
    format!("\n{RULE}\n{line}\n{RULE}")
}

fn paint(text: &str, opts: &OutputOptions, style: impl Fn(&str) -> ColoredString) -> String {
    if opts.colored {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Last path component, or the whole path when there is none (`.`, `/`)
fn path_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

