//! Application types for CLI commands.
//!
//! Command parameters, the outcome of processing a single folder, and the
//! aggregate result of a `generate` run.

use std::path::PathBuf;

use crate::{cli::Format, schema::SkippedDeclaration};

/// Parameters for the generate command.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
///
/// use sql_erd::app::GenerateParams;
///
/// let params = GenerateParams {
///     folders:       vec![PathBuf::from("finance")],
///     root:          PathBuf::from("."),
///     schema_file:   None,
///     diagram_file:  None,
///     markdown_file: None,
///     no_markdown:   false
/// };
/// assert_eq!(params.folders.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// Explicit folders; empty means discover under `root`.
    pub folders:       Vec<PathBuf>,
    /// Directory scanned during discovery.
    pub root:          PathBuf,
    /// Schema file name override.
    pub schema_file:   Option<String>,
    /// Diagram file name override.
    pub diagram_file:  Option<String>,
    /// Markdown file name override.
    pub markdown_file: Option<String>,
    /// Skip refreshing markdown files.
    pub no_markdown:   bool
}

/// Parameters for the render command.
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Schema file path or "-" for stdin.
    pub input:  String,
    /// Output format.
    pub format: Format
}

/// What happened to the markdown file of a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownStatus {
    /// Mermaid block replaced and file rewritten
    Updated(PathBuf),
    /// File exists but holds no mermaid block; left as is
    NoMermaidBlock(PathBuf),
    /// No markdown file in the folder
    Missing,
    /// Markdown refresh turned off
    Disabled
}

/// Diagram generated for a folder.
#[derive(Debug, Clone)]
pub struct GeneratedDiagram {
    /// Schema file that was read
    pub schema_path:   PathBuf,
    /// Diagram file that was written
    pub diagram_path:  PathBuf,
    /// Number of tables in the diagram
    pub tables:        usize,
    /// Number of relationships in the diagram
    pub relationships: usize,
    /// Markdown refresh result
    pub markdown:      MarkdownStatus,
    /// Declarations left out of the diagram
    pub skipped:       Vec<SkippedDeclaration>
}

/// Outcome of processing one folder.
#[derive(Debug, Clone)]
pub enum FolderOutcome {
    /// Diagram written
    Generated(GeneratedDiagram),
    /// Path does not exist or is not a directory
    NotADirectory,
    /// Folder has no schema file
    MissingSchema(PathBuf),
    /// Schema file contains no usable table
    NoTables(PathBuf),
    /// Reading or writing failed
    Failed(String)
}

/// Outcome of one folder together with its path.
#[derive(Debug, Clone)]
pub struct FolderReport {
    pub folder:  PathBuf,
    pub outcome: FolderOutcome
}

impl FolderReport {
    /// Whether a diagram was generated
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FolderOutcome::Generated(_))
    }
}

/// Result of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// 0 when at least one folder succeeded, 1 otherwise.
    pub exit_code:  i32,
    /// Folders found by discovery; `None` when folders were given explicitly.
    pub discovered: Option<Vec<PathBuf>>,
    /// One report per processed folder, in input order.
    pub reports:    Vec<FolderReport>
}

impl GenerateResult {
    /// Number of folders with a generated diagram
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }
}
