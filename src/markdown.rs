//! Refreshing diagrams embedded in Markdown documents.
//!
//! Every ```` ```mermaid ```` fenced block is replaced with the freshly
//! rendered diagram. Text outside the fences is left untouched.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// A fenced mermaid block, lazily matched so adjacent blocks stay separate.
static MERMAID_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```mermaid\n.*?\n```").expect("valid regex"));

/// Replace every mermaid fenced block in `document` with `diagram`.
///
/// Returns `None` when the document contains no mermaid block.
///
/// # Example
///
/// ```
/// use sql_erd::markdown::replace_mermaid_blocks;
///
/// let doc = "# ERD\n\n```mermaid\nerDiagram\n```\n\nNotes\n";
/// let updated = replace_mermaid_blocks(doc, "erDiagram\n    a {\n    }\n").unwrap();
///
/// assert_eq!(updated, "# ERD\n\n```mermaid\nerDiagram\n    a {\n    }\n```\n\nNotes\n");
/// ```
pub fn replace_mermaid_blocks(document: &str, diagram: &str) -> Option<String> {
    if !MERMAID_BLOCK_REGEX.is_match(document) {
        return None;
    }
    let mut replacement = format!("```mermaid\n{}", diagram);
    if !diagram.ends_with('\n') {
        replacement.push('\n');
    }
    replacement.push_str("```");
    Some(
        MERMAID_BLOCK_REGEX
            .replace_all(document, NoExpand(&replacement))
            .into_owned()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_block() {
        assert_eq!(replace_mermaid_blocks("# Title\n", "erDiagram\n"), None);
    }

    #[test]
    fn test_other_fences_untouched() {
        let doc = "```sql\nSELECT 1;\n```\n```mermaid\nold\n```\n";
        let updated = replace_mermaid_blocks(doc, "erDiagram\n").unwrap();
        assert_eq!(updated, "```sql\nSELECT 1;\n```\n```mermaid\nerDiagram\n```\n");
    }

    #[test]
    fn test_all_blocks_replaced() {
        let doc = "```mermaid\none\n```\ntext\n```mermaid\ntwo\n```";
        let updated = replace_mermaid_blocks(doc, "new\n").unwrap();
        assert_eq!(updated, "```mermaid\nnew\n```\ntext\n```mermaid\nnew\n```");
    }

    #[test]
    fn test_dollar_signs_are_literal() {
        let doc = "```mermaid\nold\n```";
        let updated = replace_mermaid_blocks(doc, "cost \"$1\"\n").unwrap();
        assert_eq!(updated, "```mermaid\ncost \"$1\"\n```");
    }

    #[test]
    fn test_diagram_without_trailing_newline() {
        let updated = replace_mermaid_blocks("```mermaid\nold\n```", "erDiagram").unwrap();
        assert_eq!(updated, "```mermaid\nerDiagram\n```");
    }
}
