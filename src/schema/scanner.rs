//! `CREATE TABLE` block extraction.
//!
//! Blocks are located with a header regex followed by a real parenthesis
//! balance scan, so bodies may nest parentheses to any depth. Parentheses
//! and commas inside quoted strings or backtick identifiers are ignored.
//! Inside `'` and `"` strings a backslash escapes the next byte, so
//! `'User\'s name'` is one literal.
//!
//! A block has the shape
//!
//! ```text
//! CREATE TABLE [IF NOT EXISTS] name ( body ) [COMMENT [=] '...'] ;
//! ```
//!
//! Candidates that are unbalanced or not followed by the terminating
//! semicolon are skipped and scanning resumes after their header.

use std::sync::LazyLock;

use regex::Regex;

/// Header up to and including the opening parenthesis of the body.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bCREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?`?(\w+)`?\s*\(")
        .expect("valid regex")
});

/// What may follow the closing parenthesis: optional table comment, then `;`.
static TAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^\s*(?:COMMENT\s*=?\s*['"]([^'"]*)['"])?\s*;"#).expect("valid regex")
});

/// A located `CREATE TABLE` statement, borrowing from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBlock<'a> {
    /// Table name
    pub name:    &'a str,
    /// Text between the outer parentheses
    pub body:    &'a str,
    /// Table-level comment
    pub comment: Option<&'a str>
}

/// Find every well-formed `CREATE TABLE` block in `sql`, in source order.
///
/// `sql` is expected to be stripped of `--` comments already.
pub fn table_blocks(sql: &str) -> Vec<TableBlock<'_>> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(cap) = HEADER_REGEX.captures(&sql[pos..]) {
        let (Some(header), Some(name)) = (cap.get(0), cap.get(1)) else {
            break;
        };
        let open = pos + header.end() - 1;
        let resume = pos + header.end();

        let Some(close) = matching_paren(sql, open) else {
            pos = resume;
            continue;
        };
        let Some(tail) = TAIL_REGEX.captures(&sql[close + 1..]) else {
            pos = resume;
            continue;
        };

        blocks.push(TableBlock {
            name:    &sql[pos + name.start()..pos + name.end()],
            body:    &sql[open + 1..close],
            comment: tail.get(1).map(|m| m.as_str())
        });
        pos = close + 1 + tail.get(0).map_or(0, |m| m.end());
    }

    blocks
}

/// Split a table body into declarations at top-level commas.
///
/// Each entry is trimmed; empty entries are dropped.
pub fn split_declarations(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut scan = QuoteScanner::default();
    let mut start = 0;

    for (idx, byte) in body.bytes().enumerate() {
        if scan.step(byte) && byte == b',' && scan.depth == 0 {
            parts.push(&body[start..idx]);
            start = idx + 1;
        }
    }
    parts.push(&body[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Index of the parenthesis closing the one at `open`.
fn matching_paren(sql: &str, open: usize) -> Option<usize> {
    let mut scan = QuoteScanner::default();
    for (offset, byte) in sql.as_bytes()[open..].iter().copied().enumerate() {
        if scan.step(byte) && byte == b')' && scan.depth == 0 {
            return Some(open + offset);
        }
    }
    None
}

/// Byte-level tracker for parenthesis depth and quoted regions.
#[derive(Debug, Default)]
struct QuoteScanner {
    depth:   usize,
    quote:   Option<u8>,
    escaped: bool
}

impl QuoteScanner {
    /// Feed one byte; returns `true` when the byte is outside any quote.
    fn step(&mut self, byte: u8) -> bool {
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if byte == b'\\' && quote != b'`' {
                self.escaped = true;
            } else if byte == quote {
                self.quote = None;
            }
            return false;
        }
        match byte {
            b'\'' | b'"' | b'`' => {
                self.quote = Some(byte);
                false
            }
            b'(' => {
                self.depth += 1;
                true
            }
            b')' => {
                self.depth = self.depth.saturating_sub(1);
                true
            }
            _ => true
        }
    }
}
