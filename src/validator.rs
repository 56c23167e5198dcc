//! Per-file validation pipeline
//!
//! [`validate_file`] runs the full check sequence for one path: metadata
//! checks, a two-step encoding read, a lenient parse-sanity tokenization,
//! classification, and the category rule. Every outcome, including internal
//! errors, is converted to a [`Verdict`]; nothing propagates to the caller,
//! so one broken file can never abort the run.

use crate::classifier::StatementCategory;
use crate::rules;
use crate::verdict::Verdict;
use sqlparser::dialect::GenericDialect;
use sqlparser::tokenizer::Tokenizer;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Internal error during file processing
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Validate a single file. Always returns a verdict, never an error.
pub fn validate_file(path: &Path) -> Verdict {
    match validate_inner(path) {
        Ok(verdict) => verdict,
        Err(e) => Verdict::fail(format!(
            "Error processing file {}: {}",
            path.display(),
            e
        )),
    }
}

fn validate_inner(path: &Path) -> Result<Verdict, ValidateError> {
    if !path.exists() {
        return Ok(Verdict::fail(format!("File not found: {}", path.display())));
    }

    if !path.is_file() {
        return Ok(Verdict::fail(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    if !has_sql_extension(path) {
        return Ok(Verdict::fail(format!("Not a SQL file: {}", path.display())));
    }

    let bytes = fs::read(path)?;
    let byte_size = bytes.len();
    let content = decode(bytes);

    if content.trim().is_empty() {
        return Ok(Verdict::fail("File is empty"));
    }

    let line_count = content.lines().count();

    // Size/line metadata decorates content-level verdicts only; the
    // existence/type/empty failures above stay undecorated.
    Ok(validate_content(&content, path).with_metadata(byte_size, line_count))
}

/// Validate document content: parse sanity, classification, rule dispatch.
fn validate_content(content: &str, path: &Path) -> Verdict {
    if let Some(verdict) = parse_sanity(content) {
        return verdict;
    }

    let category = StatementCategory::classify(content, path);
    rules::apply(category, content)
}

/// Lenient tokenization pass over the content.
///
/// Only content too malformed to tokenize at all fails here (e.g. an
/// unterminated string literal). This is deliberately not a grammar check;
/// dialect-specific constructs the tokenizer accepts are let through.
fn parse_sanity(content: &str) -> Option<Verdict> {
    let dialect = GenericDialect {};
    match Tokenizer::new(&dialect, content).tokenize() {
        Ok(tokens) if tokens.is_empty() => Some(Verdict::fail("Failed to parse SQL content")),
        Ok(_) => None,
        Err(e) => Some(Verdict::fail(format!("SQL parsing error: {}", e))),
    }
}

/// Case-insensitive `.sql` suffix check (unlike the change-set filter,
/// which is case-sensitive by contract).
fn has_sql_extension(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".sql")
}

/// Decode file bytes as UTF-8, falling back to Latin-1.
///
/// The fallback maps each byte to the code point of the same value, so it
/// accepts any byte sequence and the read never fails structurally.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}
