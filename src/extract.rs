//! Type extraction from the initialization header.
//!
//! Finds `VECTOR_INITIALIZE_*( <type> )` invocations and collects their
//! arguments in first-seen order, deduplicated by exact text after trimming.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::error::GenError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedType {
    /// Trimmed macro argument.
    pub raw: String,
    /// The full macro name, e.g. `VECTOR_INITIALIZE_TYPE`.
    pub macro_name: String,
    /// 1-indexed line of the first occurrence.
    pub line: usize,
}

pub struct MacroScanner {
    pattern: Regex,
}

impl MacroScanner {
    /// Scanner for macros whose name starts with `prefix` followed by any
    /// run of `[A-Z_]`.
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"({}[A-Z_]*)\s*\(\s*([^)]+)\s*\)",
            regex::escape(prefix)
        ))
        .with_context(|| format!("invalid macro prefix: {prefix}"))?;
        Ok(Self { pattern })
    }

    pub fn scan(&self, source: &str) -> Vec<ExtractedType> {
        let mut seen = HashSet::new();
        let mut results = Vec::new();
        let mut line = 1;
        let mut line_pos = 0;

        for caps in self.pattern.captures_iter(source) {
            let (Some(whole), Some(name), Some(arg)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            line += source[line_pos..whole.start()].matches('\n').count();
            line_pos = whole.start();

            let raw = arg.as_str().trim();
            if raw.is_empty() {
                tracing::warn!(line, macro_name = name.as_str(), "skipping empty macro argument");
                continue;
            }
            if !seen.insert(raw.to_string()) {
                tracing::debug!(line, raw, "duplicate type dropped");
                continue;
            }
            results.push(ExtractedType {
                raw: raw.to_string(),
                macro_name: name.as_str().to_string(),
                line,
            });
        }

        results
    }
}

/// Read the header, distinguishing a missing file from other read failures.
pub fn read_header(path: &Path) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            GenError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GenError::SourceRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Read `path` and scan it. Zero matches is an error.
pub fn collect_types(path: &Path, scanner: &MacroScanner) -> Result<Vec<ExtractedType>, GenError> {
    let source = read_header(path)?;
    let types = scanner.scan(&source);
    if types.is_empty() {
        return Err(GenError::NoTypesFound {
            path: path.to_path_buf(),
        });
    }
    Ok(types)
}
