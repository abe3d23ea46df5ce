//! Console progress report for a generation run.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::config::Layout;
use crate::ctype::ParsedType;
use crate::emit::VERSION;
use crate::pipeline::TypeEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Banner, step lines, alias table.
    Text,
    /// Only the final JSON listing of the type table.
    Json,
    Quiet,
}

impl ReportStyle {
    pub fn from_args(format: &str, quiet: bool) -> Self {
        if quiet {
            ReportStyle::Quiet
        } else if format == "json" {
            ReportStyle::Json
        } else {
            ReportStyle::Text
        }
    }
}

pub struct Report<W: Write> {
    style: ReportStyle,
    color: bool,
    out: W,
    started: Instant,
}

impl Report<io::Stdout> {
    pub fn stdout(style: ReportStyle, color: bool) -> Self {
        Self::new(style, color, io::stdout())
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    fingerprint: &'a str,
    types: Vec<JsonType<'a>>,
}

#[derive(Serialize)]
struct JsonType<'a> {
    original: &'a str,
    alias: &'a str,
    macro_name: &'a str,
    line: usize,
    parsed: &'a ParsedType,
}

impl<W: Write> Report<W> {
    pub fn new(style: ReportStyle, color: bool, out: W) -> Self {
        Self {
            style,
            color,
            out,
            started: Instant::now(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn text(&self) -> bool {
        self.style == ReportStyle::Text
    }

    fn cyan(&self, s: &str) -> String {
        if self.color {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn framed(&mut self, title: &str) {
        let rule = "=".repeat(37);
        let block = format!("{rule}\n\t{title}\n{rule}");
        let block = self.cyan(&block);
        let _ = writeln!(self.out, "{block}\n");
    }

    pub fn banner(&mut self, layout: &Layout) {
        if !self.text() {
            return;
        }
        self.framed("VECTOR TYPE GENERATOR");
        let _ = writeln!(self.out, "Input files:");
        let _ = writeln!(
            self.out,
            "\tTypes initialization :: {}\n",
            layout.header.display()
        );
        let _ = writeln!(self.out, "Output files:");
        for (label, path) in [
            ("Declaration", &layout.decl_file),
            ("Implementation", &layout.impl_file),
            ("Aliases", &layout.aliases_file),
            ("Documentation", &layout.doc_file),
            ("Debug", &layout.debug_file),
        ] {
            let _ = writeln!(self.out, "\t{label:<20} :: {}", path.display());
        }
        let _ = writeln!(self.out);
    }

    pub fn collecting(&mut self, header: &Path) {
        if !self.text() {
            return;
        }
        let line = self.bold(&format!(
            "[1/3] Collecting types from {}...",
            header.display()
        ));
        let _ = writeln!(self.out, "{line}");
    }

    pub fn found(&mut self, entries: &[TypeEntry]) {
        if !self.text() {
            return;
        }
        for (i, entry) in entries.iter().enumerate() {
            let _ = writeln!(self.out, "\t[{}] Found type: {}", i + 1, entry.pair.original);
        }
        let _ = writeln!(self.out, "\n\tFound unique types: {}\n", entries.len());
    }

    /// Aligned `original --> alias` table.
    pub fn aliases(&mut self, entries: &[TypeEntry]) {
        if !self.text() {
            return;
        }
        let line = self.bold("[2/3] Generating aliases...");
        let _ = writeln!(self.out, "{line}");
        let width = entries
            .iter()
            .map(|e| e.pair.original.chars().count())
            .max()
            .unwrap_or(0);
        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let _ = writeln!(
                self.out,
                "\t[{}/{total}] {:<width$} --> {}",
                i + 1,
                entry.pair.original,
                entry.pair.alias
            );
        }
        let _ = writeln!(self.out, "\n\tGenerated aliases: {total}\n");
    }

    pub fn generating(&mut self) {
        if !self.text() {
            return;
        }
        let line = self.bold("[3/3] Generating files...");
        let _ = writeln!(self.out, "{line}");
    }

    pub fn artifact(&mut self, index: usize, total: usize, path: &Path) {
        if !self.text() {
            return;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(self.out, "\t[{index}/{total}] {name}");
    }

    pub fn json(&mut self, entries: &[TypeEntry], fingerprint: &str) -> Result<()> {
        if self.style != ReportStyle::Json {
            return Ok(());
        }
        let output = JsonOutput {
            version: VERSION,
            fingerprint,
            types: entries
                .iter()
                .map(|e| JsonType {
                    original: &e.pair.original,
                    alias: &e.pair.alias,
                    macro_name: &e.source.macro_name,
                    line: e.source.line,
                    parsed: &e.parsed,
                })
                .collect(),
        };
        writeln!(self.out, "{}", serde_json::to_string_pretty(&output)?)?;
        Ok(())
    }

    pub fn footer(&mut self) {
        if !self.text() {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        let _ = writeln!(self.out);
        self.framed(&format!("Done!\n\tSpent time: {elapsed:.2}s"));
    }
}
