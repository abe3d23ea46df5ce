use std::io::{self, Write};
use std::path::Path;

use super::{Artifact, EmitContext};
use crate::config::Layout;

const ORIGINAL_HEADING: &str = "Original type";
const ALIAS_HEADING: &str = "Alias";

/// Plain-text table of original types and their aliases.
pub struct TypesDoc;

impl Artifact for TypesDoc {
    fn label(&self) -> &'static str {
        "documentation"
    }

    fn path<'l>(&self, layout: &'l Layout) -> &'l Path {
        &layout.doc_file
    }

    fn render_to(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        let rule = "=".repeat(20);
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "\tVECTOR TYPES")?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        writeln!(out, "Total types: {}", ctx.entries.len())?;
        writeln!(out)?;

        let original_width = ctx
            .pairs()
            .map(|p| p.original.chars().count())
            .chain([ORIGINAL_HEADING.len()])
            .max()
            .unwrap_or(0)
            + 2;
        let alias_width = ctx
            .pairs()
            .map(|p| p.alias.chars().count())
            .chain([ALIAS_HEADING.len()])
            .max()
            .unwrap_or(0);

        writeln!(out, "{ORIGINAL_HEADING:<original_width$} | {ALIAS_HEADING}")?;
        writeln!(
            out,
            "{}-+-{}",
            "-".repeat(original_width),
            "-".repeat(alias_width)
        )?;
        for pair in ctx.pairs() {
            writeln!(out, "{:<original_width$} | {}", pair.original, pair.alias)?;
        }
        Ok(())
    }
}
