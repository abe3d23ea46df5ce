use std::io::{self, Write};
use std::path::Path;

use super::{Artifact, EmitContext, VERSION};
use crate::config::Layout;

/// Field-by-field breakdown of every parsed type.
pub struct DebugLog;

impl Artifact for DebugLog {
    fn label(&self) -> &'static str {
        "debug"
    }

    fn path<'l>(&self, layout: &'l Layout) -> &'l Path {
        &layout.debug_file
    }

    fn render_to(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Vector Generator Debug Log")?;
        writeln!(out, "Version: {VERSION}")?;
        writeln!(out, "Fingerprint: {}", ctx.fingerprint)?;
        writeln!(out, "Types found: {}", ctx.entries.len())?;
        writeln!(out)?;

        for entry in ctx.entries {
            let parsed = &entry.parsed;
            writeln!(out, "Original: {}", entry.pair.original)?;
            writeln!(out, "  Alias: {}", entry.pair.alias)?;
            writeln!(
                out,
                "  Source: {} (line {})",
                entry.source.macro_name, entry.source.line
            )?;
            writeln!(out, "  Pointers: {}", parsed.pointer_depth)?;
            writeln!(out, "  Qualifiers: {}", parsed.qualifiers)?;
            writeln!(out, "  Type name: {}", parsed.base_type_name)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
