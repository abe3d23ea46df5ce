use std::io::{self, Write};
use std::path::Path;

use super::{
    Artifact, EmitContext, FileComment, OPERATION_SUMMARY, write_file_comment,
    write_instantiations, write_restore_t, write_save_t,
};
use crate::config::Layout;

/// Includes the type-generic template source once per alias.
pub struct ImplSource;

impl Artifact for ImplSource {
    fn label(&self) -> &'static str {
        "implementation"
    }

    fn path<'l>(&self, layout: &'l Layout) -> &'l Path {
        &layout.impl_file
    }

    fn render_to(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        let files = &ctx.config.files;
        let mut details = vec![format!(
            "Implementations for {} vector types:",
            ctx.entries.len()
        )];
        details.extend(OPERATION_SUMMARY.iter().map(|s| s.to_string()));
        write_file_comment(
            out,
            &FileComment {
                file: &files.impl_source,
                brief: &[
                    "Vector implementations",
                    "This file contains the implementations of all vector operations",
                    "for each type defined in the system.",
                ],
                details: &details,
                see: &[ctx.config.template_source.as_str(), files.decl.as_str()],
            },
            ctx,
        )?;

        writeln!(out, "#include \"{}\"", files.decl)?;
        writeln!(out)?;
        write_save_t(out)?;
        write_instantiations(out, ctx, &ctx.config.template_source)?;
        write_restore_t(out)
    }
}
