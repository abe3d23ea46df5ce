use std::io::{self, Write};
use std::path::Path;

use super::{
    Artifact, EmitContext, FileComment, OPERATION_SUMMARY, include_guard, write_file_comment,
    write_instantiations, write_restore_t, write_save_t,
};
use crate::config::Layout;

/// Includes the type-generic template header once per alias.
pub struct DeclHeader;

impl Artifact for DeclHeader {
    fn label(&self) -> &'static str {
        "declarations"
    }

    fn path<'l>(&self, layout: &'l Layout) -> &'l Path {
        &layout.decl_file
    }

    fn render_to(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        let files = &ctx.config.files;
        let mut details = vec![format!("Declaration for {} vector types:", ctx.entries.len())];
        details.extend(OPERATION_SUMMARY.iter().map(|s| s.to_string()));
        write_file_comment(
            out,
            &FileComment {
                file: &files.decl,
                brief: &[
                    "Vector declaration",
                    "This file contains the declarations of all vector operations",
                    "for each type defined in the system.",
                ],
                details: &details,
                see: &[ctx.config.template_header.as_str(), files.aliases.as_str()],
            },
            ctx,
        )?;

        let guard = include_guard(&files.decl);
        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out)?;
        writeln!(out, "#include \"{}\"", files.aliases)?;
        writeln!(out)?;

        write_save_t(out)?;
        write_instantiations(out, ctx, &ctx.config.template_header)?;
        write_restore_t(out)?;
        writeln!(out)?;
        writeln!(out, "#endif // {guard}")
    }
}
