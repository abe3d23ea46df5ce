//! Generated artifacts. Each artifact renders the ordered type list into one
//! file; [`artifacts`] returns them in the order they are written.

pub mod aliases;
pub mod debug_log;
pub mod decl;
pub mod doc;
pub mod implementation;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{GeneratorConfig, Layout};
use crate::error::GenError;
use crate::pipeline::{TypeAliasPair, TypeEntry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inputs shared by every artifact.
pub struct EmitContext<'a> {
    pub entries: &'a [TypeEntry],
    pub config: &'a GeneratorConfig,
    pub fingerprint: &'a str,
}

impl<'a> EmitContext<'a> {
    pub fn pairs(&self) -> impl Iterator<Item = &'a TypeAliasPair> + 'a {
        self.entries.iter().map(|e| &e.pair)
    }
}

pub trait Artifact {
    /// Short label for progress output.
    fn label(&self) -> &'static str;

    fn path<'l>(&self, layout: &'l Layout) -> &'l Path;

    fn render_to(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> io::Result<()>;

    fn render(&self, ctx: &EmitContext<'_>) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render_to(ctx, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

pub fn artifacts() -> Vec<Box<dyn Artifact>> {
    vec![
        Box::new(aliases::AliasesHeader),
        Box::new(decl::DeclHeader),
        Box::new(implementation::ImplSource),
        Box::new(doc::TypesDoc),
        Box::new(debug_log::DebugLog),
    ]
}

/// Render `artifact` and write it to its layout path.
pub fn write_artifact(
    artifact: &dyn Artifact,
    ctx: &EmitContext<'_>,
    layout: &Layout,
) -> Result<(), GenError> {
    let path = artifact.path(layout);
    fs::write(path, artifact.render(ctx)).map_err(|source| GenError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(artifact = artifact.label(), path = %path.display(), "artifact written");
    Ok(())
}

/// `vector_aliases.h` → `__VECTOR_ALIASES_H__`.
pub fn include_guard(file_name: &str) -> String {
    let stem: String = file_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("__{stem}__")
}

/// Doxygen block at the top of every generated C file.
pub(crate) struct FileComment<'a> {
    pub file: &'a str,
    pub brief: &'a [&'a str],
    pub details: &'a [String],
    pub see: &'a [&'a str],
}

const DO_NOT_EDIT: &str = " * @warning     DO NOT EDIT THIS FILE MANUALLY.\n *              Any manual changes will be lost on regeneration.";

pub(crate) fn write_file_comment(
    out: &mut dyn Write,
    comment: &FileComment<'_>,
    ctx: &EmitContext<'_>,
) -> io::Result<()> {
    writeln!(out, "/**")?;
    writeln!(out, " * @file        {}", comment.file)?;
    for (i, line) in comment.brief.iter().enumerate() {
        let tag = if i == 0 { "@brief      " } else { "            " };
        writeln!(out, " * {tag} {line}")?;
    }
    writeln!(out, " * @author      Generated by vecgen")?;
    writeln!(out, " *")?;
    writeln!(out, " * @version     {VERSION}")?;
    writeln!(out, " * @fingerprint {}", ctx.fingerprint)?;
    writeln!(out, " *")?;
    for (i, line) in comment.details.iter().enumerate() {
        let tag = if i == 0 { "@details    " } else { "            " };
        writeln!(out, " * {tag} {line}")?;
    }
    writeln!(out, " *")?;
    writeln!(out, " * @note        This file is automatically generated.")?;
    writeln!(out, "{DO_NOT_EDIT}")?;
    writeln!(out, " *")?;
    for see in comment.see {
        writeln!(out, " * @see         {see}")?;
    }
    writeln!(out, " */")?;
    writeln!(out)
}

/// Save any outer `T` before the per-type blocks.
pub(crate) fn write_save_t(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "#ifdef T")?;
    writeln!(out, "#define _OLD_T T")?;
    writeln!(out, "#undef T")?;
    writeln!(out, "#endif")?;
    writeln!(out)
}

pub(crate) fn write_restore_t(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "#ifdef _OLD_T")?;
    writeln!(out, "#define T _OLD_T")?;
    writeln!(out, "#undef _OLD_T")?;
    writeln!(out, "#endif")
}

/// One `#define T` / `#include` / `#undef T` block per pair.
pub(crate) fn write_instantiations(
    out: &mut dyn Write,
    ctx: &EmitContext<'_>,
    template: &str,
) -> io::Result<()> {
    for pair in ctx.pairs() {
        writeln!(out, "/* Type: {} -> {} */", pair.original, pair.alias)?;
        writeln!(out, "#define T {}", pair.alias)?;
        writeln!(out, "#include \"{template}\"")?;
        writeln!(out, "#undef T")?;
        writeln!(out)?;
    }
    Ok(())
}

pub(crate) const OPERATION_SUMMARY: [&str; 5] = [
    "- Memory management (create/destroy)",
    "- Element access (at, front, back)",
    "- Modifiers (push, pop, insert, erase)",
    "- Capacity operations (reserve, resize)",
    "- Iterators (begin, end)",
];
