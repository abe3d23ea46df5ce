use std::io::{self, Write};
use std::path::Path;

use super::{Artifact, EmitContext, FileComment, include_guard, write_file_comment};
use crate::config::Layout;

/// `typedef {original} {alias};` for every type.
pub struct AliasesHeader;

impl Artifact for AliasesHeader {
    fn label(&self) -> &'static str {
        "aliases"
    }

    fn path<'l>(&self, layout: &'l Layout) -> &'l Path {
        &layout.aliases_file
    }

    fn render_to(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        let files = &ctx.config.files;
        let details = [
            "This file provides typedefs that map original C types".to_string(),
            "to simplified type names used by the vector library.".to_string(),
            "These typedefs are used as T parameters when including".to_string(),
            format!(
                "{} and {}.",
                ctx.config.template_header, ctx.config.template_source
            ),
        ];
        write_file_comment(
            out,
            &FileComment {
                file: &files.aliases,
                brief: &["Intermediate typedefs for vector types"],
                details: &details,
                see: &[
                    ctx.config.template_header.as_str(),
                    files.decl.as_str(),
                    files.impl_source.as_str(),
                ],
            },
            ctx,
        )?;

        let guard = include_guard(&files.aliases);
        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out)?;

        for pair in ctx.pairs() {
            writeln!(out, "/* Type: {} */", pair.original)?;
            writeln!(out, "typedef {} {};", pair.original, pair.alias)?;
            writeln!(out)?;
        }

        writeln!(out, "#endif // {guard}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::emit::test_support::entries;

    #[test]
    fn typedef_per_type() {
        let entries = entries(&["unsigned long long", "struct Node *"]);
        let config = GeneratorConfig::default();
        let ctx = EmitContext {
            entries: &entries,
            config: &config,
            fingerprint: "feedfacefeedface",
        };
        let text = AliasesHeader.render(&ctx);
        assert!(text.starts_with("/**\n * @file        vector_aliases.h\n"));
        assert!(text.contains(" * @fingerprint feedfacefeedface\n"));
        assert!(text.contains("#ifndef __VECTOR_ALIASES_H__\n#define __VECTOR_ALIASES_H__\n"));
        assert!(text.contains(
            "/* Type: unsigned long long */\ntypedef unsigned long long ullint_t;\n"
        ));
        assert!(text.contains("/* Type: struct Node * */\ntypedef struct Node * Node_ptr_t;\n"));
        assert!(text.ends_with("#endif // __VECTOR_ALIASES_H__\n"));
    }
}
