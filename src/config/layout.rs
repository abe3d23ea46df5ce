use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::GeneratorConfig;

/// Resolved input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub src_dir: PathBuf,
    pub project_root: PathBuf,
    pub header: PathBuf,
    pub gen_dir: PathBuf,
    pub log_dir: PathBuf,
    pub doc_dir: PathBuf,
    pub aliases_file: PathBuf,
    pub decl_file: PathBuf,
    pub impl_file: PathBuf,
    pub doc_file: PathBuf,
    pub debug_file: PathBuf,
}

/// Absolute form of the source directory. Does not require it to exist.
pub fn absolute_src_dir(src_dir: &Path) -> Result<PathBuf> {
    std::path::absolute(src_dir)
        .with_context(|| format!("cannot resolve source directory {}", src_dir.display()))
}

/// The project root for a source directory: its parent when the directory
/// is literally named `src`, otherwise its grandparent.
pub fn project_root_for(src_dir: &Path) -> PathBuf {
    let parent = src_dir.parent().unwrap_or(src_dir);
    if src_dir.file_name().is_some_and(|name| name == "src") {
        parent.to_path_buf()
    } else {
        parent.parent().unwrap_or(parent).to_path_buf()
    }
}

impl Layout {
    pub fn new(src_dir: &Path, config: &GeneratorConfig, header_override: Option<&Path>) -> Self {
        let project_root = project_root_for(src_dir);
        let header = match header_override {
            Some(path) => path.to_path_buf(),
            None => src_dir.join(&config.header),
        };
        let gen_dir = src_dir.join(&config.gen_dir);
        let log_dir = src_dir.join(&config.log_dir);
        let doc_dir = project_root.join(&config.doc_dir);

        Self {
            aliases_file: gen_dir.join(&config.files.aliases),
            decl_file: gen_dir.join(&config.files.decl),
            impl_file: gen_dir.join(&config.files.impl_source),
            doc_file: doc_dir.join(&config.files.doc),
            debug_file: log_dir.join(&config.files.debug),
            src_dir: src_dir.to_path_buf(),
            project_root,
            header,
            gen_dir,
            log_dir,
            doc_dir,
        }
    }

    /// Directories that must exist before any artifact is written.
    pub fn output_dirs(&self) -> [&Path; 3] {
        [&self.gen_dir, &self.log_dir, &self.doc_dir]
    }
}
