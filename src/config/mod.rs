pub mod layout;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub use layout::Layout;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "vecgen.yml";

/// Generator settings from `vecgen.yml`. Every key is optional and falls
/// back to the layout the C vector library ships with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Header scanned for type macros, relative to the source directory.
    pub header: String,
    pub macro_prefix: String,
    /// Appended to every synthesized alias.
    pub alias_suffix: String,
    /// Relative to the source directory.
    pub gen_dir: String,
    /// Relative to the source directory.
    pub log_dir: String,
    /// Relative to the project root.
    pub doc_dir: String,
    pub template_header: String,
    pub template_source: String,
    pub files: OutputFiles,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputFiles {
    pub aliases: String,
    pub decl: String,
    pub impl_source: String,
    pub doc: String,
    pub debug: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header: "vector.h".to_string(),
            macro_prefix: "VECTOR_INITIALIZE_".to_string(),
            alias_suffix: "_t".to_string(),
            gen_dir: "gen".to_string(),
            log_dir: "log".to_string(),
            doc_dir: "doc".to_string(),
            template_header: "vector_template.h".to_string(),
            template_source: "vector_template.c".to_string(),
            files: OutputFiles::default(),
        }
    }
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            aliases: "vector_aliases.h".to_string(),
            decl: "vector_decl.h".to_string(),
            impl_source: "vector_impl.c".to_string(),
            doc: "vector_types.txt".to_string(),
            debug: "vector_gen.txt".to_string(),
        }
    }
}

/// Load config from the given path, or look for `vecgen.yml` in the
/// project root. Returns defaults if no explicit path was given and the
/// default file doesn't exist.
pub fn load_config(path: Option<&Path>, project_root: &Path) -> Result<GeneratorConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => project_root.join(CONFIG_FILE),
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(GeneratorConfig::default());
    }

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "config loaded");
    Ok(config)
}

fn parse_config(contents: &str) -> Result<GeneratorConfig> {
    if contents.trim().is_empty() {
        return Ok(GeneratorConfig::default());
    }
    let config: GeneratorConfig = serde_yml::from_str(contents)?;
    if config.macro_prefix.is_empty() {
        anyhow::bail!("macro_prefix must not be empty");
    }
    if !is_alias_suffix(&config.alias_suffix) {
        anyhow::bail!(
            "alias_suffix {:?} must use only [A-Za-z0-9_], without a doubled or trailing underscore",
            config.alias_suffix
        );
    }
    Ok(config)
}

/// Whether `suffix` keeps every synthesized alias a clean C identifier once
/// appended. Aliases never end in `_`, so one leading underscore is fine.
fn is_alias_suffix(suffix: &str) -> bool {
    suffix
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        && !suffix.contains("__")
        && !suffix.ends_with('_')
}
