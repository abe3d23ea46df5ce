pub mod cli;
pub mod config;
pub mod ctype;
pub mod emit;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod report;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use cli::Args;
use config::layout::{absolute_src_dir, project_root_for};
use config::{Layout, load_config};
use emit::{EmitContext, artifacts, write_artifact};
use error::GenError;
use extract::{MacroScanner, collect_types};
use pipeline::{TypeEntry, build_entries, check_aliases, fingerprint};
use report::{Report, ReportStyle};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub layout: Layout,
    pub entries: Vec<TypeEntry>,
    pub fingerprint: String,
    /// Artifacts written, in write order. Empty on `--dry-run`.
    pub written: Vec<PathBuf>,
}

/// Run the generator, reporting to stdout.
pub fn run(args: &Args) -> Result<RunSummary> {
    let style = ReportStyle::from_args(&args.format, args.quiet);
    let mut report = Report::stdout(style, !args.no_color);
    run_with_report(args, &mut report)
}

/// Extract, parse, validate, then write every artifact. Nothing is created
/// on disk until the type list has been extracted and validated.
pub fn run_with_report<W: Write>(args: &Args, report: &mut Report<W>) -> Result<RunSummary> {
    let src_dir = absolute_src_dir(&args.src_dir)?;
    let project_root = project_root_for(&src_dir);
    let mut config = load_config(args.config.as_deref(), &project_root)?;
    if let Some(prefix) = &args.prefix {
        config.macro_prefix = prefix.clone();
    }
    if config.macro_prefix.is_empty() {
        anyhow::bail!("macro prefix must not be empty");
    }
    let layout = Layout::new(&src_dir, &config, args.header.as_deref());
    tracing::debug!(
        src_dir = %layout.src_dir.display(),
        project_root = %layout.project_root.display(),
        header = %layout.header.display(),
        "layout resolved"
    );

    report.banner(&layout);
    report.collecting(&layout.header);
    let scanner = MacroScanner::new(&config.macro_prefix)?;
    let types = collect_types(&layout.header, &scanner)?;

    let entries = build_entries(types, &config.alias_suffix);
    for entry in &entries {
        tracing::debug!(
            original = %entry.pair.original,
            alias = %entry.pair.alias,
            pointer_depth = entry.parsed.pointer_depth,
            qualifiers = %entry.parsed.qualifiers,
            base_type_name = %entry.parsed.base_type_name,
            "parsed type"
        );
    }
    report.found(&entries);
    check_aliases(&entries)?;
    report.aliases(&entries);

    let fingerprint = fingerprint(entries.iter().map(|e| &e.pair));

    let mut written = Vec::new();
    if args.dry_run {
        tracing::debug!("dry run, no files written");
        report.json(&entries, &fingerprint)?;
        return Ok(RunSummary {
            layout,
            entries,
            fingerprint,
            written,
        });
    }

    report.generating();
    for dir in layout.output_dirs() {
        fs::create_dir_all(dir).map_err(|source| GenError::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let ctx = EmitContext {
        entries: &entries,
        config: &config,
        fingerprint: &fingerprint,
    };
    let artifacts = artifacts();
    let total = artifacts.len();
    for (i, artifact) in artifacts.iter().enumerate() {
        let path = artifact.path(&layout);
        report.artifact(i + 1, total, path);
        write_artifact(artifact.as_ref(), &ctx, &layout)?;
        written.push(path.to_path_buf());
    }
    report.footer();
    // Only a fully written run gets a listing.
    report.json(&entries, &fingerprint)?;

    Ok(RunSummary {
        layout,
        entries,
        fingerprint,
        written,
    })
}
