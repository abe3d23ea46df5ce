use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "vecgen", version, about = "Vector type generator")]
pub struct Args {
    /// Source directory holding the initialization header
    #[arg(long, value_name = "DIR", default_value = "src")]
    pub src_dir: PathBuf,

    /// Path to configuration file [default: <project>/vecgen.yml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Header to scan instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub header: Option<PathBuf>,

    /// Macro name prefix to scan for instead of the configured one
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Report format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Parse and report aliases without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress the console report
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
