use std::process;

use clap::Parser;
use colored::Colorize;

use vecgen::cli::Args;
use vecgen::error::{USAGE_EXIT_CODE, exit_code_for};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(USAGE_EXIT_CODE);
        }
    };
    if args.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = init_tracing(args.quiet, args.debug) {
        eprintln!("warning: {e:#}");
    }

    match vecgen::run(&args) {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(exit_code_for(&e));
        }
    }
}

fn init_tracing(quiet: bool, debug: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if debug {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VECGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
