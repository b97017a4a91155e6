//! vue-config-gen CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vue_config_gen::catalog::load_catalog;
use vue_config_gen::cli::Cli;
use vue_config_gen::compose::generate;
use vue_config_gen::emit::{CheckSink, EmissionSink, FsSink};
use vue_config_gen::resolve::InheritanceResolver;
use vue_config_gen::Result;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vue_config_gen=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("vue_config_gen=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<bool> {
    let catalog = load_catalog(&cli.catalog)?;
    let inheritance = InheritanceResolver::new();
    let documents = generate(&catalog, &inheritance)?;

    if cli.check {
        let mut sink = CheckSink::new(&cli.legacy_dir, &cli.flat_dir);
        sink.persist(&documents)?;
        for path in sink.stale() {
            eprintln!("stale: {}", path.display());
        }
        if !sink.is_clean() {
            eprintln!(
                "{} file(s) out of date; re-run without --check to regenerate",
                sink.stale().len()
            );
            return Ok(false);
        }
        if !cli.quiet {
            println!("{} config file(s) up to date", documents.len());
        }
    } else {
        FsSink::new(&cli.legacy_dir, &cli.flat_dir).persist(&documents)?;
        if !cli.quiet {
            println!("wrote {} config file(s)", documents.len());
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vue-config-gen starting with args: {:?}", cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
