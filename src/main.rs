use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use domain_checker::{read_input, read_input_from_file, write_results, DomainChecker, OutputFormat};

/// Report, for each query domain, whether it is forbidden (`Bad`) or not (`Good`).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Read input from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) => read_input_from_file(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?,
        None => read_input(io::stdin().lock()).context("failed to read input from stdin")?,
    };

    let checker = DomainChecker::new(input.forbidden);
    let results = checker.check_all(input.queries);
    info!(
        retained = checker.len(),
        queries = results.len(),
        forbidden = results.iter().filter(|r| r.verdict.is_forbidden()).count(),
        "checked domains"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_results(&mut out, &results, cli.format).context("failed to write verdicts")?;

    Ok(())
}
