use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use hirelens_common::observability::{init_logging, LogConfig};
use hirelens_config::{HireLensConfig, HireLensConfigLoader};
use hirelens_web::query::SearchScope;
use pipeline::Pipeline;

mod pipeline;
mod report;

/// Company research with a hiring lens: search, fetch, summarize.
#[derive(Debug, Parser)]
#[command(name = "hirelens", version, about)]
struct Cli {
    /// Company to research
    company: String,

    /// Location/country filter (e.g. "USA", "India", or "all")
    #[arg(short, long, default_value = "all")]
    location: String,

    /// Search globally, ignoring the location filter
    #[arg(long)]
    global: bool,

    /// Override the configured number of search results
    #[arg(short = 'n', long)]
    results: Option<usize>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "hirelens.yaml")]
    config: PathBuf,

    /// Mirror logs to stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.company.trim().is_empty() {
        bail!("company name must not be empty");
    }

    // 1) Load config (env wins)
    let cfg: HireLensConfig = HireLensConfigLoader::new().with_file(&cli.config).load()?;

    init_logging(LogConfig {
        emit_stderr: cli.verbose,
        ..LogConfig::default()
    })?;

    let scope = if cli.global {
        SearchScope::Global
    } else {
        SearchScope::Local
    };

    let mut pipeline = Pipeline::from_config(&cfg).await?;
    if let Some(n) = cli.results {
        pipeline = pipeline.with_result_count(n);
    }

    let report = pipeline.run(&cli.company, &cli.location, scope).await?;
    print!("{}", report::render(&report));
    Ok(())
}
