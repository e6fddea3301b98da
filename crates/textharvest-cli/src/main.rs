//! textharvest CLI

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use textharvest::{HarvestConfig, Harvester, LogSink, RunEvent, RunStatus, parse_pattern_list};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textharvest")]
#[command(version, about = "Flatten a directory tree into a single text file", long_about = None)]
struct Cli {
    /// Folder to harvest
    root: PathBuf,

    /// Folder the output file is written to (defaults to ROOT)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name globs to skip (comma-separated, e.g. "*.log,*.tmp")
    #[arg(long, value_name = "GLOBS")]
    ignore_files: Option<String>,

    /// Directory names to skip (comma-separated, e.g. "node_modules,dist")
    #[arg(long, value_name = "DIRS")]
    ignore_dirs: Option<String>,

    /// Config file (.toml, .yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Prints run events to stdout, one line at a time.
struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn record(&self, event: &RunEvent) {
        for line in event.lines() {
            println!("{}", line);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<HarvestConfig> {
    let mut config = match &cli.config {
        Some(path) => HarvestConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => HarvestConfig::discover()
            .context("Failed to load discovered config")?
            .unwrap_or_default(),
    };

    if let Some(raw) = &cli.ignore_files {
        config = config.with_file_exclude_globs(parse_pattern_list(raw));
    }
    if let Some(raw) = &cli.ignore_dirs {
        config = config.with_dir_excludes(parse_pattern_list(raw));
    }
    if cli.output_dir.is_some() {
        config = config.with_output_dir(cli.output_dir.clone());
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "Resolved configuration");

    let summary = Harvester::new(config)
        .with_sink(Arc::new(ConsoleSink))
        .run(&cli.root)
        .with_context(|| format!("Failed to harvest {}", cli.root.display()))?;

    if summary.status == RunStatus::Cancelled {
        anyhow::bail!("Run cancelled after {} files", summary.attempted());
    }

    Ok(())
}
