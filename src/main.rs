// src/main.rs
use std::path::{Path, PathBuf};
use std::process::exit;
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, error};

use jobhunt::config::{self, Config};
use jobhunt::pipeline;
use jobhunt::sourcing::{self, HttpProber, ResolvedBook, TargetResolver};
use jobhunt::utils::http::HttpClient;

#[derive(Parser)]
#[command(name = "jobhunt")]
#[command(about = "A personal job search automation pipeline")]
struct Args {
    #[command(subcommand)]
    command: Cli,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Cli {
    /// Resolve the target list to confirmed provider/handle pairs
    Resolve {
        #[arg(short, long, help = "Path to the targets document")]
        targets: PathBuf,

        #[arg(short, long, help = "Write JSON output here instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Resolve targets and fetch their open job postings
    Jobs {
        #[arg(short, long, help = "Path to the targets document")]
        targets: PathBuf,

        #[arg(short, long, help = "Write JSON output here instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Initialize config
    Init {
        #[arg(short, long, help = "Force overwrite existing configuration")]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let args = Args::parse();

    if args.verbose {
        info!("Verbose mode enabled");
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            exit(1);
        }
    };

    match args.command {
        Cli::Resolve { targets, output } => {
            let resolved = resolve_targets(&config, &targets).await?;
            write_output(&resolved, output.as_deref())?;
        }
        Cli::Jobs { targets, output } => {
            let resolved = resolve_targets(&config, &targets).await?;

            let client = HttpClient::new(
                Some(config.global.user_agent.clone()),
                Some(config.fetch.timeout_secs),
            )?;
            let postings = pipeline::collect_postings(&client, &resolved).await;
            write_output(&postings, output.as_deref())?;
        }
        Cli::Init { force } => {
            let path = config::loader::init_config(force)?;
            println!("Configuration initialized at {}", path.display());
        }
    }

    Ok(())
}

async fn resolve_targets(config: &Config, targets_path: &Path) -> Result<ResolvedBook> {
    let book = sourcing::load_targets(targets_path)?;

    let prober = HttpProber::new(Some(config.global.user_agent.clone()), &config.probe)?;
    let resolver = TargetResolver::new(prober, config.probe.max_concurrent);

    Ok(resolver.resolve(book).await)
}

fn write_output<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote output to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
