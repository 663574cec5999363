use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use gridlock_version::config::{Config, LOG_FILE_NAME, data_dir};
use gridlock_version::decoder::{TOTAL_SYSTEM, VersionToken, system_name};
use gridlock_version::remote::{HttpVersionSource, LatestVersion, get_latest_version};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "GRIDLOCK_VERSION_LOG";

#[derive(Parser)]
#[command(name = "gridlock-version")]
#[command(version, about = "Decode and fetch Gridlock version tokens")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the version endpoint base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a version token
    Decode {
        token: String,

        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the latest version token for a subsystem
    Latest {
        /// Subsystem code
        #[arg(long, default_value_t = TOTAL_SYSTEM)]
        system: char,

        /// Print the token as published instead of decoding it
        #[arg(long)]
        raw: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file)?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match cli.command {
        Command::Decode { token, json } => {
            let token = VersionToken::parse(&token)
                .with_context(|| format!("failed to decode {token:?}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&token)?);
            } else {
                println!("{token}");
            }
            Ok(())
        }
        Command::Latest { system, raw, json } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(latest(&config, system, raw, json)),
    }
}

async fn latest(config: &Config, system: char, raw: bool, json: bool) -> anyhow::Result<()> {
    if system_name(system).is_none() {
        warn!("Requesting unknown system code {:?}", system);
    }

    let source = HttpVersionSource::from_config(config)?;
    let latest = get_latest_version(&source, system, !raw)
        .await
        .with_context(|| format!("failed to fetch latest version from {}", config.base_url))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&latest)?);
    } else {
        match latest {
            LatestVersion::Decoded(token) => println!("{token}"),
            LatestVersion::Raw(token) => println!("{token}"),
        }
    }
    Ok(())
}

fn init_logging(log_file: bool) -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, guard) = if log_file {
        let dir = data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
    } else {
        tracing_appender::non_blocking(std::io::stderr())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!log_file)
        .init();

    Ok(guard)
}
