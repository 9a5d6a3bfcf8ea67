/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Pretty-printed JSON response of one Kalshi API call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kalshi_trade_adapter::Method;
use kalshi_trade_cli::{CliConfig, Command, execute};

#[derive(Parser, Debug)]
#[command(name = "kalshi-trade", version, about = "Signed command-line client for the Kalshi trade API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Load the config and key, sign a probe request, then exit without network access
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting kalshi-trade"
    );

    let config = CliConfig::from_file(&args.config_path).context("load config")?;
    let client = config.build_client()?;
    info!(base_url = client.base_url(), "configuration loaded");

    if args.dry_run {
        client
            .signer()
            .sign(&Method::GET, "/exchange/status")
            .context("sign probe request")?;
        info!("dry-run requested; configuration and key validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a subcommand is required unless --dry-run is given")?;
    let response = execute(&client, &command).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
