/// gofile - command-line client for gofile.io
use clap::Parser;
use gofile_cli::{CliConfig, Command};
use gofile_client::GofileClient;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gofile")]
#[command(about = "Upload and manage files on gofile.io", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./gofile.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Account token, overriding the configuration
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gofile=info,gofile_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(token) = cli.token {
        config.token = Some(token);
    }
    if !cli.command.needs_token() {
        // Construction without a token provisions the new account
        config.token = None;
    }

    let client = GofileClient::new(config.into_client_config()).await?;
    debug!(api = %client.api_url(), "Client ready");

    if let Some(output) = cli.command.execute(&client).await? {
        match output {
            serde_json::Value::String(text) => println!("{}", text),
            value => println!("{}", serde_json::to_string_pretty(&value)?),
        }
    }

    Ok(())
}
