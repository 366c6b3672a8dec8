mod commands;
mod gateway;
mod ingress;

use clap::{Parser, Subcommand};
use remora_channels::line::LineChannel;
use remora_core::config;
use remora_store::Store;
use std::sync::Arc;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "remora",
    version,
    about = "Remora — group-chat reminder bot with a durable scheduler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the reminder bot.
    Start,
    /// Check configuration and channel readiness.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let cfg = config::load(&cli.config)?;

            // Reject a malformed offset at startup rather than on the
            // first reminder command.
            cfg.bot.offset()?;

            let line = match cfg.channel.line {
                Some(ref line) if line.enabled => line,
                _ => anyhow::bail!("LINE channel is not enabled. Enable it in config.toml."),
            };
            if line.channel_access_token.is_empty() || line.channel_secret.is_empty() {
                anyhow::bail!(
                    "LINE is enabled but channel_access_token or channel_secret is empty. \
                     Set them in config.toml."
                );
            }
            if cfg.bot.owner_id.is_empty() {
                warn!("bot.owner_id is empty; admin commands are disabled");
            }

            let channel = LineChannel::new(line.clone());
            let store = Store::new(&cfg.store).await?;

            println!("Remora — Starting reminder bot...");
            let gw = gateway::Gateway::new(
                store,
                Arc::new(channel),
                cfg.bot.clone(),
                cfg.server.clone(),
            );
            Arc::new(gw).run().await?;
        }
        Commands::Status => {
            let cfg = config::load(&cli.config)?;
            println!("Remora — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Store: {}", cfg.store.db_path);
            println!("Trigger: {}", cfg.bot.trigger);
            println!("Timezone: {}", cfg.bot.timezone_offset);
            println!(
                "Owner: {}",
                if cfg.bot.owner_id.is_empty() {
                    "not set"
                } else {
                    "configured"
                }
            );
            println!();

            if let Some(ref line) = cfg.channel.line {
                println!(
                    "  line: {}",
                    if line.enabled
                        && !line.channel_access_token.is_empty()
                        && !line.channel_secret.is_empty()
                    {
                        "configured"
                    } else if line.enabled {
                        "enabled but missing credentials"
                    } else {
                        "disabled"
                    }
                );
            } else {
                println!("  line: not configured");
            }
            println!(
                "  server: {}:{}",
                cfg.server.host, cfg.server.port
            );
        }
    }

    Ok(())
}
