use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsrelay::app::AppContext;
use newsrelay::cli::{commands, Cli, Commands};
use newsrelay::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command() {
        Commands::Run { dry_run } => {
            let ctx = AppContext::new(config, dry_run)?;
            commands::run(&ctx, dry_run).await?;
        }
        Commands::Preview => {
            let ctx = AppContext::new(config, true)?;
            commands::preview(&ctx).await?;
        }
        Commands::State => {
            let ctx = AppContext::new(config, true)?;
            commands::show_state(&ctx).await?;
        }
    }

    Ok(())
}
