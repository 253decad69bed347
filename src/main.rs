use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use headline::app::AppContext;
use headline::cli::{commands, Cli, Commands};
use headline::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(api_key) = cli.api_key {
        config.api.api_key = api_key;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::List => {
            commands::list_articles(&ctx).await?;
        }
        Commands::Show { id } => {
            commands::show_article(&ctx, id).await?;
        }
        Commands::Open { id } => {
            commands::open_article(&ctx, id).await?;
        }
    }

    Ok(())
}
