pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "headline")]
#[command(about = "Read the most popular news articles", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/headline/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// API key, overriding the configured one
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the most popular articles
    List,
    /// Show the details of one article
    Show {
        /// Article id as printed by `list`
        id: i64,
    },
    /// Open an article in the browser
    Open {
        /// Article id as printed by `list`
        id: i64,
    },
}
