//! CLI entry point for needledrop

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "needledrop")]
#[command(version)]
#[command(about = "Markdown-backed blog and show archive engine", long_about = None)]
struct Cli {
    /// Set the site base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (posts, shows, tags)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Emit JSON instead of a human summary
        #[arg(long)]
        json: bool,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "needledrop=debug,info"
    } else {
        "needledrop=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = needledrop::Site::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type, json } => {
            needledrop::commands::list::run(&site, &r#type, json)?;
        }

        Commands::Serve { port, ip } => {
            tracing::info!("Starting API server at http://{}:{}", ip, port);
            needledrop::server::start(&site, &ip, port).await?;
        }
    }

    Ok(())
}
