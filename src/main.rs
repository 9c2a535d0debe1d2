//! vault-press CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vault_press::content::ArticleFilter;

#[derive(Parser)]
#[command(name = "vault-press")]
#[command(version)]
#[command(about = "Publish knowledge-base notes as blog articles", long_about = None)]
struct Cli {
    /// Set the vault directory (defaults to current directory)
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
    /// List vault information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (article, tag)
        #[arg(default_value = "article")]
        r#type: String,

        /// Only show articles with any of these tags
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Only show articles whose title or content contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Render an article to HTML
    #[command(alias = "r")]
    Render {
        /// Slug of the article
        slug: String,

        /// List the article's attachments instead of rendering it
        #[arg(long)]
        attachments: bool,
    },

    /// Export all articles as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "vault_press=debug,info"
    } else {
        "vault_press=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            tags,
            search,
        } => {
            let vault = vault_press::Vault::new(&base_dir)?;
            let filter = ArticleFilter { tags, search };
            vault_press::commands::list::run(&vault, &r#type, &filter).await?;
        }

        Commands::Render { slug, attachments } => {
            let vault = vault_press::Vault::new(&base_dir)?;
            tracing::debug!("Rendering article: {}", slug);
            vault_press::commands::render::run(&vault, &slug, attachments).await?;
        }

        Commands::Export { output } => {
            let vault = vault_press::Vault::new(&base_dir)?;
            vault_press::commands::export::run(&vault, output.as_deref()).await?;
        }

        Commands::Version => {
            println!("vault-press version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
