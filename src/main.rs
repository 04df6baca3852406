//! CLI entry point for guild-press

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "guild-press")]
#[command(version)]
#[command(about = "Inspect the CMS export of a static blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// List site information
    List {
        /// Type of content to list (post, author, category, page, route)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show posts similar to a post
    Related {
        /// Slug of the post
        slug: String,

        /// Number of posts to show (defaults to similar_posts_limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show word count and reading time of a post
    Stats {
        /// Slug of the post
        slug: String,
    },

    /// Print the slug of some text
    Slugify {
        /// Text to convert
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "guild_press=debug,info"
    } else {
        "guild_press=info"
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
        Commands::List { r#type, json } => {
            let site = guild_press::Site::new(&base_dir)?;
            guild_press::commands::list::run(&site, &r#type, json)?;
        }

        Commands::Related { slug, limit, json } => {
            let site = guild_press::Site::new(&base_dir)?;
            guild_press::commands::related::run(&site, &slug, limit, json)?;
        }

        Commands::Stats { slug } => {
            let site = guild_press::Site::new(&base_dir)?;
            guild_press::commands::stats::run(&site, &slug)?;
        }

        Commands::Slugify { text } => {
            println!("{}", guild_press::slugify(&text.join(" ")));
        }

        Commands::Version => {
            println!("guild-press version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
