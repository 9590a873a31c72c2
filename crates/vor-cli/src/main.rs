mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vor-cli")]
#[command(about = "VoicesOfReddit command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog by name, brand, category, or description.
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List the most-mentioned products.
    Trending,
    /// Score a piece of text with the sentiment lexicon.
    Sentiment { text: String },
    /// Fetch live Reddit discussions for a product query.
    Reddit {
        query: String,
        /// Restrict the search to one subreddit.
        #[arg(long)]
        subreddit: Option<String>,
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },
    /// Hot posts across review subreddits, ranked by score.
    Hot {
        /// Defaults to the built-in review subreddits.
        #[arg(long = "subreddit")]
        subreddits: Vec<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = vor_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Search { query, limit } => commands::search(&config, &query, limit)?,
        Commands::Trending => commands::trending(&config)?,
        Commands::Sentiment { text } => commands::sentiment(&config, &text)?,
        Commands::Reddit {
            query,
            subreddit,
            limit,
        } => commands::reddit(&config, &query, subreddit.as_deref(), limit).await?,
        Commands::Hot { subreddits, limit } => commands::hot(&config, &subreddits, limit).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
