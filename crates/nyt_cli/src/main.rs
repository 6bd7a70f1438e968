use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;

use nyt_client::{ApiConfig, HttpNetworkService, NytArticleRepository};
use nyt_core::{BookmarkStore, Error, PathType, Period, Result};
use nyt_feed::ArticleFeed;
use nyt_storage::JsonBookmarkStore;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// NYT API key. Falls back to the NYT_API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch the current most-popular list and print it
    List {
        /// Ranking to query: viewed or shared
        #[arg(long, default_value = "viewed")]
        path_type: PathType,
        /// Lookback window in days: 1, 7 or 30
        #[arg(long, default_value = "7")]
        period: Period,
    },
    /// Toggle the bookmark flag for an article id
    Bookmark {
        article_id: i64,
        /// Bookmark file to use
        #[arg(long, default_value = "bookmarks.json")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { path_type, period } => {
            // A missing key is a fatal startup condition, not a fetch error.
            let api_key = cli
                .api_key
                .or_else(|| std::env::var("NYT_API_KEY").ok())
                .ok_or_else(|| {
                    Error::Unknown(anyhow!("No API key: pass --api-key or set NYT_API_KEY"))
                })?;
            list_articles(api_key, path_type, period).await
        }
        Commands::Bookmark { article_id, file } => toggle_bookmark(file, article_id).await,
    }
}

async fn list_articles(api_key: String, path_type: PathType, period: Period) -> Result<()> {
    let network = Arc::new(HttpNetworkService::new());
    let repository = Arc::new(NytArticleRepository::new(network, ApiConfig::new(api_key)));

    info!("📰 Loading {} / {}", path_type.title(), period.title());
    let feed = ArticleFeed::spawn_with(repository, path_type, period);
    let mut rx = feed.subscribe();

    // The startup pair is the sole load trigger; wait for that fetch to
    // start and settle.
    let mut seen_loading = false;
    let snapshot = loop {
        {
            let snapshot = rx.borrow_and_update();
            if snapshot.is_loading {
                seen_loading = true;
            } else if seen_loading || snapshot.error_message.is_some() {
                break snapshot.clone();
            }
        }
        rx.changed()
            .await
            .map_err(|_| Error::Unknown(anyhow!("Feed worker stopped unexpectedly")))?;
    };

    if let Some(message) = snapshot.error_message {
        eprintln!("{}", message);
        std::process::exit(1);
    }

    println!("Found {} articles", snapshot.articles.len());
    for article in &snapshot.articles {
        let title = article.title.as_deref().unwrap_or("(untitled)");
        match (article.author.as_deref(), article.section.as_deref()) {
            (Some(author), Some(section)) => println!("- {} — {} [{}]", title, author, section),
            (Some(author), None) => println!("- {} — {}", title, author),
            (None, Some(section)) => println!("- {} [{}]", title, section),
            (None, None) => println!("- {}", title),
        }
    }
    Ok(())
}

async fn toggle_bookmark(file: PathBuf, article_id: i64) -> Result<()> {
    let store = JsonBookmarkStore::open(&file).await?;
    let bookmarked = !store.is_bookmarked(article_id).await?;
    store.set_bookmarked(article_id, bookmarked).await?;

    if bookmarked {
        println!("🔖 Bookmarked article {}", article_id);
    } else {
        println!("Removed bookmark for article {}", article_id);
    }
    Ok(())
}
