use serde_json::{json, Value};
use vor_catalog::Catalog;
use vor_core::AppConfig;
use vor_sentiment::{product_label, Lexicon, RedditClient, RedditConfig, PRODUCT_SUBREDDITS};

fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    Ok(Catalog::load(config.catalog_path.as_deref())?)
}

fn load_lexicon(config: &AppConfig) -> anyhow::Result<Lexicon> {
    match &config.lexicon_path {
        Some(path) => Ok(Lexicon::from_yaml_file(path)?),
        None => Ok(Lexicon::default()),
    }
}

pub(crate) fn search(config: &AppConfig, query: &str, limit: usize) -> anyhow::Result<Value> {
    let catalog = load_catalog(config)?;
    let products: Vec<_> = catalog.search(query).into_iter().take(limit).collect();
    Ok(json!({
        "products": products,
        "total": products.len(),
        "query": query,
    }))
}

pub(crate) fn trending(config: &AppConfig) -> anyhow::Result<Value> {
    let catalog = load_catalog(config)?;
    let products = catalog.trending();
    let labels: Vec<_> = products.iter().copied().map(product_label).collect();
    Ok(json!({
        "products": products,
        "sentimentLabels": labels,
        "total": products.len(),
    }))
}

pub(crate) fn sentiment(config: &AppConfig, text: &str) -> anyhow::Result<Value> {
    let lexicon = load_lexicon(config)?;
    Ok(serde_json::to_value(lexicon.analyze(text))?)
}

pub(crate) async fn reddit(
    config: &AppConfig,
    query: &str,
    subreddit: Option<&str>,
    limit: usize,
) -> anyhow::Result<Value> {
    let client = RedditClient::new(&RedditConfig::from_app_config(config))?;
    let items = client.discussions_for(query, subreddit, limit).await?;
    tracing::info!(query, subreddit, count = items.len(), "fetched Reddit discussions");
    Ok(json!({
        "discussions": items,
        "total": items.len(),
        "query": query,
    }))
}

pub(crate) async fn hot(
    config: &AppConfig,
    subreddits: &[String],
    limit: usize,
) -> anyhow::Result<Value> {
    let client = RedditClient::new(&RedditConfig::from_app_config(config))?;
    let posts = if subreddits.is_empty() {
        client.get_trending_posts(PRODUCT_SUBREDDITS, limit).await?
    } else {
        client.get_trending_posts(subreddits, limit).await?
    };
    Ok(json!({
        "posts": posts,
        "total": posts.len(),
    }))
}
