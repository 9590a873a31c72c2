//! Discussion sources that feed product mentions into the catalog.
//!
//! Nothing on the HTTP request path calls these; they exist for offline
//! ingestion and the CLI.

mod reddit;
mod reddit_helpers;

use std::future::Future;

use vor_core::DiscussionItem;

use crate::error::SentimentError;

pub use reddit::RedditClient;
pub use reddit_helpers::mentions_product;

/// Review-heavy communities searched by default.
pub const PRODUCT_SUBREDDITS: &[&str] = &[
    "BuyItForLife",
    "reviews",
    "ProductPorn",
    "shutupandtakemymoney",
    "gadgets",
    "technology",
    "buildapc",
    "MechanicalKeyboards",
    "headphones",
    "audiophile",
    "skincareaddiction",
    "malefashionadvice",
    "femalefashionadvice",
    "fitness",
    "homegym",
    "cooking",
];

/// Anything that can look up community discussions for a product query.
pub trait DiscussionSource {
    /// Fetch discussions mentioning `query`, already sentiment-scored.
    fn fetch_discussions_for(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<DiscussionItem>, SentimentError>> + Send;
}
