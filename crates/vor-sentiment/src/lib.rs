//! Sentiment scoring for VoicesOfReddit.
//!
//! Scores free text against a positive/negative keyword lexicon and exposes
//! an optional Reddit client that turns search results into scored
//! [`vor_core::DiscussionItem`]s. The request path only uses the scorer.

pub mod error;
pub mod scorer;
pub mod sources;
pub mod types;

pub use error::SentimentError;
pub use scorer::{analyze, analyze_sentiment, label_for, product_label, Lexicon};
pub use sources::{mentions_product, DiscussionSource, RedditClient, PRODUCT_SUBREDDITS};
pub use types::{RedditComment, RedditConfig, RedditPost, SentimentAnalysis, SentimentLabel};
