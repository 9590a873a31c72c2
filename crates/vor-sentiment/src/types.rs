use serde::{Deserialize, Serialize};

/// Coarse polarity bucket for a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Score plus the label and confidence shown on product cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    /// Polarity in `[-1.0, 1.0]`.
    pub score: f64,
    pub label: SentimentLabel,
    /// `|score|`, in `[0.0, 1.0]`.
    pub confidence: f64,
}

/// Connection settings for [`crate::RedditClient`].
///
/// Supplied by the caller; the client never reads the process environment.
#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.reddit.com".to_string(),
            user_agent: "VoicesOfReddit/1.0".to_string(),
            timeout_secs: 30,
        }
    }
}

impl RedditConfig {
    #[must_use]
    pub fn from_app_config(config: &vor_core::AppConfig) -> Self {
        Self {
            base_url: config.reddit_base_url.clone(),
            user_agent: config.reddit_user_agent.clone(),
            timeout_secs: config.reddit_request_timeout_secs,
        }
    }
}

/// A Reddit submission as returned by the public JSON listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub url: String,
}

/// A top-level comment on a Reddit submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditComment {
    pub id: String,
    pub body: String,
    pub author: String,
    pub score: i64,
    pub created_utc: f64,
    pub permalink: String,
}
