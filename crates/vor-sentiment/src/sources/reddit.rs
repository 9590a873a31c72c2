//! Reddit public JSON API client.

use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use vor_core::{generate_slug, DiscussionItem};

use crate::error::SentimentError;
use crate::types::{RedditComment, RedditConfig, RedditPost};

use super::reddit_helpers::{is_live_body, to_discussion_item};
use super::DiscussionSource;

const DISCUSSION_SEARCH_LIMIT: usize = 25;

#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<Child<T>>,
}

#[derive(Debug, Deserialize)]
struct Child<T> {
    data: T,
}

/// Comment payload as listed; `more` stubs carry no body.
#[derive(Debug, Deserialize)]
struct RawComment {
    id: Option<String>,
    body: Option<String>,
    author: Option<String>,
    score: Option<i64>,
    created_utc: Option<f64>,
    permalink: Option<String>,
}

/// Client for Reddit's unauthenticated `.json` listing endpoints.
///
/// All settings come from the [`RedditConfig`] passed to [`RedditClient::new`].
pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    /// Build a client for `config.base_url` sending `config.user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidBaseUrl`] if the base URL is not
    /// http(s), or [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &RedditConfig) -> Result<Self, SentimentError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SentimentError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Search posts site-wide, or within `subreddit` when given.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Reddit`] on a non-2xx status,
    /// [`SentimentError::Http`] on transport failure, and
    /// [`SentimentError::Deserialize`] if the listing is malformed.
    pub async fn search_posts(
        &self,
        query: &str,
        subreddit: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RedditPost>, SentimentError> {
        let endpoint = match subreddit {
            Some(sub) => format!("{}/r/{sub}/search.json", self.base_url),
            None => format!("{}/search.json", self.base_url),
        };

        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("sort", "relevance".to_string()),
            ("t", "all".to_string()),
            ("limit", limit.to_string()),
        ];
        if subreddit.is_some() {
            params.push(("restrict_sr", "true".to_string()));
        }

        let Some(listing) = self
            .get_json::<Listing<RedditPost>>(&endpoint, &params)
            .await?
        else {
            return Err(SentimentError::Reddit("search returned no listing".to_string()));
        };

        let posts: Vec<RedditPost> = listing.data.children.into_iter().map(|c| c.data).collect();
        tracing::debug!(query, subreddit, count = posts.len(), "searched Reddit posts");
        Ok(posts)
    }

    /// Top-level comments on a post, skipping deleted and removed bodies.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RedditClient::search_posts`].
    pub async fn get_post_comments(
        &self,
        subreddit: &str,
        post_id: &str,
        limit: usize,
    ) -> Result<Vec<RedditComment>, SentimentError> {
        let endpoint = format!("{}/r/{subreddit}/comments/{post_id}.json", self.base_url);
        let params = [("limit", limit.to_string())];

        // The response is `[post_listing, comment_listing]`.
        let listings: Vec<serde_json::Value> = self
            .get_json(&endpoint, &params)
            .await?
            .unwrap_or_default();
        let Some(raw) = listings.into_iter().nth(1) else {
            return Ok(Vec::new());
        };

        let listing: Listing<RawComment> =
            serde_json::from_value(raw).map_err(|e| SentimentError::Deserialize {
                context: format!("comments({subreddit}/{post_id})"),
                source: e,
            })?;

        let comments = listing
            .data
            .children
            .into_iter()
            .filter_map(|c| {
                let raw = c.data;
                let body = raw.body.filter(|b| is_live_body(b))?;
                Some(RedditComment {
                    id: raw.id?,
                    body,
                    author: raw.author.unwrap_or_default(),
                    score: raw.score.unwrap_or(0),
                    created_utc: raw.created_utc.unwrap_or(0.0),
                    permalink: raw.permalink.unwrap_or_default(),
                })
            })
            .collect();

        Ok(comments)
    }

    /// Hot posts across `subreddits`, merged and ranked by score.
    ///
    /// A subreddit answering with a non-2xx status is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on transport failure and
    /// [`SentimentError::Deserialize`] if a listing is malformed.
    pub async fn get_trending_posts<S: AsRef<str>>(
        &self,
        subreddits: &[S],
        limit: usize,
    ) -> Result<Vec<RedditPost>, SentimentError> {
        let mut posts = Vec::new();
        let params = [("limit", limit.to_string())];

        for sub in subreddits {
            let sub = sub.as_ref();
            let endpoint = format!("{}/r/{sub}/hot.json", self.base_url);
            match self.get_json::<Listing<RedditPost>>(&endpoint, &params).await {
                Ok(Some(listing)) => {
                    posts.extend(listing.data.children.into_iter().map(|c| c.data));
                }
                Ok(None) => {}
                Err(SentimentError::Reddit(msg)) => {
                    tracing::warn!(subreddit = sub, error = %msg, "skipping subreddit");
                }
                Err(e) => return Err(e),
            }
        }

        posts.sort_by(|a, b| b.score.cmp(&a.score));
        posts.truncate(limit);
        Ok(posts)
    }

    /// GET `endpoint` and decode JSON. `Ok(None)` means an empty body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Option<T>, SentimentError> {
        let response = self.client.get(endpoint).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::Reddit(format!(
                "GET {endpoint} failed with status {status}"
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| SentimentError::Deserialize {
                context: endpoint.to_string(),
                source: e,
            })
    }
}

impl RedditClient {
    /// Search hits for `query` as scored discussions, keyed to the query's slug.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RedditClient::search_posts`].
    pub async fn discussions_for(
        &self,
        query: &str,
        subreddit: Option<&str>,
        limit: usize,
    ) -> Result<Vec<DiscussionItem>, SentimentError> {
        let product_id = generate_slug(query);
        let fetched_at = Utc::now();
        let posts = self.search_posts(query, subreddit, limit).await?;

        Ok(posts
            .iter()
            .map(|post| to_discussion_item(post, &product_id, fetched_at))
            .collect())
    }
}

impl DiscussionSource for RedditClient {
    async fn fetch_discussions_for(
        &self,
        query: &str,
    ) -> Result<Vec<DiscussionItem>, SentimentError> {
        self.discussions_for(query, None, DISCUSSION_SEARCH_LIMIT)
            .await
    }
}
