use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A reviewed item shown as a product card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier, unique across the catalog.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// URL-safe slug derived from the name, unique across the catalog.
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One community post or comment that mentions a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionItem {
    pub id: String,
    /// Identifier on the source site, e.g. the Reddit post id `"abc123"`.
    pub reddit_id: String,
    /// Owning product; must reference a product in the same catalog.
    pub product_id: String,
    pub subreddit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub author: String,
    /// Net upvotes. May be negative.
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    pub created_at: DateTime<Utc>,
    pub fetched_at: DateTime<Utc>,
    /// Polarity in `[-1.0, 1.0]`, if scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}

/// Read-only projection of a product with its discussions and derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithAggregates {
    #[serde(flatten)]
    pub product: Product,
    /// Discussions in stored order, most recent first.
    #[serde(default)]
    pub reddit_content: Vec<DiscussionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_sentiment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_mentions: Option<u32>,
    #[serde(default)]
    pub top_subreddits: Vec<String>,
}

impl ProductWithAggregates {
    /// Build the projection, deriving every aggregate from `items`.
    #[must_use]
    pub fn new(product: Product, items: Vec<DiscussionItem>) -> Self {
        let average_sentiment = average_sentiment(&items);
        let total_mentions = u32::try_from(items.len()).unwrap_or(u32::MAX);
        let top_subreddits = rank_subreddits(&items);
        Self {
            product,
            reddit_content: items,
            average_sentiment,
            total_mentions: Some(total_mentions),
            top_subreddits,
        }
    }

    /// Replace the derived mention count with a curated one.
    #[must_use]
    pub fn with_total_mentions(mut self, total_mentions: u32) -> Self {
        self.total_mentions = Some(total_mentions);
        self
    }

    /// Replace the derived average with a curated one.
    #[must_use]
    pub fn with_average_sentiment(mut self, average_sentiment: f64) -> Self {
        self.average_sentiment = Some(average_sentiment);
        self
    }

    /// Replace the derived community list with a curated one.
    #[must_use]
    pub fn with_top_subreddits<I, S>(mut self, subreddits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_subreddits = subreddits.into_iter().map(Into::into).collect();
        self
    }

    /// Mention count used for ranking; a missing count ranks as zero.
    #[must_use]
    pub fn mentions(&self) -> u32 {
        self.total_mentions.unwrap_or(0)
    }

    /// The most recent discussion, shown as the card's "latest mention".
    #[must_use]
    pub fn latest_mention(&self) -> Option<&DiscussionItem> {
        self.reddit_content.first()
    }

    /// Highest upvote count across the product's discussions, 0 if none.
    #[must_use]
    pub fn top_score(&self) -> i64 {
        crate::format::max_score(&self.reddit_content)
    }
}

/// Mean of the present sentiment scores, `None` when no item is scored.
#[must_use]
pub fn average_sentiment(items: &[DiscussionItem]) -> Option<f64> {
    let scores: Vec<f64> = items.iter().filter_map(|i| i.sentiment_score).collect();
    if scores.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = scores.len() as f64;
    Some(scores.iter().sum::<f64>() / denom)
}

/// Distinct community names ranked by how often they appear in `items`.
///
/// Ties keep the order in which the names first appear.
#[must_use]
pub fn rank_subreddits(items: &[DiscussionItem]) -> Vec<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        counts
            .entry(item.subreddit.as_str())
            .or_insert((0, idx))
            .0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(name, (count, first))| (name, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().map(|(name, _, _)| name.to_string()).collect()
}

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug filter regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// Generate a URL-friendly slug from a product name.
///
/// `"iPhone 15 Pro"` becomes `"iphone-15-pro"`. Characters other than ASCII
/// word characters, whitespace and `-` are dropped; leading and trailing
/// hyphens are trimmed.
#[must_use]
pub fn generate_slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let filtered = NON_SLUG_CHARS.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(filtered.trim(), "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Test Widget".to_string(),
            brand: Some("Acme".to_string()),
            category: None,
            description: None,
            image_url: None,
            slug: id.to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn item(id: &str, subreddit: &str, score: i64, sentiment: Option<f64>) -> DiscussionItem {
        DiscussionItem {
            id: id.to_string(),
            reddit_id: format!("r{id}"),
            product_id: "widget".to_string(),
            subreddit: subreddit.to_string(),
            title: None,
            content: "content".to_string(),
            author: "someone".to_string(),
            score,
            url: None,
            permalink: None,
            created_at: ts(),
            fetched_at: ts(),
            sentiment_score: sentiment,
        }
    }

    #[test]
    fn slug_simple_name() {
        assert_eq!(generate_slug("iPhone 15 Pro"), "iphone-15-pro");
    }

    #[test]
    fn slug_drops_special_characters() {
        assert_eq!(generate_slug("Uncle Arnie's Tea!"), "uncle-arnies-tea");
    }

    #[test]
    fn slug_collapses_whitespace_and_hyphens() {
        assert_eq!(generate_slug("  MacBook   Air -- M3 "), "macbook-air-m3");
    }

    #[test]
    fn slug_of_punctuation_only_is_empty() {
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn aggregates_are_derived_from_items() {
        let items = vec![
            item("1", "gadgets", 10, Some(0.5)),
            item("2", "reviews", -4, None),
            item("3", "reviews", 7, Some(-0.1)),
        ];
        let p = ProductWithAggregates::new(product("widget"), items);
        assert_eq!(p.total_mentions, Some(3));
        let avg = p.average_sentiment.expect("two items are scored");
        assert!((avg - 0.2).abs() < 1e-9, "expected 0.2, got {avg}");
        assert_eq!(p.top_subreddits, vec!["reviews", "gadgets"]);
        assert_eq!(p.top_score(), 10);
        assert_eq!(p.latest_mention().map(|i| i.id.as_str()), Some("1"));
    }

    #[test]
    fn average_sentiment_absent_when_nothing_scored() {
        let p = ProductWithAggregates::new(product("widget"), vec![item("1", "a", 1, None)]);
        assert!(p.average_sentiment.is_none());
    }

    #[test]
    fn empty_product_has_zero_aggregates() {
        let p = ProductWithAggregates::new(product("widget"), vec![]);
        assert_eq!(p.mentions(), 0);
        assert_eq!(p.top_score(), 0);
        assert!(p.top_subreddits.is_empty());
        assert!(p.latest_mention().is_none());
    }

    #[test]
    fn subreddit_ties_keep_first_appearance() {
        let items = vec![
            item("1", "zeta", 1, None),
            item("2", "alpha", 1, None),
            item("3", "mid", 1, None),
        ];
        assert_eq!(rank_subreddits(&items), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn curated_values_override_derived_ones() {
        let p = ProductWithAggregates::new(product("widget"), vec![item("1", "a", 1, Some(1.0))])
            .with_total_mentions(45)
            .with_average_sentiment(0.7)
            .with_top_subreddits(["apple", "iphone"]);
        assert_eq!(p.mentions(), 45);
        assert_eq!(p.average_sentiment, Some(0.7));
        assert_eq!(p.top_subreddits, vec!["apple", "iphone"]);
    }

    #[test]
    fn serializes_with_camel_case_flattened_fields() {
        let p = ProductWithAggregates::new(product("widget"), vec![item("1", "a", 3, Some(0.4))]);
        let json = serde_json::to_value(&p).expect("serialize");
        assert_eq!(json["id"], "widget");
        assert_eq!(json["brand"], "Acme");
        assert!(json.get("category").is_none(), "absent fields are omitted");
        assert_eq!(json["totalMentions"], 1);
        assert_eq!(json["redditContent"][0]["redditId"], "r1");
        assert_eq!(json["redditContent"][0]["sentimentScore"], 0.4);
        assert_eq!(json["topSubreddits"][0], "a");
    }
}
