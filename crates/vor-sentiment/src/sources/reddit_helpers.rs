//! Reddit post conversion and mention matching.

use chrono::{DateTime, Utc};
use vor_core::DiscussionItem;

use crate::scorer::analyze_sentiment;
use crate::types::RedditPost;

/// `true` if `text` contains any of `keywords`, ignoring case.
#[must_use]
pub fn mentions_product<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .any(|k| lower.contains(&k.as_ref().to_lowercase()))
}

/// Body text that still exists on Reddit.
pub(super) fn is_live_body(body: &str) -> bool {
    let body = body.trim();
    !body.is_empty() && body != "[deleted]" && body != "[removed]"
}

fn timestamp_from_utc(created_utc: f64) -> Option<DateTime<Utc>> {
    #[allow(clippy::cast_possible_truncation)]
    let secs = created_utc.trunc() as i64;
    DateTime::from_timestamp(secs, 0)
}

/// Convert a search hit into a scored discussion for `product_id`.
pub(super) fn to_discussion_item(
    post: &RedditPost,
    product_id: &str,
    fetched_at: DateTime<Utc>,
) -> DiscussionItem {
    let title = Some(post.title.trim().to_string()).filter(|t| !t.is_empty());
    let content = if is_live_body(&post.selftext) {
        post.selftext.trim().to_string()
    } else {
        post.title.trim().to_string()
    };

    let scored_text = match &title {
        Some(t) if *t != content => format!("{t} {content}"),
        _ => content.clone(),
    };

    let permalink = Some(post.permalink.clone()).filter(|p| !p.is_empty());
    let url = if post.url.is_empty() {
        permalink.as_ref().map(|p| format!("https://reddit.com{p}"))
    } else {
        Some(post.url.clone())
    };

    DiscussionItem {
        id: format!("t3_{}", post.id),
        reddit_id: post.id.clone(),
        product_id: product_id.to_string(),
        subreddit: post.subreddit.clone(),
        title,
        content,
        author: post.author.clone(),
        score: post.score,
        url,
        permalink,
        created_at: timestamp_from_utc(post.created_utc).unwrap_or(fetched_at),
        fetched_at,
        sentiment_score: Some(analyze_sentiment(&scored_text)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn post(title: &str, selftext: &str) -> RedditPost {
        RedditPost {
            id: "abc123".to_string(),
            title: title.to_string(),
            selftext: selftext.to_string(),
            author: "techreviewguy".to_string(),
            score: 234,
            created_utc: 1_705_276_800.0,
            subreddit: "apple".to_string(),
            permalink: "/r/apple/comments/abc123/review/".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn mentions_product_ignores_case() {
        assert!(mentions_product("Loving my new IPHONE", &["iphone 15", "iphone"]));
        assert!(!mentions_product("Loving my new pixel", &["iphone"]));
        assert!(!mentions_product("anything", &[] as &[&str]));
    }

    #[test]
    fn deleted_bodies_are_not_live() {
        assert!(!is_live_body("[deleted]"));
        assert!(!is_live_body(" [removed] "));
        assert!(!is_live_body("   "));
        assert!(is_live_body("still here"));
    }

    #[test]
    fn converts_post_with_body() {
        let fetched = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let item = to_discussion_item(
            &post("Worth the upgrade?", "The camera is incredible."),
            "iphone-15-pro",
            fetched,
        );
        assert_eq!(item.id, "t3_abc123");
        assert_eq!(item.reddit_id, "abc123");
        assert_eq!(item.product_id, "iphone-15-pro");
        assert_eq!(item.title.as_deref(), Some("Worth the upgrade?"));
        assert_eq!(item.content, "The camera is incredible.");
        assert_eq!(
            item.url.as_deref(),
            Some("https://reddit.com/r/apple/comments/abc123/review/")
        );
        assert_eq!(
            item.created_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(item.fetched_at, fetched);
        // "worth" and "incredible" are both positive
        assert_eq!(item.sentiment_score, Some(1.0));
    }

    #[test]
    fn falls_back_to_title_for_link_posts() {
        let fetched = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let item = to_discussion_item(&post("Terrible battery", "[deleted]"), "p", fetched);
        assert_eq!(item.content, "Terrible battery");
        assert_eq!(item.sentiment_score, Some(-1.0));
    }
}
