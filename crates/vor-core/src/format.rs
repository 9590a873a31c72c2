//! Display helpers for product cards and discussion snippets.

use chrono::{DateTime, Utc};

use crate::products::DiscussionItem;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000;
const YEAR: i64 = 31_536_000;

/// Highest score across `items`; `0` for an empty slice.
#[must_use]
pub fn max_score(items: &[DiscussionItem]) -> i64 {
    items.iter().map(|i| i.score).max().unwrap_or(0)
}

/// Render the time elapsed between `timestamp` and `now`, e.g. `"3h ago"`.
///
/// Timestamps in the future render as `"just now"`.
#[must_use]
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - timestamp).num_seconds();

    if secs < MINUTE {
        "just now".to_string()
    } else if secs < HOUR {
        format!("{}m ago", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h ago", secs / HOUR)
    } else if secs < MONTH {
        format!("{}d ago", secs / DAY)
    } else if secs < YEAR {
        format!("{}mo ago", secs / MONTH)
    } else {
        format!("{}y ago", secs / YEAR)
    }
}

/// Abbreviate an upvote count: `950`, `1.5k`, `2.5M`.
#[must_use]
pub fn format_score(score: i64) -> String {
    if score >= 1_000_000 {
        with_one_decimal(score, 1_000_000, 'M')
    } else if score >= 1_000 {
        with_one_decimal(score, 1_000, 'k')
    } else {
        score.to_string()
    }
}

/// `score / unit` to one decimal place, halves rounded up.
fn with_one_decimal(score: i64, unit: i64, suffix: char) -> String {
    let step = unit / 10;
    let tenths = score.saturating_add(step / 2) / step;
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(secs: i64) -> String {
        time_ago(now() - Duration::seconds(secs), now())
    }

    #[test]
    fn time_ago_thresholds() {
        assert_eq!(ago(0), "just now");
        assert_eq!(ago(45), "just now");
        assert_eq!(ago(59), "just now");
        assert_eq!(ago(60), "1m ago");
        assert_eq!(ago(3_599), "59m ago");
        assert_eq!(ago(3_600), "1h ago");
        assert_eq!(ago(86_399), "23h ago");
        assert_eq!(ago(90_000), "1d ago");
        assert_eq!(ago(2_591_999), "29d ago");
        assert_eq!(ago(2_592_000), "1mo ago");
        assert_eq!(ago(31_535_999), "12mo ago");
        assert_eq!(ago(31_536_000), "1y ago");
        assert_eq!(ago(100_000_000), "3y ago");
    }

    #[test]
    fn time_ago_future_is_just_now() {
        assert_eq!(ago(-3_600), "just now");
    }

    #[test]
    fn format_score_examples() {
        assert_eq!(format_score(950), "950");
        assert_eq!(format_score(999), "999");
        assert_eq!(format_score(1_000), "1.0k");
        assert_eq!(format_score(1_500), "1.5k");
        assert_eq!(format_score(2_500_000), "2.5M");
        assert_eq!(format_score(-20), "-20");
    }

    #[test]
    fn format_score_rounds_halves_up() {
        assert_eq!(format_score(1_250), "1.3k");
        assert_eq!(format_score(3_250), "3.3k");
        assert_eq!(format_score(1_249), "1.2k");
        assert_eq!(format_score(1_250_000), "1.3M");
        assert_eq!(format_score(999_999), "1000.0k");
    }

    #[test]
    fn max_score_of_empty_is_zero() {
        assert_eq!(max_score(&[]), 0);
    }

    #[test]
    fn truncate_text_keeps_short_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn truncate_text_cuts_and_trims() {
        assert_eq!(truncate_text("hello world again", 6), "hello...");
        assert_eq!(truncate_text("héllo wörld", 4), "héll...");
    }
}
