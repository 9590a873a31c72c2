//! Keyword lexicon sentiment scorer.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use vor_core::{ConfigError, ProductWithAggregates};

use crate::types::{SentimentAnalysis, SentimentLabel};

/// Default positive keywords.
pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "excellent",
    "fantastic",
    "great",
    "love",
    "perfect",
    "wonderful",
    "outstanding",
    "brilliant",
    "superb",
    "incredible",
    "best",
    "recommend",
    "impressed",
    "satisfied",
    "happy",
    "pleased",
    "good",
    "nice",
    "solid",
    "reliable",
    "quality",
    "worth",
    "buy",
    "purchase",
];

/// Default negative keywords.
pub const NEGATIVE_WORDS: &[&str] = &[
    "awful",
    "terrible",
    "horrible",
    "bad",
    "worst",
    "hate",
    "disappointing",
    "useless",
    "broken",
    "cheap",
    "poor",
    "waste",
    "regret",
    "avoid",
    "disappointed",
    "frustrated",
    "annoying",
    "problem",
    "issue",
    "fail",
    "defective",
    "overpriced",
    "scam",
    "garbage",
    "trash",
];

/// Scores beyond this magnitude are labelled positive or negative.
pub const LABEL_THRESHOLD: f64 = 0.1;

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::default);

/// Disjoint sets of lowercase positive and negative keywords.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Keyword hits found in one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
}

impl Tally {
    /// `(p - n) / (p + n)`, or exactly `0.0` when no keyword matched.
    #[must_use]
    pub fn score(self) -> f64 {
        let total = self.positive + self.negative;
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let (p, n, t) = (self.positive as f64, self.negative as f64, total as f64);
        (p - n) / t
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from custom word lists.
    ///
    /// Words are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if either set is empty, a word
    /// contains a non-word character (it could never match a token), or a
    /// word appears in both sets.
    pub fn new<I, J, S, T>(positive: I, negative: J) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let positive = normalize_words(positive, "positive")?;
        let negative = normalize_words(negative, "negative")?;

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        if !overlap.is_empty() {
            overlap.sort();
            let listed: Vec<&str> = overlap.iter().map(|w| w.as_str()).collect();
            return Err(ConfigError::Validation(format!(
                "words listed as both positive and negative: {}",
                listed.join(", ")
            )));
        }

        Ok(Self { positive, negative })
    }

    /// Load a lexicon from a YAML file with `positive:` and `negative:` lists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or the
    /// word lists fail validation (see [`Lexicon::new`]).
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let file: LexiconFile = vor_core::config::read_yaml_file(path)?;
        let lexicon = Self::new(file.positive, file.negative)?;
        tracing::debug!(
            path = %path.display(),
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "loaded sentiment lexicon"
        );
        Ok(lexicon)
    }

    /// Count positive and negative keyword hits in `text`.
    #[must_use]
    pub fn tally(&self, text: &str) -> Tally {
        let mut tally = Tally::default();
        for token in tokenize(&text.to_lowercase()) {
            if self.positive.contains(token) {
                tally.positive += 1;
            } else if self.negative.contains(token) {
                tally.negative += 1;
            }
        }
        tally
    }

    /// Polarity of `text` in `[-1.0, 1.0]`; `0.0` when no keyword matches.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        self.tally(text).score()
    }

    /// Score `text` and attach its label and confidence.
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let score = self.score(text);
        SentimentAnalysis {
            score,
            label: label_for(score),
            confidence: score.abs(),
        }
    }
}

/// Score `text` with the default lexicon.
///
/// ```
/// assert_eq!(vor_sentiment::analyze_sentiment("great amazing"), 1.0);
/// assert_eq!(vor_sentiment::analyze_sentiment("great awful"), 0.0);
/// ```
#[must_use]
pub fn analyze_sentiment(text: &str) -> f64 {
    DEFAULT_LEXICON.score(text)
}

/// [`Lexicon::analyze`] with the default lexicon.
#[must_use]
pub fn analyze(text: &str) -> SentimentAnalysis {
    DEFAULT_LEXICON.analyze(text)
}

/// Bucket a score into positive, negative, or neutral.
#[must_use]
pub fn label_for(score: f64) -> SentimentLabel {
    if score > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Label a product by its average sentiment, treating a missing average as 0.
#[must_use]
pub fn product_label(product: &ProductWithAggregates) -> SentimentLabel {
    label_for(product.average_sentiment.unwrap_or(0.0))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split on runs of non-word characters, dropping empty pieces.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
}

fn normalize_words<I, S>(words: I, kind: &str) -> Result<HashSet<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = HashSet::new();
    for word in words {
        let w = word.as_ref().trim().to_lowercase();
        if w.is_empty() {
            continue;
        }
        if !w.chars().all(is_word_char) {
            return Err(ConfigError::Validation(format!(
                "{kind} word '{w}' contains non-word characters"
            )));
        }
        set.insert(w);
    }
    if set.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{kind} word list must be non-empty"
        )));
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(analyze_sentiment(""), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(analyze_sentiment("the quick brown fox"), 0.0);
    }

    #[test]
    fn all_positive_returns_one() {
        assert_eq!(analyze_sentiment("great amazing"), 1.0);
    }

    #[test]
    fn all_negative_returns_negative_one() {
        assert_eq!(analyze_sentiment("awful terrible"), -1.0);
    }

    #[test]
    fn balanced_text_returns_zero() {
        assert_eq!(analyze_sentiment("great awful"), 0.0);
    }

    #[test]
    fn ratio_counts_each_occurrence() {
        // 3 positive, 1 negative -> (3 - 1) / 4
        let score = analyze_sentiment("Good, good, GOOD... but one problem");
        assert!((score - 0.5).abs() < f64::EPSILON, "got {score}");
    }

    #[test]
    fn punctuation_splits_tokens() {
        assert_eq!(analyze_sentiment("great!!!"), 1.0);
        assert_eq!(analyze_sentiment("love/hate"), 0.0);
        assert_eq!(analyze_sentiment("(broken)"), -1.0);
    }

    #[test]
    fn substrings_do_not_match() {
        // "goods" and "badly" are not keywords
        assert_eq!(analyze_sentiment("goods shipped badly"), 0.0);
    }

    #[test]
    fn underscore_is_a_word_character() {
        assert_eq!(analyze_sentiment("good_stuff"), 0.0);
    }

    #[test]
    fn score_stays_in_bounds() {
        let samples = [
            "Love the tech and efficiency, but build quality issues are frustrating.",
            "worst worst worst",
            "best best best purchase",
            "!!!, ,,,",
            "Just got my iPhone 15 Pro and the camera improvements are incredible.",
        ];
        for text in samples {
            let score = analyze_sentiment(text);
            assert!((-1.0..=1.0).contains(&score), "{text:?} scored {score}");
        }
    }

    #[test]
    fn analyze_labels_with_threshold() {
        assert_eq!(analyze("great").label, SentimentLabel::Positive);
        assert_eq!(analyze("awful").label, SentimentLabel::Negative);
        assert_eq!(analyze("nothing here").label, SentimentLabel::Neutral);
        assert_eq!(label_for(0.1), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.1), SentimentLabel::Neutral);
        assert_eq!(label_for(0.11), SentimentLabel::Positive);
    }

    #[test]
    fn product_label_defaults_missing_average_to_neutral() {
        let product = vor_core::Product {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            brand: None,
            category: None,
            description: None,
            image_url: None,
            slug: "widget".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let unscored = ProductWithAggregates::new(product, Vec::new());
        assert_eq!(product_label(&unscored), SentimentLabel::Neutral);

        let liked = unscored.clone().with_average_sentiment(0.7);
        assert_eq!(product_label(&liked), SentimentLabel::Positive);
        let disliked = unscored.with_average_sentiment(-0.4);
        assert_eq!(product_label(&disliked), SentimentLabel::Negative);
    }

    #[test]
    fn analyze_confidence_is_magnitude() {
        let result = analyze("awful terrible");
        assert_eq!(result.score, -1.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn custom_lexicon_scores_its_own_words() {
        let lexicon = Lexicon::new(["Crisp"], ["soggy"]).expect("valid lexicon");
        assert_eq!(lexicon.score("crisp and crisp"), 1.0);
        assert_eq!(lexicon.score("great"), 0.0);
        assert_eq!(lexicon.tally("crisp, soggy, SOGGY").negative, 2);
    }

    #[test]
    fn lexicon_rejects_overlapping_sets() {
        let result = Lexicon::new(["fine", "good"], ["fine"]);
        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("fine")),
            "expected overlap validation error, got: {result:?}"
        );
    }

    #[test]
    fn lexicon_rejects_empty_set() {
        let result = Lexicon::new(Vec::<String>::new(), ["bad"]);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn lexicon_rejects_multi_word_entries() {
        let result = Lexicon::new(["top notch"], ["bad"]);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn default_sets_are_disjoint() {
        let lexicon = Lexicon::default();
        assert!(lexicon.positive.is_disjoint(&lexicon.negative));
        assert_eq!(lexicon.positive.len(), POSITIVE_WORDS.len());
        assert_eq!(lexicon.negative.len(), NEGATIVE_WORDS.len());
    }

    #[test]
    fn lexicon_loads_from_yaml() {
        let path = std::env::temp_dir().join(format!("vor-lexicon-{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("create temp file");
        writeln!(file, "positive:\n  - sturdy\nnegative:\n  - flimsy").expect("write");

        let lexicon = Lexicon::from_yaml_file(&path).expect("load lexicon");
        assert_eq!(lexicon.score("sturdy"), 1.0);
        assert_eq!(lexicon.score("flimsy"), -1.0);

        std::fs::remove_file(&path).ok();
    }
}
