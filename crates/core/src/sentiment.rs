//! Lexicon-based sentiment classification of article text.
//!
//! Scores come from the VADER model (`vader_sentiment`), a valence-aware
//! rule-based analyzer that handles negation, intensifiers, and punctuation
//! emphasis. The compound score lands in `[-1, 1]` and is bucketed into
//! three labels with the model's conventional thresholds.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound score at or above this classifies Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below this classifies Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// One shared analyzer for the whole process.
///
/// Building the analyzer loads the lexicon; it is immutable afterwards, so
/// concurrent requests can score against the same instance.
static ANALYZER: Lazy<SentimentIntensityAnalyzer<'static>> =
    Lazy::new(SentimentIntensityAnalyzer::new);

/// Sentiment label for a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Computes the VADER compound score for `text`.
///
/// Empty text scores 0.0, which classifies as Neutral.
pub fn compound_score(text: &str) -> f64 {
    let scores = ANALYZER.polarity_scores(text);
    scores.get("compound").copied().unwrap_or(0.0)
}

/// Buckets a compound score into a [`Sentiment`] label.
///
/// The thresholds are inclusive: exactly 0.05 is Positive and exactly
/// -0.05 is Negative.
pub fn classify(score: f64) -> Sentiment {
    if score >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Scores and buckets `text` in one step.
///
/// # Example
///
/// ```rust
/// use newsprobe_core::{Sentiment, analyze_sentiment};
///
/// assert_eq!(analyze_sentiment("I love this wonderful story."), Sentiment::Positive);
/// assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
/// ```
pub fn analyze_sentiment(text: &str) -> Sentiment {
    classify(compound_score(text))
}
