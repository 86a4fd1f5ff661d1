// Classifier traits — the swap-ready abstraction.
//
// The two pretrained models are black boxes behind a fixed contract: text
// in, scores out. Implementations must be async because the default
// providers are HTTP inference endpoints with real model latency — callers
// must not assume sub-millisecond responses.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

/// Output of the primary multi-label toxicity scorer: a mapping from
/// category label to confidence (0.0–1.0). BTreeMap keeps label order
/// stable for display and comparison.
#[derive(Debug, Clone, Default)]
pub struct LabelScores {
    pub scores: BTreeMap<String, f64>,
}

impl LabelScores {
    /// The label with the highest confidence, with its value.
    /// None only when the model returned no labels at all.
    pub fn top(&self) -> Option<(&str, f64)> {
        self.scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(label, conf)| (label.as_str(), *conf))
    }
}

/// Output of the optional secondary binary classifier.
#[derive(Debug, Clone)]
pub struct BinaryVerdict {
    /// "toxic" or "not toxic", as reported by the model.
    pub label: String,
    pub confidence: f64,
}

impl BinaryVerdict {
    pub fn is_toxic(&self) -> bool {
        self.label.eq_ignore_ascii_case("toxic")
    }
}

/// Deterministic stand-in for the primary scorer: always returns the same
/// label distribution. Used by tests and offline demos; never a silent
/// production fallback.
pub struct FixedLabelScorer {
    pub scores: LabelScores,
}

impl FixedLabelScorer {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        let scores = pairs
            .iter()
            .map(|(label, conf)| (label.to_string(), *conf))
            .collect();
        Self {
            scores: LabelScores { scores },
        }
    }
}

#[async_trait]
impl LabelScorer for FixedLabelScorer {
    async fn score(&self, _text: &str) -> Result<LabelScores> {
        Ok(self.scores.clone())
    }
}

/// Deterministic stand-in for the binary classifier.
pub struct FixedBinaryClassifier {
    pub label: String,
    pub confidence: f64,
}

#[async_trait]
impl BinaryToxicityClassifier for FixedBinaryClassifier {
    async fn classify(&self, _text: &str) -> Result<BinaryVerdict> {
        Ok(BinaryVerdict {
            label: self.label.clone(),
            confidence: self.confidence,
        })
    }
}

/// Always-failing scorer: verifies that inference failures are surfaced as
/// request-level errors, never swallowed into a "clean" verdict.
pub struct FailingScorer;

#[async_trait]
impl LabelScorer for FailingScorer {
    async fn score(&self, _text: &str) -> Result<LabelScores> {
        anyhow::bail!("classifier endpoint unreachable")
    }
}

/// Primary scorer: label distribution over toxicity categories.
#[async_trait]
pub trait LabelScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<LabelScores>;
}

/// Secondary scorer: single toxic/not-toxic verdict with confidence.
#[async_trait]
pub trait BinaryToxicityClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<BinaryVerdict>;
}
