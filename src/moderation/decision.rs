use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::traits::{BinaryToxicityClassifier, LabelScorer};
use crate::lexicon::Lexicon;

/// Confidence above which a classifier verdict flags a submission.
/// Fixed policy constant — strictly greater-than, so exactly 0.70 is clean.
pub const FLAG_THRESHOLD: f64 = 0.70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Clean,
    Flagged,
}

/// Which sub-check produced a flagged verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggeringSignal {
    /// A banned term matched — classifiers were not consulted.
    Lexicon,
    /// The primary multi-label scorer's top label cleared the threshold.
    ClassifierA,
    /// The secondary binary classifier said "toxic" above the threshold.
    ClassifierB,
    /// Nothing triggered; the submission is clean.
    None,
}

impl TriggeringSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggeringSignal::Lexicon => "lexicon",
            TriggeringSignal::ClassifierA => "classifier_a",
            TriggeringSignal::ClassifierB => "classifier_b",
            TriggeringSignal::None => "none",
        }
    }
}

/// The verdict for one text submission. Immutable once produced.
///
/// `classifier_scores` holds the primary scorer's label distribution plus,
/// when the secondary classifier ran, its reported label — all rounded to
/// 3 decimal places for stable display and comparison. Empty when the
/// lexicon short-circuited the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResult {
    pub status: Status,
    pub triggering_signal: TriggeringSignal,
    pub matched_terms: Vec<String>,
    pub classifier_scores: BTreeMap<String, f64>,
}

impl ModerationResult {
    pub fn is_flagged(&self) -> bool {
        self.status == Status::Flagged
    }
}

/// Round to 3 decimal places for stable display.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// The decision engine: lexicon first, then the classifiers.
pub struct DecisionEngine {
    lexicon: Lexicon,
    primary: Box<dyn LabelScorer>,
    secondary: Option<Box<dyn BinaryToxicityClassifier>>,
}

impl DecisionEngine {
    pub fn new(
        lexicon: Lexicon,
        primary: Box<dyn LabelScorer>,
        secondary: Option<Box<dyn BinaryToxicityClassifier>>,
    ) -> Self {
        Self {
            lexicon,
            primary,
            secondary,
        }
    }

    /// Decide flagged/clean for one submission, in strict priority order:
    ///
    /// 1. Lexicon match -> flagged (lexicon), classifiers skipped entirely.
    /// 2. Secondary classifier present, "toxic" with confidence > 0.70
    ///    -> flagged (classifier_b).
    /// 3. Primary top-label confidence > 0.70 -> flagged (classifier_a).
    /// 4. Otherwise clean.
    ///
    /// Deterministic and pure with respect to caller state: identical text
    /// with identical classifier outputs yields an identical result. Empty
    /// text is valid input — it matches nothing and scores near zero.
    /// Classifier failures propagate as inference errors; there is no
    /// silent fall-through to "clean".
    pub async fn decide(&self, text: &str) -> Result<ModerationResult> {
        let matched_terms = self.lexicon.find_matches(text);
        if !matched_terms.is_empty() {
            debug!(terms = matched_terms.len(), "Flagged by lexicon");
            return Ok(ModerationResult {
                status: Status::Flagged,
                triggering_signal: TriggeringSignal::Lexicon,
                matched_terms,
                classifier_scores: BTreeMap::new(),
            });
        }

        let label_scores = self
            .primary
            .score(text)
            .await
            .context("Primary classifier inference failed")?;

        let mut classifier_scores: BTreeMap<String, f64> = label_scores
            .scores
            .iter()
            .map(|(label, conf)| (label.clone(), round3(*conf)))
            .collect();

        let binary = match &self.secondary {
            Some(classifier) => Some(
                classifier
                    .classify(text)
                    .await
                    .context("Secondary classifier inference failed")?,
            ),
            None => None,
        };

        if let Some(verdict) = &binary {
            classifier_scores.insert(verdict.label.clone(), round3(verdict.confidence));
        }

        let triggering_signal = if binary
            .as_ref()
            .is_some_and(|v| v.is_toxic() && v.confidence > FLAG_THRESHOLD)
        {
            TriggeringSignal::ClassifierB
        } else if label_scores.top().is_some_and(|(_, conf)| conf > FLAG_THRESHOLD) {
            TriggeringSignal::ClassifierA
        } else {
            TriggeringSignal::None
        };

        let status = match triggering_signal {
            TriggeringSignal::None => Status::Clean,
            _ => Status::Flagged,
        };

        Ok(ModerationResult {
            status,
            triggering_signal,
            matched_terms,
            classifier_scores,
        })
    }
}
