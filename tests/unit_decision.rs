// Unit tests for the decision engine's priority policy.
//
// The classifiers are replaced with deterministic stand-ins so every test
// is a pure function of (text, fixed scores) — exactly the property the
// engine promises.

use gatepost::classifier::traits::{
    BinaryToxicityClassifier, FailingScorer, FixedBinaryClassifier, FixedLabelScorer,
};
use gatepost::lexicon::Lexicon;
use gatepost::moderation::{DecisionEngine, Status, TriggeringSignal};

fn engine_with(
    primary: FixedLabelScorer,
    secondary: Option<FixedBinaryClassifier>,
) -> DecisionEngine {
    DecisionEngine::new(
        Lexicon::builtin(),
        Box::new(primary),
        secondary.map(|s| Box::new(s) as Box<dyn BinaryToxicityClassifier>),
    )
}

fn benign_primary() -> FixedLabelScorer {
    FixedLabelScorer::new(&[("toxicity", 0.01), ("insult", 0.02)])
}

fn not_toxic_binary() -> FixedBinaryClassifier {
    FixedBinaryClassifier {
        label: "not toxic".to_string(),
        confidence: 0.10,
    }
}

// ============================================================
// Priority 1: lexicon always wins
// ============================================================

#[tokio::test]
async fn lexicon_hit_flags_and_reports_term() {
    let engine = engine_with(benign_primary(), Some(not_toxic_binary()));
    let result = engine.decide("you are stupid").await.unwrap();

    assert_eq!(result.status, Status::Flagged);
    assert_eq!(result.triggering_signal, TriggeringSignal::Lexicon);
    assert_eq!(result.matched_terms, vec!["stupid"]);
}

#[tokio::test]
async fn lexicon_hit_overrides_confident_clean_classifiers() {
    // Even a maximally confident "not toxic" verdict cannot override a
    // banned term — conservative bias is the policy.
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.0)]),
        Some(FixedBinaryClassifier {
            label: "not toxic".to_string(),
            confidence: 1.0,
        }),
    );
    let result = engine.decide("what an idiot").await.unwrap();
    assert_eq!(result.status, Status::Flagged);
    assert_eq!(result.triggering_signal, TriggeringSignal::Lexicon);
}

#[tokio::test]
async fn lexicon_hit_skips_classifiers_entirely() {
    // With a failing primary scorer, a lexicon hit must still succeed —
    // proof the classifiers are never consulted on that path.
    let engine = DecisionEngine::new(Lexicon::builtin(), Box::new(FailingScorer), None);
    let result = engine.decide("you are stupid").await.unwrap();
    assert_eq!(result.status, Status::Flagged);
    assert!(result.classifier_scores.is_empty());
}

// ============================================================
// Priority 2 and 3: classifier thresholds
// ============================================================

#[tokio::test]
async fn low_scores_are_clean() {
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.42)]),
        Some(not_toxic_binary()),
    );
    let result = engine.decide("have a nice day").await.unwrap();

    assert_eq!(result.status, Status::Clean);
    assert_eq!(result.triggering_signal, TriggeringSignal::None);
    assert!(result.matched_terms.is_empty());
}

#[tokio::test]
async fn binary_toxic_above_threshold_flags_as_classifier_b() {
    let engine = engine_with(
        benign_primary(),
        Some(FixedBinaryClassifier {
            label: "toxic".to_string(),
            confidence: 0.85,
        }),
    );
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.status, Status::Flagged);
    assert_eq!(result.triggering_signal, TriggeringSignal::ClassifierB);
}

#[tokio::test]
async fn binary_takes_priority_over_primary() {
    // Both classifiers clear the threshold; the binary one wins the
    // attribution.
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.95)]),
        Some(FixedBinaryClassifier {
            label: "toxic".to_string(),
            confidence: 0.80,
        }),
    );
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.triggering_signal, TriggeringSignal::ClassifierB);
}

#[tokio::test]
async fn primary_above_threshold_flags_as_classifier_a() {
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.91), ("insult", 0.2)]),
        Some(not_toxic_binary()),
    );
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.status, Status::Flagged);
    assert_eq!(result.triggering_signal, TriggeringSignal::ClassifierA);
}

#[tokio::test]
async fn primary_flags_without_secondary_configured() {
    let engine = engine_with(FixedLabelScorer::new(&[("toxicity", 0.95)]), None);
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.triggering_signal, TriggeringSignal::ClassifierA);
}

#[tokio::test]
async fn threshold_is_strictly_greater_than() {
    // Exactly 0.70 is clean; the policy is > 0.70, not >=.
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.70)]),
        Some(FixedBinaryClassifier {
            label: "toxic".to_string(),
            confidence: 0.70,
        }),
    );
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.status, Status::Clean);
}

#[tokio::test]
async fn just_above_threshold_flags() {
    let engine = engine_with(FixedLabelScorer::new(&[("toxicity", 0.701)]), None);
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.status, Status::Flagged);
}

#[tokio::test]
async fn binary_not_toxic_never_flags_regardless_of_confidence() {
    let engine = engine_with(
        benign_primary(),
        Some(FixedBinaryClassifier {
            label: "not toxic".to_string(),
            confidence: 0.99,
        }),
    );
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.status, Status::Clean);
}

// ============================================================
// Result shape: rounding, determinism, error propagation
// ============================================================

#[tokio::test]
async fn scores_are_rounded_to_three_decimals() {
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.123456)]),
        Some(FixedBinaryClassifier {
            label: "not toxic".to_string(),
            confidence: 0.98765,
        }),
    );
    let result = engine.decide("have a nice day").await.unwrap();
    assert_eq!(result.classifier_scores["toxicity"], 0.123);
    assert_eq!(result.classifier_scores["not toxic"], 0.988);
}

#[tokio::test]
async fn decide_is_deterministic_for_identical_input() {
    let engine = engine_with(
        FixedLabelScorer::new(&[("toxicity", 0.42), ("threat", 0.1)]),
        Some(not_toxic_binary()),
    );
    let a = engine.decide("the same text").await.unwrap();
    let b = engine.decide("the same text").await.unwrap();
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[tokio::test]
async fn empty_text_is_valid_input() {
    let engine = engine_with(benign_primary(), Some(not_toxic_binary()));
    let result = engine.decide("").await.unwrap();
    assert_eq!(result.status, Status::Clean);
    assert!(result.matched_terms.is_empty());
}

#[tokio::test]
async fn inference_failure_propagates() {
    let engine = DecisionEngine::new(Lexicon::builtin(), Box::new(FailingScorer), None);
    let err = engine.decide("have a nice day").await.unwrap_err();
    assert!(err.to_string().contains("inference failed"));
}
