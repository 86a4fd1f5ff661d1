// Moderation decision engine.
//
// Combines the lexicon matcher with one or two classifier verdicts into a
// single flag/clean decision. The priority order is policy, not accident:
// a lexicon hit always flags, and the classifiers are never consulted for
// it — a "clean" model score can never override a banned term.

pub mod decision;

pub use decision::{DecisionEngine, ModerationResult, Status, TriggeringSignal, FLAG_THRESHOLD};
