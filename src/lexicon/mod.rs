// Lexicon matcher — static banned-term scan.
//
// Matching is case-insensitive substring search over the whole lexicon, in
// lexicon order. Substring (not whole-word) matching is deliberate, kept
// from the original policy: "stupid" inside "stupidly" still flags. The
// false-positive risk that comes with that ("mad" in "nomad") is a known,
// documented behavior — do not "fix" it to whole-word matching without a
// policy decision.
//
// The built-in lexicon is the union of three category lists (profanity,
// extremism, slurs). A JSON lexicon file can replace it; the file carries
// the two recognized matching options so policy stays swappable without
// code changes.

pub mod terms;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// On-disk lexicon format. Only the documented option values are accepted;
/// anything else is a startup error rather than a silent behavior change.
#[derive(Debug, Deserialize)]
pub struct LexiconFile {
    /// Recognized value: "off" (comparison is case-folded).
    #[serde(default = "default_case_sensitivity")]
    pub case_sensitivity: String,
    /// Recognized value: "substring".
    #[serde(default = "default_match_mode")]
    pub match_mode: String,
    pub terms: Vec<String>,
}

fn default_case_sensitivity() -> String {
    "off".to_string()
}

fn default_match_mode() -> String {
    "substring".to_string()
}

/// The banned-term lexicon. Terms are stored case-folded, in load order.
#[derive(Debug)]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Lexicon {
    /// Build the lexicon from the built-in category lists, unioned flat.
    /// Duplicates across categories are tolerated, not deduplicated.
    pub fn builtin() -> Self {
        let terms = terms::PROFANITY_TERMS
            .iter()
            .chain(terms::EXTREMISM_TERMS)
            .chain(terms::SLUR_TERMS)
            .map(|t| t.to_lowercase())
            .collect();
        Self { terms }
    }

    /// Load a lexicon from a JSON file, validating the matching options.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let file: LexiconFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;

        if file.case_sensitivity != "off" {
            anyhow::bail!(
                "Unsupported case_sensitivity {:?} in {} (recognized: \"off\")",
                file.case_sensitivity,
                path.display()
            );
        }
        if file.match_mode != "substring" {
            anyhow::bail!(
                "Unsupported match_mode {:?} in {} (recognized: \"substring\")",
                file.match_mode,
                path.display()
            );
        }

        Ok(Self {
            terms: file.terms.iter().map(|t| t.to_lowercase()).collect(),
        })
    }

    /// Number of terms loaded (duplicates included).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Scan `text` for banned terms. Returns every matching term in lexicon
    /// order. O(terms × text length) by substring scan — fine at the scale
    /// of hundreds of terms and short submissions.
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        let folded = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| folded.contains(term.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicon_is_nonempty() {
        let lex = Lexicon::builtin();
        assert!(lex.len() > 100, "Expected hundreds of terms, got {}", lex.len());
    }

    #[test]
    fn match_is_case_insensitive() {
        let lex = Lexicon::builtin();
        let matches = lex.find_matches("You are STUPID");
        assert!(matches.contains(&"stupid".to_string()));
    }

    #[test]
    fn substring_match_inside_larger_word() {
        // Documented false-positive behavior: "mad" matches inside "nomad".
        let lex = Lexicon::builtin();
        let matches = lex.find_matches("the nomad crossed the desert");
        assert!(matches.contains(&"mad".to_string()));
    }

    #[test]
    fn multi_word_phrase_matches() {
        let lex = Lexicon::builtin();
        let matches = lex.find_matches("reports of a suicide bomber nearby");
        assert!(matches.contains(&"suicide bomber".to_string()));
        // The single word "bomber" is also in the lexicon and matches too.
        assert!(matches.contains(&"bomber".to_string()));
    }

    #[test]
    fn clean_text_matches_nothing() {
        let lex = Lexicon::builtin();
        assert!(lex.find_matches("have a nice day").is_empty());
    }

    #[test]
    fn empty_text_matches_nothing() {
        let lex = Lexicon::builtin();
        assert!(lex.find_matches("").is_empty());
    }
}
