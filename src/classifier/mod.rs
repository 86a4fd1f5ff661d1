// Toxicity classification — trait-based abstraction for swappable providers.
//
// The LabelScorer and BinaryToxicityClassifier traits define the contract;
// the default implementations call hosted inference endpoints over HTTP.
// Swapping in a local model later means implementing the trait, nothing else.

pub mod http;
pub mod traits;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..50]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
