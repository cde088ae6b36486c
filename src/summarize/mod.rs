//! Extractive summaries and word-level translation.
//!
//! The summary is positional: the leading sentences of the body, verbatim.

pub mod dictionary;
pub mod translator;

use std::sync::LazyLock;

use regex::Regex;

pub use translator::{DictionaryTranslator, Translator};

/// Number of leading sentences kept in a summary.
pub const SUMMARY_SENTENCES: usize = 2;

/// A run of non-terminal characters closed by one or more of `.`, `!`, `?`.
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Summarize body text as its first two sentences.
pub fn summarize(text: &str) -> String {
    first_sentences(text, SUMMARY_SENTENCES)
}

/// Return the first `count` sentences of `text`, each trimmed and joined by a
/// single space. Trailing text without terminal punctuation is not a sentence.
pub fn first_sentences(text: &str, count: usize) -> String {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_two_sentences() {
        assert_eq!(summarize("One. Two! Three?"), "One. Two!");
    }

    #[test]
    fn test_no_terminal_punctuation_is_empty() {
        assert_eq!(summarize("no sentence ends here"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn test_single_sentence() {
        assert_eq!(summarize("Only one sentence."), "Only one sentence.");
    }

    #[test]
    fn test_trailing_fragment_dropped() {
        assert_eq!(summarize("First. and then nothing"), "First.");
    }

    #[test]
    fn test_punctuation_runs_stay_with_sentence() {
        assert_eq!(summarize("Wait... what?! Yes."), "Wait... what?!");
    }

    #[test]
    fn test_first_sentences_count() {
        let text = "A. B. C. D.";
        assert_eq!(first_sentences(text, 3), "A. B. C.");
        assert_eq!(first_sentences(text, 0), "");
        assert_eq!(first_sentences(text, 10), "A. B. C. D.");
    }
}
