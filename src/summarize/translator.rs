//! Token-wise English to Urdu substitution.

use std::collections::HashMap;

use super::dictionary::ENGLISH_TO_URDU;

/// Renders text into another language.
///
/// Callers only see `translate`, so a real translation service can replace
/// the dictionary without touching them.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Substitutes whole tokens found in a closed vocabulary.
///
/// Tokens are matched lower-cased; misses (including tokens with attached
/// punctuation such as `"summary."`) pass through verbatim.
#[derive(Debug, Clone)]
pub struct DictionaryTranslator {
    dictionary: HashMap<String, String>,
}

impl DictionaryTranslator {
    /// Build a translator over a custom vocabulary. Keys should be lower-case.
    pub fn with_dictionary(dictionary: HashMap<String, String>) -> Self {
        Self { dictionary }
    }
}

impl Default for DictionaryTranslator {
    /// The built-in English to Urdu vocabulary.
    fn default() -> Self {
        let dictionary = ENGLISH_TO_URDU
            .iter()
            .map(|(en, ur)| (en.to_string(), ur.to_string()))
            .collect();
        Self { dictionary }
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| {
                self.dictionary
                    .get(&token.to_lowercase())
                    .map(String::as_str)
                    .unwrap_or(token)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tokens_hit() {
        let translator = DictionaryTranslator::default();
        assert_eq!(translator.translate("happy and strong"), "خوش اور مضبوط");
    }

    #[test]
    fn test_attached_punctuation_passes_through() {
        let translator = DictionaryTranslator::default();
        assert_eq!(translator.translate("Happy, strong"), "Happy, مضبوط");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let translator = DictionaryTranslator::default();
        assert_eq!(translator.translate("HAPPY"), "خوش");
    }

    #[test]
    fn test_misses_keep_their_casing() {
        let translator = DictionaryTranslator::default();
        assert_eq!(translator.translate("Rust is Fast"), "Rust ہے تیز");
    }

    #[test]
    fn test_whitespace_runs_rejoined_with_single_space() {
        let translator = DictionaryTranslator::default();
        assert_eq!(translator.translate("  zebra \n  quagga "), "zebra quagga");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(DictionaryTranslator::default().translate(""), "");
    }

    #[test]
    fn test_custom_dictionary() {
        let translator = DictionaryTranslator::with_dictionary(HashMap::from([(
            "hello".to_string(),
            "ہیلو".to_string(),
        )]));
        assert_eq!(translator.translate("Hello world"), "ہیلو world");
    }
}
