//! Keyword extraction — turns free text into a frequency-ranked keyword list.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::lexicon::Lexicon;

/// Tokens start with a letter and may continue with letters, digits and
/// `+ # - .` so that "c++", "c#" and "node.js" survive intact.
const TOKEN_PATTERN: &str = r"[a-z][a-z0-9+#.\-]*";

/// Frequency-ranked keyword extractor. Pure: same text in, same list out.
pub struct KeywordExtractor {
    token_pattern: Regex,
    lexicon: Arc<Lexicon>,
}

impl KeywordExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            token_pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is valid"),
            lexicon,
        }
    }

    /// Returns the `max_keywords` most frequent significant tokens, most
    /// frequent first; ties keep first-seen order. Tokens of length <= 2 and
    /// stop words are discarded. Empty input yields an empty list.
    pub fn extract(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let lowered = text.to_lowercase();

        // first-seen order preserved so the final sort can be a stable
        // reorder by frequency alone
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in self.token_pattern.find_iter(&lowered) {
            // trailing '.'/'-' is sentence punctuation, not part of the token
            let token = token.as_str().trim_end_matches(['.', '-']);
            if token.chars().count() <= 2 || self.lexicon.is_stop_word(token) {
                continue;
            }
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    order.push(token.to_string());
                    counts.insert(token.to_string(), 1);
                }
            }
        }

        order.sort_by_key(|token| std::cmp::Reverse(counts[token]));
        order.truncate(max_keywords);
        order
    }
}
