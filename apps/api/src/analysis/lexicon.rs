//! Fixed word tables used by the extractors and analyzers.
//!
//! Built once at startup and injected, so unit tests can run the analyzers
//! against overridden tables instead of ambient globals.

use std::collections::HashSet;

/// English function words plus resume/JD boilerplate that carries no signal.
const STOP_WORDS: &[&str] = &[
    // function words (tokens of length <= 2 never reach the filter)
    "the", "and", "for", "are", "but", "not", "you", "your", "all", "can",
    "had", "has", "have", "her", "his", "him", "its", "may", "our", "out",
    "she", "was", "were", "will", "with", "that", "this", "they", "them",
    "then", "than", "from", "what", "when", "where", "which", "who", "whom",
    "why", "how", "been", "being", "both", "did", "does", "doing", "each",
    "few", "more", "most", "other", "over", "same", "some", "such", "too",
    "very", "while", "about", "above", "after", "again", "against", "any",
    "because", "before", "below", "between", "during", "further", "here",
    "into", "once", "only", "own", "should", "there", "these", "those",
    "through", "under", "until", "would", "could", "also", "just", "like",
    "using", "within",
    // resume / job-posting boilerplate
    "skills", "skill", "experience", "experienced", "job", "jobs", "role",
    "roles", "responsibilities", "responsibility", "responsible", "required",
    "requirements", "require", "preferred", "qualifications", "candidate",
    "candidates", "position", "company", "team", "teams", "work", "working",
    "years", "year", "ability", "able", "strong", "knowledge", "including",
    "include", "must", "plus", "looking", "seeking", "join", "etc",
];

/// Verbs that mark a line as an achievement bullet when it leads with one.
const ACHIEVEMENT_VERBS: &[&str] = &[
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "managed",
    "led",
    "improved",
    "optimized",
];

/// Boilerplate phrases that suggest the resume copies the JD wholesale.
const COPIED_PHRASES: &[&str] = &["responsible for", "duties include", "required skills"];

/// Filler words that should be replaced with specifics.
const VAGUE_WORDS: &[&str] = &["some", "various", "several", "many", "extensive"];

/// Immutable word tables shared by the keyword extractor, bullet extractor,
/// and heuristic analyzer. Construct once, share via `Arc`.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stop_words: HashSet<&'static str>,
    pub achievement_verbs: &'static [&'static str],
    pub copied_phrases: &'static [&'static str],
    pub vague_words: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            achievement_verbs: ACHIEVEMENT_VERBS,
            copied_phrases: COPIED_PHRASES,
            vague_words: VAGUE_WORDS,
        }
    }
}

impl Lexicon {
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_populated() {
        let lexicon = Lexicon::default();
        assert!(lexicon.stop_words.len() > 50);
        assert_eq!(lexicon.achievement_verbs.len(), 9);
        assert_eq!(lexicon.copied_phrases.len(), 3);
        assert_eq!(lexicon.vague_words.len(), 5);
    }

    #[test]
    fn test_function_words_are_stop_words() {
        let lexicon = Lexicon::default();
        for word in ["the", "and", "for", "looking", "experience"] {
            assert!(lexicon.is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_technical_terms_are_not_stop_words() {
        let lexicon = Lexicon::default();
        for word in ["python", "react", "sql", "kubernetes"] {
            assert!(!lexicon.is_stop_word(word), "{word} should survive");
        }
    }
}
