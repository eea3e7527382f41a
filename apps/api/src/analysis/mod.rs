// Analysis engine: keyword extraction, heuristic scoring, and the AI-assisted
// path with heuristic fallback. All LLM calls go through llm_client — no
// direct Anthropic API calls here.

pub mod ai;
pub mod bullets;
pub mod handlers;
pub mod heuristic;
pub mod keywords;
pub mod lexicon;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// Structured match report returned by both analysis paths.
/// Immutable once built; one instance per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 – 100.0, one decimal place.
    pub score: f64,
    /// JD keywords found in the resume, in relevance/discovery order.
    pub matched_skills: Vec<String>,
    /// JD keywords absent from the resume. Disjoint from `matched_skills`.
    pub missing_skills: Vec<String>,
    /// Before/after bullet suggestions ("Instead of: ... / Use: ..." pairs).
    pub recommendations: Vec<String>,
    /// Standalone new-bullet suggestions.
    pub rewritten_bullets: Vec<String>,
    /// Warnings about factual or stylistic risk.
    pub verification_notes: Vec<String>,
}

/// Analysis input. `resume_text` may be empty (e.g. a failed upload
/// extraction) and is treated as ordinary low-signal input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// Rounds to one decimal place, the precision of the `score` contract.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_half_up() {
        assert_eq!(round1(66.66), 66.7);
        assert_eq!(round1(50.0), 50.0);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn test_match_result_serializes_contract_field_names() {
        let result = MatchResult {
            score: 50.0,
            matched_skills: vec!["python".to_string()],
            missing_skills: vec!["react".to_string()],
            recommendations: vec!["r".to_string()],
            rewritten_bullets: vec!["b".to_string()],
            verification_notes: vec!["n".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "score",
            "matched_skills",
            "missing_skills",
            "recommendations",
            "rewritten_bullets",
            "verification_notes",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
    }

    #[test]
    fn test_analyze_request_deserializes() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"resume_text": "", "job_description": "Rust engineer"}"#,
        )
        .unwrap();
        assert!(request.resume_text.is_empty());
        assert_eq!(request.job_description, "Rust engineer");
    }
}
