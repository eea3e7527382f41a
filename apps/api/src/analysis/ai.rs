//! AI analyzer — orchestrates the LLM-assisted path and its degradation to
//! the heuristic path.
//!
//! `analyze` never fails: no credential, a transport error, a timeout, or a
//! malformed/ill-typed LLM response all produce a fresh heuristic result for
//! the original request. The caller cannot observe which path ran except
//! through result quality.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::analysis::heuristic::HeuristicAnalyzer;
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::{round1, AnalyzeRequest, MatchResult};
use crate::llm_client::{LlmClient, LlmError};

/// Dual-path analyzer: LLM when a credential is configured, heuristic
/// otherwise or on any LLM-path failure.
pub struct AiAnalyzer {
    llm: Option<LlmClient>,
    heuristic: HeuristicAnalyzer,
}

impl AiAnalyzer {
    pub fn new(llm: Option<LlmClient>, heuristic: HeuristicAnalyzer) -> Self {
        Self { llm, heuristic }
    }

    /// Produces a match report. Infallible by contract: every failure on the
    /// AI path is masked by delegating to the heuristic analyzer.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> MatchResult {
        let Some(llm) = &self.llm else {
            debug!("no LLM credential configured; using heuristic analysis");
            return self.heuristic.analyze(request);
        };

        match self.analyze_with_llm(llm, request).await {
            Ok(result) => result,
            Err(e) => {
                warn!("AI analysis failed, falling back to heuristic: {e}");
                self.heuristic.analyze(request)
            }
        }
    }

    async fn analyze_with_llm(
        &self,
        llm: &LlmClient,
        request: &AnalyzeRequest,
    ) -> Result<MatchResult, LlmError> {
        let prompt = ANALYSIS_PROMPT_TEMPLATE
            .replace("{job_description}", &request.job_description)
            .replace("{resume_text}", &request.resume_text);

        let text = llm.call_text(&prompt, ANALYSIS_SYSTEM).await?;
        parse_match_result(&text)
    }
}

/// Validates the LLM's JSON output against the analysis schema and maps it
/// onto `MatchResult`. Each field is checked independently: `score` must be
/// numeric, list fields default to empty when absent and coerce non-string
/// elements to their JSON rendering. Any structural failure is an error that
/// sends the caller down the fallback path.
pub fn parse_match_result(text: &str) -> Result<MatchResult, LlmError> {
    let value: Value = serde_json::from_str(text)?;
    let object = value
        .as_object()
        .ok_or(LlmError::Schema("top-level value is not an object"))?;

    let score = object
        .get("score")
        .and_then(Value::as_f64)
        .ok_or(LlmError::Schema("score is missing or not numeric"))?;
    let score = round1(score.clamp(0.0, 100.0));

    let matched_skills = string_list(object, "matched_keywords");
    let mut missing_skills = string_list(object, "missing_keywords");

    // keep the disjointness invariant even when the model repeats itself
    let matched_set: HashSet<&str> = matched_skills.iter().map(String::as_str).collect();
    missing_skills.retain(|skill| !matched_set.contains(skill.as_str()));

    Ok(MatchResult {
        score,
        matched_skills,
        missing_skills,
        recommendations: string_list(object, "optimal_points"),
        rewritten_bullets: string_list(object, "rewritten_bullets"),
        verification_notes: string_list(object, "verification_notes"),
    })
}

fn string_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicon;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn heuristic() -> HeuristicAnalyzer {
        HeuristicAnalyzer::new(Arc::new(Lexicon::default()))
    }

    fn request() -> AnalyzeRequest {
        AnalyzeRequest {
            resume_text: "Built REST APIs using Python and SQL.".to_string(),
            job_description: "Looking for Python, FastAPI, React, and SQL experience.".to_string(),
        }
    }

    fn anthropic_body(text: &str) -> Value {
        json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 10, "output_tokens": 10}
        })
    }

    async fn mock_llm(server: &MockServer, response: ResponseTemplate) -> LlmClient {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(response)
            .mount(server)
            .await;
        LlmClient::with_api_url(
            "test-key".to_string(),
            format!("{}/v1/messages", server.uri()),
        )
    }

    #[test]
    fn test_parse_valid_payload() {
        let result = parse_match_result(
            r#"{
                "score": 72.46,
                "matched_keywords": ["python"],
                "missing_keywords": ["react"],
                "optimal_points": ["Instead of: x\nUse: y"],
                "rewritten_bullets": ["Shipped a thing"],
                "verification_notes": ["Check the thing"]
            }"#,
        )
        .unwrap();
        assert_eq!(result.score, 72.5);
        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.missing_skills, vec!["react"]);
    }

    #[test]
    fn test_parse_clamps_out_of_range_score() {
        let result = parse_match_result(r#"{"score": 250}"#).unwrap();
        assert_eq!(result.score, 100.0);
        let result = parse_match_result(r#"{"score": -3}"#).unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_parse_defaults_absent_lists_to_empty() {
        let result = parse_match_result(r#"{"score": 10}"#).unwrap();
        assert!(result.matched_skills.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(result.verification_notes.is_empty());
    }

    #[test]
    fn test_parse_coerces_non_string_elements() {
        let result =
            parse_match_result(r#"{"score": 10, "matched_keywords": [1, "sql", true]}"#).unwrap();
        assert_eq!(result.matched_skills, vec!["1", "sql", "true"]);
    }

    #[test]
    fn test_parse_enforces_disjoint_matched_missing() {
        let result = parse_match_result(
            r#"{"score": 10, "matched_keywords": ["python"], "missing_keywords": ["python", "react"]}"#,
        )
        .unwrap();
        assert_eq!(result.missing_skills, vec!["react"]);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_match_result("I am not JSON, sorry").is_err());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            parse_match_result("[1, 2, 3]"),
            Err(LlmError::Schema(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_score() {
        assert!(matches!(
            parse_match_result(r#"{"matched_keywords": []}"#),
            Err(LlmError::Schema(_))
        ));
    }

    #[tokio::test]
    async fn test_no_credential_delegates_to_heuristic() {
        let req = request();
        let analyzer = AiAnalyzer::new(None, heuristic());
        assert_eq!(analyzer.analyze(&req).await, heuristic().analyze(&req));
    }

    #[tokio::test]
    async fn test_garbage_llm_output_falls_back_to_heuristic() {
        let server = MockServer::start().await;
        let llm = mock_llm(
            &server,
            ResponseTemplate::new(200).set_body_json(anthropic_body("definitely not json")),
        )
        .await;

        let req = request();
        let analyzer = AiAnalyzer::new(Some(llm), heuristic());
        assert_eq!(analyzer.analyze(&req).await, heuristic().analyze(&req));
    }

    #[tokio::test]
    async fn test_server_error_falls_back_to_heuristic() {
        let server = MockServer::start().await;
        let llm = mock_llm(&server, ResponseTemplate::new(500)).await;

        let req = request();
        let analyzer = AiAnalyzer::new(Some(llm), heuristic());
        assert_eq!(analyzer.analyze(&req).await, heuristic().analyze(&req));
    }

    #[tokio::test]
    async fn test_valid_llm_output_is_used_directly() {
        let payload = r#"{"score": 88.0, "matched_keywords": ["python", "sql"], "missing_keywords": ["react"], "optimal_points": ["Instead of: a\nUse: b"], "rewritten_bullets": ["Shipped X"], "verification_notes": ["Check X"]}"#;
        let server = MockServer::start().await;
        let llm = mock_llm(
            &server,
            ResponseTemplate::new(200).set_body_json(anthropic_body(payload)),
        )
        .await;

        let analyzer = AiAnalyzer::new(Some(llm), heuristic());
        let result = analyzer.analyze(&request()).await;
        assert_eq!(result.score, 88.0);
        assert_eq!(result.matched_skills, vec!["python", "sql"]);
        assert_eq!(result.rewritten_bullets, vec!["Shipped X"]);
    }

    #[tokio::test]
    async fn test_fenced_json_output_is_accepted() {
        let payload = "```json\n{\"score\": 42.0}\n```";
        let server = MockServer::start().await;
        let llm = mock_llm(
            &server,
            ResponseTemplate::new(200).set_body_json(anthropic_body(payload)),
        )
        .await;

        let analyzer = AiAnalyzer::new(Some(llm), heuristic());
        let result = analyzer.analyze(&request()).await;
        assert_eq!(result.score, 42.0);
    }
}
