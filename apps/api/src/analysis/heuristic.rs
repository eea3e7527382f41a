//! Heuristic analyzer — deterministic coverage scoring and recommendation
//! generation. Always available; the fallback for every AI-path failure.

use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::bullets::extract_bullet_points;
use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::{round1, AnalyzeRequest, MatchResult};

const JD_KEYWORD_LIMIT: usize = 40;
const RESUME_KEYWORD_LIMIT: usize = 120;
/// Only the first few bullets and missing keywords drive suggestions; the
/// rest is noise for a reader.
const SUGGESTION_BULLET_LIMIT: usize = 5;
const SUGGESTION_KEYWORD_LIMIT: usize = 3;
const REWRITE_KEYWORD_LIMIT: usize = 3;
const INSTEAD_TRUNCATE: usize = 80;
const USE_TRUNCATE: usize = 60;

/// A percentage, a dollar amount, or a count of users/clients/customers/
/// projects. Resumes matching none of these get a metrics warning.
const METRIC_PATTERN: &str = r"\d+%|\$\d+|\d+\s+(users|clients|customers|projects)";

/// Pure keyword-coverage analyzer. No I/O, no external calls, never fails.
pub struct HeuristicAnalyzer {
    lexicon: Arc<Lexicon>,
    keywords: KeywordExtractor,
    metric_pattern: Regex,
}

impl HeuristicAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            keywords: KeywordExtractor::new(Arc::clone(&lexicon)),
            metric_pattern: Regex::new(METRIC_PATTERN).expect("metric pattern is valid"),
            lexicon,
        }
    }

    /// Scores the resume against the JD and builds the full report.
    /// Deterministic: identical inputs produce identical output. Every list
    /// field of the result is non-empty (generic fallbacks fill the gaps).
    pub fn analyze(&self, request: &AnalyzeRequest) -> MatchResult {
        let jd_keywords = self.keywords.extract(&request.job_description, JD_KEYWORD_LIMIT);
        let resume_keywords: HashSet<String> = self
            .keywords
            .extract(&request.resume_text, RESUME_KEYWORD_LIMIT)
            .into_iter()
            .collect();

        let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
            .iter()
            .cloned()
            .partition(|keyword| resume_keywords.contains(keyword));

        let coverage = matched.len() as f64 / jd_keywords.len().max(1) as f64;
        let score = round1(coverage * 100.0);

        MatchResult {
            score,
            recommendations: self.build_recommendations(&request.resume_text, &missing),
            rewritten_bullets: build_rewritten_bullets(&missing),
            verification_notes: self.build_verification_notes(request),
            matched_skills: matched,
            missing_skills: missing,
        }
    }

    /// Before/after suggestions: for each of the first 5 resume bullets, the
    /// first of the top 3 missing keywords not already in the bullet yields
    /// an "Instead of / Use" pair.
    fn build_recommendations(&self, resume_text: &str, missing: &[String]) -> Vec<String> {
        let bullets = extract_bullet_points(&self.lexicon, resume_text);
        let mut recommendations = Vec::new();

        for bullet in bullets.iter().take(SUGGESTION_BULLET_LIMIT) {
            let bullet_lower = bullet.to_lowercase();
            let keyword = missing
                .iter()
                .take(SUGGESTION_KEYWORD_LIMIT)
                .find(|keyword| !bullet_lower.contains(keyword.as_str()));
            if let Some(keyword) = keyword {
                recommendations.push(format!(
                    "Instead of: \"{}\"\nUse: \"{} using {} with measurable impact\"",
                    truncate_with_ellipsis(bullet, INSTEAD_TRUNCATE),
                    char_prefix(bullet, USE_TRUNCATE),
                    title_case(keyword),
                ));
            }
        }

        if recommendations.is_empty() {
            recommendations.push(
                "Instead of: \"Responsible for team projects\"\n\
                 Use: \"Led a cross-functional team delivering 12 projects on schedule, \
                 improving delivery time by 25%\""
                    .to_string(),
            );
        }
        recommendations
    }

    fn build_verification_notes(&self, request: &AnalyzeRequest) -> Vec<String> {
        let resume_lower = request.resume_text.to_lowercase();
        let jd_lower = request.job_description.to_lowercase();
        let mut notes = Vec::new();

        let copied = self
            .lexicon
            .copied_phrases
            .iter()
            .filter(|phrase| resume_lower.contains(**phrase) && jd_lower.contains(**phrase))
            .count();
        if copied > 2 {
            notes.push(
                "Resume repeats boilerplate phrases from the job description; \
                 rephrase copied language in your own words."
                    .to_string(),
            );
        }

        if !self.metric_pattern.is_match(&resume_lower) {
            notes.push(
                "Resume lacks quantifiable metrics; add percentages, dollar amounts, \
                 or counts of users, clients, customers, or projects."
                    .to_string(),
            );
        }

        let vague = self
            .lexicon
            .vague_words
            .iter()
            .filter(|word| resume_lower.contains(**word))
            .count();
        if vague > 3 {
            notes.push(
                "Replace vague terms (some, various, several, many, extensive) \
                 with specific numbers and named technologies."
                    .to_string(),
            );
        }

        if notes.is_empty() {
            notes.push(
                "Verify that all claimed projects and metrics are factually correct.".to_string(),
            );
            notes.push(
                "Do not add tools or skills you have never used in practice.".to_string(),
            );
        }
        notes
    }
}

/// Templated new-bullet suggestions for the top missing keywords.
fn build_rewritten_bullets(missing: &[String]) -> Vec<String> {
    let mut rewritten: Vec<String> = missing
        .iter()
        .take(REWRITE_KEYWORD_LIMIT)
        .map(|keyword| {
            format!(
                "Example optimized bullet: Developed {keyword} solution that improved \
                 [metric] by [X]%, demonstrating expertise in {keyword} and alignment \
                 with job requirements."
            )
        })
        .collect();

    if rewritten.is_empty() {
        rewritten.push(
            "Optimized sample bullet: Delivered end-to-end features aligned with every \
             keyword the job description emphasizes."
                .to_string(),
        );
        rewritten.push(
            "Optimized sample bullet: Improved ATS score by mirroring the job \
             description's terminology for tools you have actually used."
                .to_string(),
        );
    }
    rewritten
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", char_prefix(text, max_chars))
    }
}

fn char_prefix(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Uppercases the first letter of each alphabetic run ("node.js" -> "Node.Js").
fn title_case(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut at_word_start = true;
    for c in keyword.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
