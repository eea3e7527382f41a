// LLM prompt constants for the analysis module.

/// System prompt for resume analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert resume analyst and ATS optimization specialist. \
    Compare a candidate resume against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Analysis prompt template. Replace `{job_description}` and `{resume_text}`
/// before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Compare the resume against the job description and produce a match report.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 72.5,
  "matched_keywords": ["python", "sql"],
  "missing_keywords": ["kubernetes", "terraform"],
  "optimal_points": [
    "Instead of: \"Responsible for data pipelines\"\nUse: \"Built Python data pipelines processing 2M records daily\""
  ],
  "rewritten_bullets": [
    "Deployed containerized services on Kubernetes, cutting release time by 40%"
  ],
  "verification_notes": [
    "Confirm the claimed 40% release-time improvement is measurable"
  ]
}

Rules:
- "score" is a number from 0 to 100 measuring how well the resume covers the job requirements.
- "matched_keywords": job-description keywords present in the resume, most relevant first.
- "missing_keywords": job-description keywords absent from the resume; never repeat a matched keyword.
- "optimal_points": before/after rewrite suggestions as "Instead of: ...\nUse: ..." pairs.
- "rewritten_bullets": new standalone bullet suggestions incorporating missing keywords.
- "verification_notes": warnings about claims the candidate must verify before using; never invent facts.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}"#;
