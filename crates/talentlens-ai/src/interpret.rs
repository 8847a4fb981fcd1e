//! Interpretation of free-form model output into a typed analysis result.
//!
//! Models frequently wrap the requested JSON in prose or markdown code
//! fences. The interpreter strips fences, scans for the first balanced
//! top-level JSON object, and maps each expected key with a per-field
//! default. It never fails: unparseable input degrades to a default result
//! carrying the raw text in the `analysis` field so nothing is lost.

use serde_json::Value;
use talentlens_core::{AnalysisResult, DEFAULT_MATCH_SCORE};
use tracing::debug;

/// Interpret a model's textual answer as an [`AnalysisResult`].
pub fn interpret(raw: &str) -> AnalysisResult {
    let cleaned = strip_code_fences(raw);

    if let Some(json_str) = extract_json_object(&cleaned) {
        match serde_json::from_str::<Value>(json_str) {
            Ok(value) => return from_json(&value),
            Err(e) => debug!("Extracted JSON candidate failed to parse: {}", e),
        }
    }

    // No usable JSON: keep the full raw text in the analysis field.
    AnalysisResult {
        analysis: raw.to_string(),
        ..Default::default()
    }
}

fn from_json(value: &Value) -> AnalysisResult {
    AnalysisResult {
        candidate_name: string_field(value, "candidateName"),
        email: string_field(value, "email"),
        phone: string_field(value, "phone"),
        match_score: score_field(value, "matchScore"),
        extracted_skills: string_field(value, "extractedSkills"),
        extracted_experience: string_field(value, "extractedExperience"),
        analysis: string_field(value, "analysis"),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Accept the score as a number or a numeric string; anything else falls
/// back to the neutral default. The result is clamped to the 0-100 range.
fn score_field(value: &Value, key: &str) -> f64 {
    let score = match value.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    score.unwrap_or(DEFAULT_MATCH_SCORE).clamp(0.0, 100.0)
}

/// Remove markdown code-fence markers so a fenced JSON block scans cleanly.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Find the first balanced top-level JSON object in the text.
///
/// Brace matching is string- and escape-aware, so braces inside string
/// values do not confuse the scan, and nesting depth is unbounded.
fn extract_json_object(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_json_text_degrades_to_default() {
        let raw = "I could not produce a structured answer.";
        let result = interpret(raw);
        assert_eq!(result.match_score, DEFAULT_MATCH_SCORE);
        assert_eq!(result.analysis, raw);
        assert!(result.candidate_name.is_empty());
        assert!(result.email.is_empty());
    }

    #[test]
    fn test_empty_input_never_panics() {
        let result = interpret("");
        assert_eq!(result.match_score, DEFAULT_MATCH_SCORE);
        assert_eq!(result.analysis, "");
    }

    #[test]
    fn test_full_round_trip() {
        let raw = r#"{
            "candidateName": "John Doe",
            "email": "john.doe@example.com",
            "phone": "+1 555 0100",
            "matchScore": 85,
            "extractedSkills": "Java, Spring Boot",
            "extractedExperience": "6 years backend development",
            "analysis": "Strong match for the role."
        }"#;

        let result = interpret(raw);
        assert_eq!(result.candidate_name, "John Doe");
        assert_eq!(result.email, "john.doe@example.com");
        assert_eq!(result.phone, "+1 555 0100");
        assert_eq!(result.match_score, 85.0);
        assert_eq!(result.extracted_skills, "Java, Spring Boot");
        assert_eq!(result.extracted_experience, "6 years backend development");
        assert_eq!(result.analysis, "Strong match for the role.");
    }

    #[test]
    fn test_json_inside_code_fence_and_prose() {
        let raw = "Here is my assessment:\n```json\n{\"matchScore\": 72, \"analysis\": \"Fair\"}\n```\nLet me know if you need more.";
        let result = interpret(raw);
        assert_eq!(result.match_score, 72.0);
        assert_eq!(result.analysis, "Fair");
    }

    #[test]
    fn test_score_as_numeric_string() {
        let result = interpret(r#"{"matchScore": "64.5"}"#);
        assert_eq!(result.match_score, 64.5);
    }

    #[test]
    fn test_score_missing_or_garbage_defaults() {
        assert_eq!(
            interpret(r#"{"analysis": "ok"}"#).match_score,
            DEFAULT_MATCH_SCORE
        );
        assert_eq!(
            interpret(r#"{"matchScore": "high"}"#).match_score,
            DEFAULT_MATCH_SCORE
        );
    }

    #[test]
    fn test_score_clamped_to_range() {
        assert_eq!(interpret(r#"{"matchScore": 250}"#).match_score, 100.0);
        assert_eq!(interpret(r#"{"matchScore": -5}"#).match_score, 0.0);
    }

    #[test]
    fn test_nested_object_and_braces_in_strings() {
        let raw = r#"noise {"matchScore": 90, "analysis": "uses {braces} and \"quotes\"", "extra": {"nested": true}} trailing"#;
        let result = interpret(raw);
        assert_eq!(result.match_score, 90.0);
        assert_eq!(result.analysis, r#"uses {braces} and "quotes""#);
    }

    #[test]
    fn test_unbalanced_braces_degrade_to_default() {
        let raw = r#"{"matchScore": 80, "analysis": "truncated"#;
        let result = interpret(raw);
        assert_eq!(result.match_score, DEFAULT_MATCH_SCORE);
        assert_eq!(result.analysis, raw);
    }

    #[test]
    fn test_extract_json_object() {
        assert_eq!(extract_json_object(r#"x {"a": 1} y"#), Some(r#"{"a": 1}"#));
        assert_eq!(extract_json_object("no braces"), None);
        assert_eq!(
            extract_json_object(r#"{"a": {"b": 2}}"#),
            Some(r#"{"a": {"b": 2}}"#)
        );
    }
}
