//! Health analysis schema and recovery of JSON from model output.
//!
//! Text-analysis providers answer in prose that usually, but not always,
//! wraps a single JSON object. [`extract_json`] slices that object out and
//! applies a fixed set of repairs before giving up.
//!
//! The slicing is a brace heuristic, not a parser: it takes everything from
//! the first `{` to the last `}`. Prose containing a `}` before the object or
//! a `{` after it will produce a wrong slice. This is a known limitation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static TRAILING_COMMA_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\}").expect("static regex is valid"));

static TRAILING_COMMA_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\]").expect("static regex is valid"));

/// Why a structured object could not be recovered.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The provider returned nothing but whitespace
    #[error("Error from text-analysis provider. No content returned")]
    NoContent,

    /// No `{ ... }` span was found
    #[error("Response does not contain valid JSON")]
    NoJson,

    /// The sliced span was still invalid after repair
    #[error("Response JSON could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Analysis returned by the summarize endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    /// Whether the text discusses health at all
    pub is_health_related: bool,
    /// Whether there was enough context for all three analysis fields
    pub has_enough_info: bool,
    /// Explanation when the text could not be analyzed
    pub error_message: Option<String>,
    /// Present only when the text was health related with enough info
    pub analysis: Option<AnalysisDetails>,
}

/// The three analysis fields of a [`HealthAnalysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub background: Option<String>,
    pub concerns: Option<String>,
    pub key_questions: Option<String>,
}

/// Recover a JSON object of type `T` from free-form text.
///
/// Steps: trim, slice from the first `{` to the last `}`, parse. If that
/// parse fails, line breaks are removed and trailing commas before `}` or `]`
/// are dropped, and the result is parsed exactly once more. A failure of that
/// second parse is returned as [`ExtractionError::Malformed`].
pub fn extract_json<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractionError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(ExtractionError::NoContent);
    }

    let span = json_span(content).ok_or(ExtractionError::NoJson)?;

    if let Ok(value) = serde_json::from_str(span) {
        return Ok(value);
    }

    let repaired = repair(span);
    Ok(serde_json::from_str(&repaired)?)
}

/// Slice from the first `{` to the last `}` inclusive.
fn json_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

/// Apply the fixed set of repairs, in order.
fn repair(span: &str) -> String {
    let without_breaks = span.replace(['\r', '\n'], "");
    let objects_fixed = TRAILING_COMMA_OBJECT.replace_all(&without_breaks, "}");
    TRAILING_COMMA_ARRAY
        .replace_all(&objects_fixed, "]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_extracts_exact_schema_object() {
        let raw = r#"  {"isHealthRelated":true,"hasEnoughInfo":true,"errorMessage":null,"analysis":{"background":"x","concerns":"y","keyQuestions":"z"}}  "#;

        let analysis: HealthAnalysis = extract_json(raw).unwrap();

        assert_eq!(
            analysis,
            HealthAnalysis {
                is_health_related: true,
                has_enough_info: true,
                error_message: None,
                analysis: Some(AnalysisDetails {
                    background: Some("x".to_string()),
                    concerns: Some("y".to_string()),
                    key_questions: Some("z".to_string()),
                }),
            }
        );
    }

    #[test]
    fn test_repairs_trailing_comma_in_prose() {
        let value: Value = extract_json(r#"Here is the result: {"a":1,}"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_repairs_trailing_comma_in_array_and_line_breaks() {
        let raw = "Sure!\n{\r\n  \"items\": [1, 2,\n],\n  \"ok\": true,\n}\nThanks.";
        let value: Value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"items": [1, 2], "ok": true}));
    }

    #[test]
    fn test_no_braces_is_no_json() {
        let result = extract_json::<Value>("no braces here");
        assert!(matches!(result, Err(ExtractionError::NoJson)));
    }

    #[test]
    fn test_only_opening_brace_is_no_json() {
        let result = extract_json::<Value>("starts { but never closes");
        assert!(matches!(result, Err(ExtractionError::NoJson)));
    }

    #[test]
    fn test_reversed_braces_is_no_json() {
        let result = extract_json::<Value>("} backwards {");
        assert!(matches!(result, Err(ExtractionError::NoJson)));
    }

    #[test]
    fn test_empty_and_whitespace_are_no_content() {
        assert!(matches!(
            extract_json::<Value>(""),
            Err(ExtractionError::NoContent)
        ));
        assert!(matches!(
            extract_json::<Value>(" \n\t "),
            Err(ExtractionError::NoContent)
        ));
    }

    #[test]
    fn test_still_invalid_after_repair_is_malformed() {
        // Unquoted key survives every repair, so the second parse must fail
        let result = extract_json::<Value>(r#"{"a": 1, b: 2,}"#);
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_valid_json_is_not_rewritten() {
        // The repair step would turn ", }" inside the string into "}"
        let value: Value = extract_json(r#"{"text": "a, }"}"#).unwrap();
        assert_eq!(value["text"], "a, }");
    }

    #[test]
    fn test_schema_mismatch_is_malformed() {
        let result = extract_json::<HealthAnalysis>(r#"{"a":1}"#);
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_brace_heuristic_takes_outermost_span() {
        // Known limitation: a stray brace in trailing prose widens the slice
        let result = extract_json::<Value>(r#"{"a":1} and then {oops}"#);
        assert!(result.is_err());
    }
}
