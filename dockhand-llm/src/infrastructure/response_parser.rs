//! JSON extraction from model responses
//!
//! Model output is not guaranteed well-formed JSON: it may be wrapped in
//! markdown code fences, surrounded by narrative text, or carry trailing
//! commas. Two entry points cover the two call sites:
//!
//! - [`ResponseParser::parse_json`]: strict, fence-strip then parse. Used
//!   for repository analysis, where a malformed document must fail the task.
//! - [`ResponseParser::extract_json`]: tolerant, an ordered chain of
//!   strategies, each strictly more permissive than the last and tried only
//!   after the previous one fails:
//!   1. strip a leading code fence,
//!   2. direct parse,
//!   3. parse the substring between the first `{` and the last `}`,
//!   4. strip trailing commas before `}`/`]` and parse once more,
//!   5. fail with a parse error.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::domain::LlmError;

static TRAILING_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("trailing-comma pattern is valid"));

/// Utilities for extracting and parsing JSON from LLM responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Strictly parse a JSON value from a model response.
    ///
    /// Empty content and anything that is not valid JSON after fence
    /// stripping is an error.
    pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, LlmError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Model returned empty content".to_string(),
            ));
        }

        let stripped = Self::strip_code_fences(trimmed);
        serde_json::from_str(&stripped)
            .map_err(|e| LlmError::InvalidResponse(format!("Model response parsing failed: {}", e)))
    }

    /// Leniently extract a JSON value from a model response.
    pub fn extract_json<T: DeserializeOwned>(content: &str) -> Result<T, LlmError> {
        let content = Self::strip_code_fences(content);

        if let Ok(parsed) = serde_json::from_str::<T>(&content) {
            return Ok(parsed);
        }

        if let Some(candidate) = Self::braced_substring(&content)
            && let Ok(parsed) = serde_json::from_str::<T>(candidate)
        {
            return Ok(parsed);
        }

        let relaxed = Self::strip_trailing_commas(&content);
        serde_json::from_str(&relaxed).map_err(|e| {
            LlmError::InvalidResponse(format!(
                "Failed to extract valid JSON from model response: {}",
                e
            ))
        })
    }

    /// Strip a surrounding markdown code fence, including an optional
    /// language tag on the opening line. Content that does not start with a
    /// fence is returned trimmed but otherwise untouched.
    pub fn strip_code_fences(content: &str) -> String {
        let trimmed = content.trim();
        if !trimmed.starts_with("```") {
            return trimmed.to_string();
        }

        let Some(first_newline) = trimmed.find('\n') else {
            return trimmed.to_string();
        };

        let body = &trimmed[first_newline + 1..];
        let body = body.strip_suffix("```").unwrap_or(body);
        body.trim().to_string()
    }

    /// The substring spanning the first `{` through the last `}`, if any.
    fn braced_substring(content: &str) -> Option<&str> {
        let start = content.find('{')?;
        let end = content.rfind('}')?;
        (end > start).then(|| &content[start..=end])
    }

    /// Remove trailing commas before closing braces/brackets, a common model
    /// output defect.
    fn strip_trailing_commas(content: &str) -> String {
        TRAILING_COMMAS.replace_all(content, "$1").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Payload {
        a: i32,
    }

    #[test]
    fn test_extract_json_direct() {
        let parsed: Payload = ResponseParser::extract_json(r#"{"a":1}"#).unwrap();
        assert_eq!(parsed, Payload { a: 1 });
    }

    #[test]
    fn test_extract_json_fenced() {
        let parsed: Payload = ResponseParser::extract_json("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(parsed, Payload { a: 1 });
    }

    #[test]
    fn test_extract_json_fenced_without_language_tag() {
        let parsed: Payload = ResponseParser::extract_json("```\n{\"a\":1}\n```").unwrap();
        assert_eq!(parsed, Payload { a: 1 });
    }

    #[test]
    fn test_extract_json_surrounded_by_text() {
        let parsed: Payload =
            ResponseParser::extract_json("prefix {\"a\":1} suffix").unwrap();
        assert_eq!(parsed, Payload { a: 1 });
    }

    #[test]
    fn test_extract_json_trailing_comma() {
        let parsed: Payload = ResponseParser::extract_json("{\"a\":1,}").unwrap();
        assert_eq!(parsed, Payload { a: 1 });
    }

    #[test]
    fn test_extract_json_trailing_comma_in_array() {
        let parsed: Value = ResponseParser::extract_json("[1, 2, 3,]").unwrap();
        assert_eq!(parsed, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_extract_json_garbage_fails() {
        let result: Result<Payload, _> = ResponseParser::extract_json("not json at all");
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_json_strict_accepts_fenced() {
        let parsed: Payload = ResponseParser::parse_json("```json\n{\"a\":2}\n```").unwrap();
        assert_eq!(parsed, Payload { a: 2 });
    }

    #[test]
    fn test_parse_json_strict_rejects_empty() {
        let result: Result<Payload, _> = ResponseParser::parse_json("   ");
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_json_strict_rejects_surrounding_text() {
        // The strict path must not fall back to substring extraction.
        let result: Result<Payload, _> = ResponseParser::parse_json("prefix {\"a\":1} suffix");
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_strip_code_fences_keeps_plain_text() {
        assert_eq!(ResponseParser::strip_code_fences("  plain  "), "plain");
    }
}
