//! Parsing of the model's reply text

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{AppResult, RelayError};

/// A reply wrapped in a markdown code fence, optionally tagged `json`
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```(?:json|JSON)?[ \t]*\r?\n?(.*?)\r?\n?```\s*$")
        .expect("code fence pattern is valid")
});

/// Parse the reply text as JSON
///
/// With `strip_code_fences` set, a reply that fails the strict parse but is
/// wrapped in a code fence is parsed again from the fenced body.
pub fn parse_reply(content: &str, strip_code_fences: bool) -> AppResult<Value> {
    let strict_err = match serde_json::from_str(content) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if strip_code_fences {
        if let Some(inner) = CODE_FENCE.captures(content).and_then(|c| c.get(1)) {
            return serde_json::from_str(inner.as_str())
                .map_err(|e| RelayError::UpstreamParse(e.to_string()));
        }
    }

    Err(RelayError::UpstreamParse(strict_err.to_string()))
}

/// Require the parsed reply to be an object so its keys can be merged
pub fn into_object(value: Value) -> AppResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(RelayError::UpstreamParse(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
