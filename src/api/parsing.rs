use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::errors::BackendError;

pub const PREFLIGHT_METHOD: &str = "OPTIONS";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Normalized API Gateway request.
///
/// Accepts both the REST (payload v1) and HTTP API (payload v2) event shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub http_method: Option<String>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
    pub source_ip: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        let http_method = v_str(payload, &["httpMethod"])
            .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
            .map(str::to_string);
        let source_ip = v_str(payload, &["requestContext", "identity", "sourceIp"])
            .or_else(|| v_str(payload, &["requestContext", "http", "sourceIp"]))
            .filter(|ip| !ip.is_empty())
            .map(str::to_string);

        Self {
            http_method,
            body: v_str(payload, &["body"]).map(str::to_string),
            is_base64_encoded: payload
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            source_ip,
        }
    }

    #[must_use]
    pub fn is_preflight(&self) -> bool {
        self.http_method
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case(PREFLIGHT_METHOD))
    }

    /// Request body as text, base64-decoded when the gateway flagged it.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a base64 body does not decode to UTF-8 text.
    pub fn body_text(&self) -> Result<Option<String>, BackendError> {
        let Some(body) = &self.body else {
            return Ok(None);
        };
        if !self.is_base64_encoded {
            return Ok(Some(body.clone()));
        }
        let bytes = STANDARD
            .decode(body)
            .map_err(|e| BackendError::ParseError(format!("base64 body: {e}")))?;
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| BackendError::ParseError(format!("base64 body: {e}")))
    }

    /// Parse the body as a JSON object; a missing or empty body becomes `{}`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed JSON or a non-object document.
    pub fn json_object_or_empty(&self) -> Result<Map<String, Value>, BackendError> {
        match self.body_text()? {
            Some(text) if !text.is_empty() => parse_json_object(&text),
            _ => Ok(Map::new()),
        }
    }

    /// Parse the body as a JSON object; a missing body is an error.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for a missing body, malformed JSON, or a non-object document.
    pub fn json_object(&self) -> Result<Map<String, Value>, BackendError> {
        let text = self
            .body_text()?
            .ok_or_else(|| BackendError::ParseError("request body is missing".to_string()))?;
        parse_json_object(&text)
    }
}

fn parse_json_object(text: &str) -> Result<Map<String, Value>, BackendError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(BackendError::ParseError(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// String field of a JSON object, or `default` when absent or not a string.
#[must_use]
pub fn str_field_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
