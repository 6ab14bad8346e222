//! Normalized response type and the CORS header sets attached to it.
//!
//! Every response a handler returns, including preflight and error replies,
//! carries the full header set of its [`CorsPolicy`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON document, already encoded.
    pub body: String,
}

impl ApiResponse {
    /// Decoded body, `Value::Null` if it is not JSON.
    #[must_use]
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_headers: &'static str,
    pub allow_methods: &'static str,
}

impl CorsPolicy {
    /// Contact form: POST only, may carry an Authorization header.
    pub const CONTACT: CorsPolicy = CorsPolicy {
        allow_headers: "Content-Type,Authorization",
        allow_methods: "POST,OPTIONS",
    };

    /// Visitor log and repository activity.
    pub const PUBLIC: CorsPolicy = CorsPolicy {
        allow_headers: "Content-Type",
        allow_methods: "GET, POST, OPTIONS",
    };

    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        [
            ("Content-Type", "application/json"),
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Headers", self.allow_headers),
            ("Access-Control-Allow-Methods", self.allow_methods),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[must_use]
    pub fn json(&self, status_code: u16, body: &Value) -> ApiResponse {
        ApiResponse {
            status_code,
            headers: self.headers(),
            body: body.to_string(),
        }
    }

    /// Returns an error response with the given status code and message.
    #[must_use]
    pub fn error(&self, status_code: u16, message: &str) -> ApiResponse {
        self.json(status_code, &json!({ "error": message }))
    }

    /// Error response that also carries the underlying failure text.
    #[must_use]
    pub fn error_with_details(&self, status_code: u16, message: &str, details: &str) -> ApiResponse {
        self.json(
            status_code,
            &json!({ "error": message, "details": details }),
        )
    }

    #[must_use]
    pub fn ok(&self) -> ApiResponse {
        self.json(200, &json!({ "ok": true }))
    }

    #[must_use]
    pub fn preflight(&self) -> ApiResponse {
        self.ok()
    }
}
