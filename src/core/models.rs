use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub verification_token: String,
}

/// Reply of the reCAPTCHA `siteverify` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub success: bool,
    /// Numbers or numeric strings.
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
    #[serde(
        rename = "error-codes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_codes: Option<Vec<String>>,
    // hostname, action, challenge_ts, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("score {s:?}: {e}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "score must be a number, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub id: String,
    pub timestamp: String,
    pub user_agent: String,
    pub page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub message: String,
}

/// A composed mail, ready for the mail service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub source: String,
    pub to_addresses: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}
