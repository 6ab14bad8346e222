#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use site_backend::BackendError;
use site_backend::activity::CommitSource;
use site_backend::api::ApiRequest;
use site_backend::contact::{Mailer, Verifier};
use site_backend::core::models::{CommitSummary, OutboundEmail, VerificationResult, VisitRecord};
use site_backend::visitor::VisitStore;

pub fn post(body: &Value) -> ApiRequest {
    ApiRequest::from_value(&json!({
        "httpMethod": "POST",
        "body": body.to_string(),
        "requestContext": { "identity": { "sourceIp": "203.0.113.9" } }
    }))
}

pub fn raw_post(body: Option<&str>) -> ApiRequest {
    ApiRequest {
        http_method: Some("POST".to_string()),
        body: body.map(str::to_string),
        ..ApiRequest::default()
    }
}

pub fn options() -> ApiRequest {
    ApiRequest::from_value(&json!({ "httpMethod": "OPTIONS", "body": "not json at all" }))
}

pub fn verification(value: Value) -> VerificationResult {
    serde_json::from_value(value).expect("valid verification result")
}

#[derive(Clone)]
pub enum VerifierBehavior {
    Reply(VerificationResult),
    Unreachable(String),
    MissingSecret,
}

pub struct FakeVerifier {
    behavior: VerifierBehavior,
    pub calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl FakeVerifier {
    pub fn new(behavior: VerifierBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(value: Value) -> Self {
        Self::new(VerifierBehavior::Reply(verification(value)))
    }
}

#[async_trait]
impl Verifier for FakeVerifier {
    async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<VerificationResult, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push((token.to_string(), remote_ip.map(str::to_string)));
        match &self.behavior {
            VerifierBehavior::Reply(result) => Ok(result.clone()),
            VerifierBehavior::Unreachable(msg) => Err(BackendError::HttpError(msg.clone())),
            VerifierBehavior::MissingSecret => {
                Err(BackendError::ConfigError("RECAPTCHA_SECRET".to_string()))
            }
        }
    }
}

pub struct FakeMailer {
    fail_with: Option<String>,
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl FakeMailer {
    pub fn ok() -> Self {
        Self {
            fail_with: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), BackendError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.fail_with {
            Some(msg) => Err(BackendError::AwsError(msg.clone())),
            None => Ok(()),
        }
    }
}

pub struct FakeStore {
    fail_with: Option<String>,
    pub records: Arc<Mutex<Vec<VisitRecord>>>,
}

impl FakeStore {
    pub fn ok() -> Self {
        Self {
            fail_with: None,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl VisitStore for FakeStore {
    async fn put_visit(&self, record: &VisitRecord) -> Result<(), BackendError> {
        if let Some(msg) = &self.fail_with {
            return Err(BackendError::AwsError(msg.clone()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct FakeCommits {
    messages: Vec<String>,
    fail_with: Option<String>,
}

impl FakeCommits {
    pub fn with(messages: &[&str]) -> Self {
        Self {
            messages: messages.iter().map(|m| (*m).to_string()).collect(),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            messages: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl CommitSource for FakeCommits {
    async fn recent_commits(&self, limit: usize) -> Result<Vec<CommitSummary>, BackendError> {
        if let Some(msg) = &self.fail_with {
            return Err(BackendError::HttpError(msg.clone()));
        }
        Ok(self
            .messages
            .iter()
            .take(limit)
            .map(|m| CommitSummary { message: m.clone() })
            .collect())
    }
}
