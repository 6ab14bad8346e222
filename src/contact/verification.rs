//! reCAPTCHA token verification client

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::info;

use crate::core::config::ConfigKey;
use crate::core::models::VerificationResult;
use crate::errors::BackendError;

pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait Verifier: Send + Sync {
    /// # Errors
    ///
    /// `ConfigError` when no shared secret is configured; any other variant
    /// means the service could not be reached or answered garbage.
    async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<VerificationResult, BackendError>;
}

pub struct RecaptchaVerifier {
    http: HttpClient,
    secret: Option<String>,
    endpoint: String,
}

impl RecaptchaVerifier {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(secret: Option<String>) -> Result<Self, BackendError> {
        Self::with_endpoint(secret, SITEVERIFY_URL)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_endpoint(secret: Option<String>, endpoint: &str) -> Result<Self, BackendError> {
        let http = HttpClient::builder().timeout(VERIFY_TIMEOUT).build()?;
        Ok(Self {
            http,
            secret,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl Verifier for RecaptchaVerifier {
    async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<VerificationResult, BackendError> {
        let secret = self.secret.as_deref().ok_or_else(|| {
            BackendError::ConfigError(ConfigKey::RecaptchaSecret.name().to_string())
        })?;

        let mut form = vec![("secret", secret), ("response", token)];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip));
        }

        let resp = self
            .http
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        let result: VerificationResult = resp
            .json()
            .await
            .map_err(|e| BackendError::ParseError(format!("siteverify response: {e}")))?;
        info!(
            success = result.success,
            score = ?result.score,
            error_codes = ?result.error_codes,
            "reCAPTCHA verification completed"
        );
        Ok(result)
    }
}
