//! Contact form Lambda handler.
//!
//! This module handles:
//! - CORS preflight
//! - Body parsing and required-field validation
//! - reCAPTCHA verification (success flag, then optional score)
//! - Sender/recipient resolution and the SES send

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use super::compose::build_email;
use super::mailer::{Mailer, classify_send_failure};
use super::submission::extract_submission;
use super::verification::Verifier;
use crate::api::{ApiRequest, ApiResponse, CorsPolicy};
use crate::core::config::{ConfigKey, ContactConfig};

/// Scores below this are treated as bots. Only applies when a score is returned.
pub const MIN_SCORE: f64 = 0.3;

pub struct ContactHandler<V, M> {
    config: ContactConfig,
    verifier: V,
    mailer: M,
}

impl<V: Verifier, M: Mailer> ContactHandler<V, M> {
    pub fn new(config: ContactConfig, verifier: V, mailer: M) -> Self {
        Self {
            config,
            verifier,
            mailer,
        }
    }

    /// Lambda entry point. Never fails the invocation.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the signature matches the runtime's service contract.
    pub async fn handle_event(&self, event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
        let request = ApiRequest::from_value(&event.payload);
        Ok(self.handle(&request).await)
    }

    /// Process one contact form request.
    ///
    /// Every outcome is a response, including a missing reCAPTCHA secret,
    /// which surfaces as a 502 like any other verification failure.
    #[tracing::instrument(level = "info", skip_all, fields(method = ?request.http_method))]
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let cors = CorsPolicy::CONTACT;

        if request.is_preflight() {
            return cors.preflight();
        }

        info!(
            body_len = request.body.as_ref().map_or(0, String::len),
            has_source_ip = request.source_ip.is_some(),
            "Contact request received"
        );

        let body = match request.json_object_or_empty() {
            Ok(body) => body,
            Err(e) => {
                warn!("Rejecting contact body: {}", e);
                return cors.error(400, "Invalid JSON");
            }
        };

        let Some(submission) = extract_submission(&body) else {
            info!(
                has_name = body.contains_key("name"),
                has_email = body.contains_key("email"),
                has_message = body.contains_key("message"),
                "Missing required contact fields"
            );
            return cors.error(400, "Missing required fields");
        };

        let verification = match self
            .verifier
            .verify(&submission.verification_token, request.source_ip.as_deref())
            .await
        {
            Ok(v) => v,
            Err(e) => {
                error!("reCAPTCHA verification call failed: {}", e);
                return cors.error_with_details(
                    502,
                    "recaptcha verification failed",
                    &e.to_string(),
                );
            }
        };

        if !verification.success {
            warn!(error_codes = ?verification.error_codes, "reCAPTCHA rejected token");
            return cors.json(
                403,
                &json!({ "error": "recaptcha failed", "verification": verification }),
            );
        }

        if let Some(score) = verification.score.filter(|s| *s < MIN_SCORE) {
            warn!(score, "reCAPTCHA score below threshold");
            return cors.json(403, &json!({ "error": "low recaptcha score", "score": score }));
        }

        let Some((from, to)) = self.config.addresses() else {
            error!("{} is not configured", ConfigKey::FromEmail.name());
            return cors.error(500, "FROM_EMAIL not configured");
        };

        let email = build_email(&submission, from, to);
        info!(from = %from, to = %to, "Sending contact email");

        if let Err(e) = self.mailer.send(&email).await {
            let details = e.to_string();
            let label = classify_send_failure(&details);
            error!(label, "Contact email send failed: {}", details);
            return cors.error_with_details(502, label, &details);
        }

        info!("Contact email sent");
        cors.ok()
    }
}
