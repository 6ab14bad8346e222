/// Site backend - serverless request handlers for a static website.
///
/// This crate implements three independent Lambda functions:
/// 1. A contact handler that verifies a reCAPTCHA token and forwards the message through SES
/// 2. A visitor handler that records page visits in DynamoDB
/// 3. An activity handler that lists the latest commits of the site repository from GitHub
///
/// # Architecture
///
/// Every handler is a function from a normalized API Gateway request to a
/// normalized response. External collaborators sit behind traits:
/// - [`contact::Verifier`] / [`contact::Mailer`] for reCAPTCHA and SES
/// - [`visitor::VisitStore`] for DynamoDB
/// - [`activity::CommitSource`] for the GitHub REST API
///
/// # Example
///
/// ```no_run
/// use site_backend::api::parsing::ApiRequest;
/// use site_backend::contact::{ContactHandler, RecaptchaVerifier, SesMailer};
/// use site_backend::core::config::{ContactConfig, EnvSource};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     site_backend::setup_logging();
///
///     let config = ContactConfig::from_source(&EnvSource);
///     let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
///     let handler = ContactHandler::new(
///         config.clone(),
///         RecaptchaVerifier::new(config.recaptcha_secret.clone())?,
///         SesMailer::new(&shared),
///     );
///
///     let request = ApiRequest::from_value(&serde_json::json!({
///         "httpMethod": "POST",
///         "body": r#"{"name":"A","email":"a@b.com","message":"hi","token":"t"}"#
///     }));
///     let response = handler.handle(&request).await;
///     println!("{} {}", response.status_code, response.body);
///     Ok(())
/// }
/// ```
pub mod activity;
pub mod api;
pub mod contact;
pub mod core;
pub mod errors;
pub mod visitor;

pub use errors::BackendError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output is filtered through `RUST_LOG` (default `info`). Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// site_backend::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
