// Lambda bootstrap for the contact form function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use site_backend::contact::{ContactHandler, RecaptchaVerifier, SesMailer};
use site_backend::core::config::ContactConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    site_backend::setup_logging();

    let config = ContactConfig::from_env();
    let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let verifier = RecaptchaVerifier::new(config.recaptcha_secret.clone())?;
    let handler = ContactHandler::new(config, verifier, SesMailer::new(&shared));

    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.handle_event(event).await
    }))
    .await
}
