// Lambda bootstrap for the visitor analytics function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use site_backend::core::config::VisitorConfig;
use site_backend::visitor::{DynamoVisitStore, VisitorHandler};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    site_backend::setup_logging();

    // TABLE_NAME is required before the first invocation is accepted
    let config = VisitorConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let handler = VisitorHandler::new(DynamoVisitStore::new(&shared, &config.table_name));

    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.handle_event(event).await
    }))
    .await
}
