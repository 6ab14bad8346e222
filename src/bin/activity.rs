// Lambda bootstrap for the repository activity function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use site_backend::activity::{ActivityHandler, GithubCommitSource};

#[tokio::main]
async fn main() -> Result<(), Error> {
    site_backend::setup_logging();

    let handler = ActivityHandler::new(GithubCommitSource::new()?);

    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.handle_event(event).await
    }))
    .await
}
