//! Repository activity Lambda handler.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::github::CommitSource;
use crate::api::{ApiRequest, ApiResponse, CorsPolicy};

/// How many of the newest commits are returned.
pub const COMMIT_LIMIT: usize = 5;

pub struct ActivityHandler<C> {
    source: C,
}

impl<C: CommitSource> ActivityHandler<C> {
    pub fn new(source: C) -> Self {
        Self { source }
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

    #[tracing::instrument(level = "info", skip_all, fields(method = ?request.http_method))]
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let cors = CorsPolicy::PUBLIC;

        if request.is_preflight() {
            return cors.preflight();
        }

        match self.source.recent_commits(COMMIT_LIMIT).await {
            Ok(commits) => {
                info!(count = commits.len(), "Fetched recent commits");
                let messages: Vec<&str> = commits.iter().map(|c| c.message.as_str()).collect();
                cors.json(200, &json!({ "commits": messages }))
            }
            Err(e) => {
                error!("Failed to fetch commits: {}", e);
                cors.error(500, &e.to_string())
            }
        }
    }
}
