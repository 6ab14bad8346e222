//! Visitor analytics Lambda handler.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

use super::store::VisitStore;
use crate::api::parsing::str_field_or;
use crate::api::{ApiRequest, ApiResponse, CorsPolicy};
use crate::core::models::VisitRecord;
use crate::errors::BackendError;

pub struct VisitorHandler<S> {
    store: S,
}

impl<S: VisitStore> VisitorHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
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

        match self.log_visit(request).await {
            Ok(id) => {
                info!(visit_id = %id, "Visit logged");
                cors.json(200, &json!({ "message": "Visit logged", "id": id }))
            }
            Err(e) => {
                error!("Failed to log visit: {}", e);
                cors.error(500, &e.to_string())
            }
        }
    }

    async fn log_visit(&self, request: &ApiRequest) -> Result<String, BackendError> {
        let body = request.json_object()?;
        let record = VisitRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: str_field_or(&body, "timestamp", ""),
            user_agent: str_field_or(&body, "user_agent", "unknown"),
            page: str_field_or(&body, "page", "/"),
        };
        self.store.put_visit(&record).await?;
        Ok(record.id)
    }
}
