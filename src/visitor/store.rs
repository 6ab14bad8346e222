use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::core::models::VisitRecord;
use crate::errors::BackendError;

#[async_trait]
pub trait VisitStore: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    async fn put_visit(&self, record: &VisitRecord) -> Result<(), BackendError>;
}

/// Writes one item per visit into a DynamoDB table keyed by `id`.
pub struct DynamoVisitStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoVisitStore {
    #[must_use]
    pub fn new(shared: &aws_config::SdkConfig, table_name: &str) -> Self {
        Self {
            client: DynamoClient::new(shared),
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl VisitStore for DynamoVisitStore {
    async fn put_visit(&self, record: &VisitRecord) -> Result<(), BackendError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(record.id.clone()))
            .item("timestamp", AttributeValue::S(record.timestamp.clone()))
            .item("user_agent", AttributeValue::S(record.user_agent.clone()))
            .item("page", AttributeValue::S(record.page.clone()))
            .send()
            .await
            .map_err(|e| {
                BackendError::AwsError(format!("dynamodb put_item: {}", DisplayErrorContext(&e)))
            })?;
        Ok(())
    }
}
