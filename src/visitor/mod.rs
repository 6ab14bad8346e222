//! Page visit logging into DynamoDB

pub mod handler;
pub mod store;

pub use handler::VisitorHandler;
pub use store::{DynamoVisitStore, VisitStore};
