//! Request parsing and response building shared by every Lambda handler

pub mod parsing;
pub mod response;

pub use parsing::ApiRequest;
pub use response::{ApiResponse, CorsPolicy};
