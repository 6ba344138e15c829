pub mod chat;

pub use chat::{ChatRequest, ErrorDetail, ErrorResponse, HealthStatus, RootStatus};
