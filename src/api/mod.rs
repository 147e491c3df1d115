//! HTTP API for the Training Report Engine.
//!
//! A thin axum surface over the pipeline: one processing endpoint plus a
//! health check. File parsing and workbook rendering stay with the caller.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProcessRequest;
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;
