//! # drivevault-api
//!
//! HTTP surface for DriveVault: axum handlers, request DTOs, the
//! `ApiError` HTTP response mapping, and the router.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
