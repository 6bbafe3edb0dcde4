//! # drivevault-core
//!
//! Core crate for DriveVault. Contains configuration schemas, the blob
//! store trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DriveVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
