//! # ruko-core
//!
//! Shared foundation for the Ruko ride-hailing clients. Provides:
//!
//! - Layered TOML/environment configuration
//! - The unified [`error::AppError`] type
//! - Ride domain types as serialized by the backend

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
