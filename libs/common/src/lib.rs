//! Common library for the Dodam client workspace
//!
//! This crate provides the pieces shared by the HTTP client and the
//! dashboard shell: the error taxonomy, the backend response envelopes
//! and configuration loading.

pub mod config;
pub mod envelope;
pub mod error;

pub use config::{ClientConfig, RefreshCredential};
pub use envelope::{ApiResponse, ErrorResponse};
pub use error::{ClientError, ClientResult};
