//! faceops-api — HTTP client for the face recognition service REST API.
//!
//! Wraps `reqwest` with the bearer-auth plumbing, the offset/limit paginated
//! fetch, and the profile toggle call the operator tools are built on. All
//! requests are issued one at a time; there is no parallel fetch or update.

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;

pub use client::{ApiClient, LogQuery};
pub use config::ApiConfig;
pub use error::ApiError;
