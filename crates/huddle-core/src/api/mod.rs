//! REST API client module for the Huddle backend.
//!
//! This module provides the `ApiClient` for communicating with the
//! backend: authentication endpoints plus the typed profile gateway
//! (profile, education, work experience, life events, privacy).
//!
//! The API uses JWT bearer token authentication; every failed call is
//! normalized into `ApiError` so screens never see a raw transport error.

pub mod client;
pub mod error;
pub mod profile;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
