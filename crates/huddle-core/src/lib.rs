//! Core library for the Huddle client.
//!
//! Everything the presentation layer needs to talk to the Huddle
//! social-networking backend:
//!
//! - `api`: HTTP client facade with uniform error normalization, plus
//!   the typed profile/education/work/privacy gateway
//! - `auth`: session manager, credential storage, and the routing gate
//! - `models`: wire-format DTOs mirrored from backend responses
//! - `config`: base-URL and local settings handling
//! - `utils`: form validation and display formatting
//!
//! All business logic (password handling, OTP validation, the friend
//! graph, visibility enforcement) lives in the backend; this crate
//! renders state and issues REST calls.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError, ApiResult};
pub use auth::{decide_initial_route, CredentialStore, Route, Session, SessionManager};
pub use config::Config;
