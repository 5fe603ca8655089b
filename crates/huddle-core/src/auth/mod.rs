//! Authentication module: session lifecycle, credential storage, routing.
//!
//! This module provides:
//! - `SessionManager`: owns the in-memory session and the five
//!   session-mutating operations (load, login/signup, verify, resend,
//!   logout)
//! - `CredentialStore`: durable key-value storage for the token and
//!   cached user, with keyring / file / in-memory backings
//! - `decide_initial_route`: the pure routing gate from session state
//!   to the initial screen

pub mod routing;
pub mod session;
pub mod store;

pub use routing::{decide_initial_route, Route};
pub use session::{Session, SessionManager};
pub use store::{CredentialStore, FileStore, KeyringStore, MemoryStore};
