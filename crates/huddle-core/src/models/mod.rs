//! Data models for Huddle backend entities.
//!
//! This module contains the wire-format structures exchanged with the
//! backend REST API:
//!
//! - `User`, `AuthResponse`: account identity and auth payloads
//! - `Profile`, `ProfileUpdate`, `LifeEvent`: the multi-section profile
//! - `Education`, `WorkExperience`: nested profile collections
//! - `PrivacySettings`: per-section visibility controls
//!
//! Field names stay camelCase on the wire; all structs mirror backend
//! JSON verbatim and carry no client-side behavior beyond display helpers.

pub mod education;
pub mod profile;
pub mod user;
pub mod work;

pub use education::{Education, EducationInput};
pub use profile::{LifeEvent, PrivacySettings, PrivacyUpdate, Profile, ProfileUpdate};
pub use user::{AuthResponse, LoginRequest, SignupRequest, User, VerifyEmailRequest};
pub use work::{WorkExperience, WorkInput};
