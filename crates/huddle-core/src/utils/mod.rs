//! Utility functions for form validation and display formatting.

pub mod format;
pub mod validate;

// Re-export commonly used functions at module level
pub use format::{format_date, format_date_range, format_optional};
pub use validate::{is_valid_email, is_valid_password, MIN_PASSWORD_LEN};
