//! YallaNow client
//!
//! Data-access layer between the YallaNow UI and its backends: the events,
//! groups and participants REST services and the recommendation feed.
//! Services attach the caller's identity token, translate between domain and
//! wire shapes, classify HTTP outcomes into [`ApiError`], and thread the
//! recommendation session id through view and RSVP reporting.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, ApiResult, ErrorKind, YallaNowError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
