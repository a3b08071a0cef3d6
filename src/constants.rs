//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the public posts API
pub const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of posts requested by the initial load
pub const INITIAL_FETCH_LIMIT: usize = 7;

/// Number of posts requested by a refresh
pub const REFRESH_FETCH_LIMIT: usize = 20;

/// Log file name (the TUI owns the terminal, so logs go to disk)
pub const LOG_FILE: &str = "postline.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Postline TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
