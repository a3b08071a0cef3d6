//! # Postline TUI
//!
//! A terminal post feed: fetches posts from a public REST API, shows them
//! as a scrollable list of cards, refreshes on demand, and publishes new
//! posts from a compose form.
//!
//! ## Features
//! - Initial fetch on startup, refresh on `r` (the TUI's pull-to-refresh)
//! - Compose form with title and body inputs and an in-flight guard
//! - Light/dark theme toggle
//! - Fixed-message error banner for the two failure kinds
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{FetchKind, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{FeedError, NewPost, Post, ScreenPhase};
pub use network::NetworkActor;
pub use theme::{Theme, ThemeMode};
