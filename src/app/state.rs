//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Post, ScreenPhase};
use crate::theme::ThemeMode;

/// Main application state - pure data, no I/O
///
/// Only the app actor task ever mutates this, so the whole screen has a
/// single writer and no locks.
pub struct AppState {
    // Screen
    pub phase: ScreenPhase,
    pub posts: Vec<Post>,
    pub refreshing: bool,

    // Compose form
    pub title_input: String,
    pub body_input: String,
    pub posting: bool,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub feed_scroll: u16,
    pub theme: ThemeMode,
    pub show_help: bool,

    // Request id counter for log correlation
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            phase: ScreenPhase::Loading,
            posts: Vec::new(),
            refreshing: false,
            title_input: String::new(),
            body_input: String::new(),
            posting: false,
            active_panel: Panel::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            feed_scroll: 0,
            theme: ThemeMode::Light,
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Title => &self.title_input,
            Panel::Body => &self.body_input,
            Panel::Feed => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::Title => &mut self.title_input,
            Panel::Body => &mut self.body_input,
            Panel::Feed => &mut self.title_input, // fallback, editing never starts on the feed
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            phase: self.phase,
            posts: self.posts.clone(),
            refreshing: self.refreshing,
            title_input: self.title_input.clone(),
            body_input: self.body_input.clone(),
            posting: self.posting,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            feed_scroll: self.feed_scroll,
            theme: self.theme,
            show_help: self.show_help,
        }
    }
}
