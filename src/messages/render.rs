//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{Post, ScreenPhase};
use crate::theme::ThemeMode;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
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
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
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
        }
    }
}
