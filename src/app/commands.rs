//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::{INITIAL_FETCH_LIMIT, REFRESH_FETCH_LIMIT};
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{FetchKind, NetworkCommand, NetworkResponse};
use crate::models::{FeedError, ScreenPhase};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
        if self.input_mode == InputMode::Editing {
            if self.active_panel.is_input() {
                self.cursor_position = self.current_input().len();
            } else {
                self.stop_editing();
            }
        }
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
        if self.input_mode == InputMode::Editing {
            if self.active_panel.is_input() {
                self.cursor_position = self.current_input().len();
            } else {
                self.stop_editing();
            }
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel.is_input() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Feed scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.feed_scroll = self.feed_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.feed_scroll = self.feed_scroll.saturating_add(1);
    }

    // ========================
    // Theme
    // ========================

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network operations
    // ========================

    /// Command for the mount-time fetch. The phase stays Loading until the
    /// response arrives.
    pub fn initial_fetch(&mut self) -> NetworkCommand {
        NetworkCommand::FetchPosts {
            id: self.next_id(),
            kind: FetchKind::Initial,
            limit: INITIAL_FETCH_LIMIT,
        }
    }

    /// Start a refresh fetch, unless one is already showing its spinner.
    ///
    /// The flag stays set until the matching response arrives, so the
    /// spinner brackets the whole operation.
    pub fn start_refresh(&mut self) -> Option<NetworkCommand> {
        if self.refreshing {
            return None;
        }
        self.refreshing = true;
        Some(NetworkCommand::FetchPosts {
            id: self.next_id(),
            kind: FetchKind::Refresh,
            limit: REFRESH_FETCH_LIMIT,
        })
    }

    /// Submit the compose form. Empty title and body are allowed and sent
    /// as-is; the guards are the in-flight flag that disables the submit
    /// control and the loading screen, which has no compose form yet. Only
    /// a list fetch may move the screen out of Loading.
    pub fn submit_post(&mut self) -> Option<NetworkCommand> {
        if self.posting || self.phase == ScreenPhase::Loading {
            return None;
        }
        self.posting = true;
        Some(NetworkCommand::CreatePost {
            id: self.next_id(),
            title: self.title_input.clone(),
            body: self.body_input.clone(),
        })
    }

    /// Apply a network response to the screen state.
    ///
    /// Overlapping fetches are not de-duplicated: whichever response
    /// arrives last fully overwrites the list.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::PostsFetched { kind, posts, .. } => {
                self.posts = posts;
                self.phase = ScreenPhase::Ready;
                self.feed_scroll = 0;
                if kind == FetchKind::Refresh {
                    self.refreshing = false;
                }
            }
            NetworkResponse::FetchFailed { kind, .. } => {
                // The list is left as it was; only the banner changes.
                self.phase = ScreenPhase::Error(FeedError::FetchList);
                if kind == FetchKind::Refresh {
                    self.refreshing = false;
                }
            }
            NetworkResponse::PostCreated { post, .. } => {
                self.posts.insert(0, post);
                self.title_input.clear();
                self.body_input.clear();
                self.cursor_position = 0;
                self.posting = false;
                self.phase = ScreenPhase::Ready;
            }
            NetworkResponse::CreateFailed { .. } => {
                // Form fields stay intact so the user can retry; the
                // submit control must never stay disabled.
                self.phase = ScreenPhase::Error(FeedError::CreatePost);
                self.posting = false;
            }
        }
    }
}
