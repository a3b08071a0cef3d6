//! Postline TUI - Actor-based terminal post feed
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

mod app;
mod constants;
mod messages;
mod models;
mod network;
mod theme;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use messages::ui_events::{key_to_ui_event, InputMode, Panel};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::ScreenPhase;
use network::NetworkActor;
use theme::{Theme, ThemeMode};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx, constants::API_BASE_URL);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor (fires the initial fetch on startup)
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let theme = state.theme.palette();

    // Paint the themed background first
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    match state.phase {
        ScreenPhase::Loading => draw_loading(f, &theme, area),
        ScreenPhase::Error(err) => draw_error_banner(f, &theme, err.message(), area),
        ScreenPhase::Ready => draw_feed_screen(f, state, &theme, area),
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_loading(f: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(40, 20, area);
    let text = Paragraph::new("LOADING...")
        .style(Style::default().fg(theme.spinner).italic())
        .alignment(Alignment::Center);
    f.render_widget(text, popup_area);
}

fn draw_error_banner(f: &mut Frame, theme: &Theme, message: &str, area: Rect) {
    // The banner replaces the whole view; no partial/degraded rendering.
    let popup_area = centered_rect(60, 25, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.banner_bg));

    let lines = vec![
        Line::styled(
            message.to_string(),
            Style::default().fg(theme.banner_fg).bold(),
        )
        .centered(),
        Line::default(),
        Line::styled(
            "r: retry   q: quit",
            Style::default().fg(theme.banner_fg),
        )
        .centered(),
    ];

    let banner = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(Clear, popup_area);
    f.render_widget(banner, popup_area);
}

fn draw_feed_screen(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Heading
            Constraint::Length(9),  // Compose form
            Constraint::Min(5),     // Feed
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_heading(f, state, theme, chunks[0]);
    draw_compose_form(f, state, theme, chunks[1]);
    draw_feed(f, state, theme, chunks[2]);
    draw_status_bar(f, state, chunks[3]);
}

fn draw_heading(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let mode = match state.theme {
        ThemeMode::Light => "[light]",
        ThemeMode::Dark => "[dark]",
    };
    let heading = Line::from(vec![
        Span::styled(
            " Postline ",
            Style::default().fg(theme.heading).bold(),
        ),
        Span::styled(
            format!(" {} (t to switch)", mode),
            Style::default().fg(theme.heading),
        ),
    ])
    .centered();
    f.render_widget(Paragraph::new(heading), area);
}

fn draw_compose_form(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.heading))
        .style(Style::default().bg(theme.form_bg))
        .title(" Add New Post ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Body input
            Constraint::Length(1), // Submit control
        ])
        .split(inner);

    let editing = state.input_mode == InputMode::Editing;
    let title_input = ui::input_field(
        &state.title_input,
        " Post's Title ",
        state.active_panel == Panel::Title,
        editing,
        theme,
    );
    f.render_widget(title_input, chunks[0]);

    let body_input = ui::input_field(
        &state.body_input,
        " Post's Body ",
        state.active_panel == Panel::Body,
        editing,
        theme,
    );
    f.render_widget(body_input, chunks[1]);

    let submit_style = if state.posting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(theme.heading).bold()
    };
    let submit = Paragraph::new(ui::submit_label(state.posting))
        .style(submit_style)
        .alignment(Alignment::Center);
    f.render_widget(submit, chunks[2]);

    // Cursor inside the focused input while editing
    if editing && state.active_panel.is_input() {
        let input_area = match state.active_panel {
            Panel::Title => chunks[0],
            _ => chunks[1],
        };
        let max_x = input_area.x + input_area.width.saturating_sub(2);
        let cursor_x = (input_area.x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, input_area.y + 1));
    }
}

fn draw_feed(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let is_focused = state.active_panel == Panel::Feed;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(theme.heading)
    };

    let refreshing = if state.refreshing { " [refreshing...]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Posts ({}){} ", state.posts.len(), refreshing));

    let lines = ui::feed_lines(&state.posts, theme);
    let feed = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.feed_scroll, 0));
    f.render_widget(feed, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.posting {
        " Adding post... "
    } else if state.input_mode == InputMode::Editing {
        " ESC/Enter:stop editing | Tab:next field | arrows:move "
    } else {
        " Tab:panel | e:edit | s:add post | r:refresh | t:theme | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 POSTLINE TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch between title, body, feed
   Up / Down          Scroll the feed

 COMPOSE
   e / Enter          Edit the focused input
   Esc                Stop editing
   s                  Add post (disabled while in flight)

 FEED
   r                  Refresh the list

 GENERAL
   t                  Toggle light/dark theme
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
