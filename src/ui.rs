//! Reusable widget builders for the feed screen

use ratatui::{prelude::*, widgets::*};

use crate::models::Post;
use crate::theme::Theme;

/// Renders a single-line text input with a focus-aware border
pub fn input_field<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
    theme: &Theme,
) -> Paragraph<'a> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(theme.heading)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    Paragraph::new(content)
        .style(Style::default().bg(theme.input_bg).fg(theme.input_fg))
        .block(block)
}

/// Label for the submit control, matching its in-flight state
pub fn submit_label(posting: bool) -> &'static str {
    if posting {
        "[ Adding.. ]"
    } else {
        "[ s: Add Post ]"
    }
}

/// Build the scrollable feed content: caption, one card per post (or the
/// empty placeholder), and a footer.
pub fn feed_lines(posts: &[Post], theme: &Theme) -> Vec<Line<'static>> {
    let caption_style = Style::default().fg(theme.list_caption).bold();
    let mut lines = vec![
        Line::styled("GET List from API", caption_style).centered(),
        Line::default(),
    ];

    if posts.is_empty() {
        lines.push(
            Line::styled("No Posts Yet", Style::default().fg(theme.empty).bold()).centered(),
        );
    } else {
        for post in posts {
            lines.extend(post_card(post, theme));
            lines.push(Line::default());
        }
    }

    lines.push(Line::styled("End of List", caption_style).centered());
    lines
}

/// Lines for one post card
fn post_card(post: &Post, theme: &Theme) -> Vec<Line<'static>> {
    let card_style = Style::default().bg(theme.card_bg);
    let title = Span::styled(
        format!(" {} ", post.title),
        Style::default().fg(theme.card_title).bg(theme.card_bg).bold(),
    );
    let body = Span::styled(
        format!(" {} ", post.body),
        Style::default().fg(theme.card_body).bg(theme.card_bg),
    );
    vec![
        Line::from(title).style(card_style),
        Line::from(body).style(card_style),
    ]
}
