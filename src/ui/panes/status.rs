//! Status bar rendering with keybindings and pending prompts

use crate::ui::app::{ConfirmAction, Prompt, Screen};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// A pending confirmation or prompt takes over the whole bar; otherwise the
/// left half shows the latest status message and the right half the
/// keybindings for the current screen.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    screen: Screen,
    confirm: Option<&ConfirmAction>,
    prompt: Option<&Prompt>,
) {
    if let Some(action) = confirm {
        let line = Line::from(vec![Span::styled(
            format!(" {} ", action.message()),
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(DEFAULT_THEME.selection_bg)),
            area,
        );
        return;
    }

    if let Some(prompt) = prompt {
        let line = Line::from(vec![
            Span::styled(
                format!(" {}: ", prompt.label),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}\u{2588}", prompt.buffer),
                Style::default()
                    .bg(DEFAULT_THEME.selection_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(DEFAULT_THEME.selection_bg)),
            area,
        );
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Line::from(vec![
        Span::styled(
            match screen {
                Screen::Player => " PLAYER ",
                Screen::Settings => " SETTINGS ",
            },
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.muted),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ]);

    let hints = match screen {
        Screen::Player => "y/n: answer | r: restart | s: settings | q: quit",
        Screen::Settings => "a/e/d: edit | i/j/h/H: files | Esc: back",
    };
    let right = Line::from(Span::styled(
        format!("{} ", hints),
        Style::default()
            .bg(DEFAULT_THEME.selection_bg)
            .fg(DEFAULT_THEME.muted),
    ));

    frame.render_widget(
        Paragraph::new(left)
            .style(Style::default().bg(DEFAULT_THEME.selection_bg))
            .alignment(Alignment::Left),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(right)
            .style(Style::default().bg(DEFAULT_THEME.selection_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}
