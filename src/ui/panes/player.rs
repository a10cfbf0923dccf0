//! Player pane: the respondent's view of the survey

use crate::engine::{DisplayMode, TraversalState};
use crate::markup;
use crate::survey::{Align, SurveyGraph, ThemeConfig};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the player pane: the active question with yes/no actions, a
/// completion screen, or the not-configured notice, derived from the graph
/// and traversal state exactly as the engine prescribes.
pub fn render_player_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &SurveyGraph,
    state: &TraversalState,
    survey_theme: &ThemeConfig,
) {
    let block = Block::default()
        .title(format!(" {} ", survey_theme.survey_title))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(4, 4, 1, 1));

    let text_style = Style::default().fg(DEFAULT_THEME.fg);

    let (lines, alignment) = match DisplayMode::of(graph, state) {
        DisplayMode::Prompt(question) => {
            let mut lines = question_lines(&question.text, text_style);
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(
                    " [Y] Yes ",
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    " [N] No ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            (lines, pane_alignment(question.text_align))
        }
        DisplayMode::Completion(question) => (
            completion_lines(&question.text, text_style),
            pane_alignment(question.text_align),
        ),
        DisplayMode::Final { message, align } => (
            completion_lines(message, text_style),
            pane_alignment(align),
        ),
        DisplayMode::NotConfigured => (
            vec![
                Line::styled(
                    crate::engine::NOT_CONFIGURED_MESSAGE,
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Line::default(),
                Line::styled("Press [s] to open settings", Style::default().fg(DEFAULT_THEME.muted)),
            ],
            Alignment::Center,
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn question_lines(text: &str, base_style: Style) -> Vec<Line<'static>> {
    markup::to_lines(text, base_style)
}

fn completion_lines(message: &str, base_style: Style) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            "\u{2713}",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    lines.extend(question_lines(message, base_style));
    lines.push(Line::default());
    lines.push(Line::styled(
        " [R] Take the survey again ",
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ));
    lines
}

fn pane_alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
    }
}
