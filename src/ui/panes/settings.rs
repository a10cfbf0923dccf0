//! Settings pane: question list, edit form, and theme summary

use crate::survey::{Align, SurveyGraph, ThemeConfig};
use crate::ui::app::{FormField, QuestionForm};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the settings screen: the question list on the left, and either
/// the add/edit form or the theme/keybinding summary on the right.
pub fn render_settings_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &SurveyGraph,
    selected: usize,
    form: Option<&QuestionForm>,
    survey_theme: &ThemeConfig,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_question_list(frame, columns[0], graph, selected, form.is_none());

    match form {
        Some(form) => render_form(frame, columns[1], graph, form),
        None => render_overview(frame, columns[1], survey_theme),
    }
}

fn render_question_list(
    frame: &mut Frame,
    area: Rect,
    graph: &SurveyGraph,
    selected: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" All Questions ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if graph.is_empty() {
        let paragraph = Paragraph::new("No questions. Press [a] to add the first one.")
            .style(Style::default().fg(DEFAULT_THEME.muted))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = graph
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let is_selected = i == selected;
            let base = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.selection_bg)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let title = Line::from(vec![
                Span::styled(
                    format!("{:2}. ", i + 1),
                    base.fg(DEFAULT_THEME.primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(truncate(&question.text, 48), base),
            ]);
            let meta = Line::from(Span::styled(
                format!(
                    "    Yes \u{2192} {} | No \u{2192} {}",
                    branch_summary(question.yes_next_id.as_deref(), &question.yes_message),
                    branch_summary(question.no_next_id.as_deref(), &question.no_message),
                ),
                base.fg(DEFAULT_THEME.muted),
            ));

            ListItem::new(vec![title, meta])
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn branch_summary(next_id: Option<&str>, message: &str) -> &'static str {
    if next_id.is_some() {
        "question"
    } else if !message.is_empty() {
        "message"
    } else {
        "end"
    }
}

fn render_form(frame: &mut Frame, area: Rect, graph: &SurveyGraph, form: &QuestionForm) {
    let title = if form.editing_id.is_some() {
        " Edit Question "
    } else {
        " Add Question "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1));

    let mut lines = Vec::new();
    push_field(
        &mut lines,
        "Text",
        &form.text,
        form.focused == FormField::Text,
    );
    push_field(
        &mut lines,
        "Text align",
        align_label(form.text_align),
        form.focused == FormField::TextAlign,
    );
    push_field(
        &mut lines,
        "Next (Yes)",
        &link_label(graph, form.yes_next_id.as_deref()),
        form.focused == FormField::YesNext,
    );
    push_field(
        &mut lines,
        "Next (No)",
        &link_label(graph, form.no_next_id.as_deref()),
        form.focused == FormField::NoNext,
    );
    push_field(
        &mut lines,
        "Message (Yes)",
        &form.yes_message,
        form.focused == FormField::YesMessage,
    );
    push_field(
        &mut lines,
        "Msg align (Yes)",
        align_label(form.yes_message_align),
        form.focused == FormField::YesMessageAlign,
    );
    push_field(
        &mut lines,
        "Message (No)",
        &form.no_message,
        form.focused == FormField::NoMessage,
    );
    push_field(
        &mut lines,
        "Msg align (No)",
        align_label(form.no_message_align),
        form.focused == FormField::NoMessageAlign,
    );

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Tab: next field | \u{2190}/\u{2192}: change | Enter: save | Esc: cancel",
        Style::default().fg(DEFAULT_THEME.muted),
    )));
    lines.push(Line::from(Span::styled(
        "Markup: **bold**, *italic*, __underline__",
        Style::default().fg(DEFAULT_THEME.muted),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, is_focused: bool) {
    let label_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };
    let value_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .bg(DEFAULT_THEME.selection_bg)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let cursor = if is_focused { "\u{2588}" } else { "" };
    lines.push(Line::from(vec![
        Span::styled(format!("{:<16}", label), label_style),
        Span::styled(format!("{}{}", truncate(value, 40), cursor), value_style),
    ]));
}

fn align_label(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
    }
}

fn link_label(graph: &SurveyGraph, next_id: Option<&str>) -> String {
    match next_id {
        None => "none".to_string(),
        Some(id) => match graph.get(id) {
            Some(question) => truncate(&question.text, 32),
            // Dangling reference: the target was deleted.
            None => format!("{} (missing)", id),
        },
    }
}

fn render_overview(frame: &mut Frame, area: Rect, survey_theme: &ThemeConfig) {
    let block = Block::default()
        .title(" Survey Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let key_style = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(DEFAULT_THEME.fg);
    let muted = Style::default().fg(DEFAULT_THEME.muted);

    let keybinding = |key: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", key), key_style),
            Span::styled(action.to_string(), text_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Questions", muted)),
        keybinding("a", "add question"),
        keybinding("e/Enter", "edit selected"),
        keybinding("d", "delete selected"),
        keybinding("R", "reset to defaults"),
        Line::default(),
        Line::from(Span::styled("Files", muted)),
        keybinding("j", "export JSON"),
        keybinding("h", "export HTML"),
        keybinding("H", "export editable HTML"),
        keybinding("i", "import JSON"),
        Line::default(),
        Line::from(Span::styled("Theme", muted)),
        keybinding("t", &format!("title: {}", survey_theme.survey_title)),
        keybinding("1", &format!("background: {}", survey_theme.bg_color)),
        keybinding("2", &format!("card: {}", survey_theme.card_bg_color)),
        keybinding("3", &format!("yes button: {}", survey_theme.primary_btn_color)),
        keybinding(
            "4",
            &format!("no button: {}", survey_theme.secondary_btn_color),
        ),
        keybinding("5", &format!("text: {}", survey_theme.text_color)),
        keybinding("f", &format!("font: {}", survey_theme.font_family)),
        keybinding("z", &format!("size: {}px", survey_theme.font_size_px())),
        Line::default(),
        keybinding("Esc", "back to player"),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn truncate(text: &str, max: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}...", cut)
    }
}
