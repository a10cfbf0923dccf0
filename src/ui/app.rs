//! Main TUI application state and logic

use crate::engine::{self, Choice, DisplayMode, TraversalState};
use crate::export::{export_html, ExportMode};
use crate::store::{self, SurveyStore};
use crate::survey::{Align, Question, SurveyGraph, ThemeConfig};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Player,
    Settings,
}

/// Which form field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    TextAlign,
    YesNext,
    NoNext,
    YesMessage,
    YesMessageAlign,
    NoMessage,
    NoMessageAlign,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Text => FormField::TextAlign,
            FormField::TextAlign => FormField::YesNext,
            FormField::YesNext => FormField::NoNext,
            FormField::NoNext => FormField::YesMessage,
            FormField::YesMessage => FormField::YesMessageAlign,
            FormField::YesMessageAlign => FormField::NoMessage,
            FormField::NoMessage => FormField::NoMessageAlign,
            FormField::NoMessageAlign => FormField::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Text => FormField::NoMessageAlign,
            FormField::TextAlign => FormField::Text,
            FormField::YesNext => FormField::TextAlign,
            FormField::NoNext => FormField::YesNext,
            FormField::YesMessage => FormField::NoNext,
            FormField::YesMessageAlign => FormField::YesMessage,
            FormField::NoMessage => FormField::YesMessageAlign,
            FormField::NoMessageAlign => FormField::NoMessage,
        }
    }
}

/// Draft state of the add/edit question form.
///
/// All fields except the id are editable; a `None` editing id means the
/// form will create a new question on save.
#[derive(Debug, Clone)]
pub struct QuestionForm {
    pub editing_id: Option<String>,
    pub text: String,
    pub text_align: Align,
    pub yes_next_id: Option<String>,
    pub no_next_id: Option<String>,
    pub yes_message: String,
    pub no_message: String,
    pub yes_message_align: Align,
    pub no_message_align: Align,
    pub focused: FormField,
}

impl QuestionForm {
    pub fn blank() -> Self {
        QuestionForm {
            editing_id: None,
            text: String::new(),
            text_align: Align::Center,
            yes_next_id: None,
            no_next_id: None,
            yes_message: String::new(),
            no_message: String::new(),
            yes_message_align: Align::Center,
            no_message_align: Align::Center,
            focused: FormField::Text,
        }
    }

    pub fn for_question(question: &Question) -> Self {
        QuestionForm {
            editing_id: Some(question.id.clone()),
            text: question.text.clone(),
            text_align: question.text_align,
            yes_next_id: question.yes_next_id.clone(),
            no_next_id: question.no_next_id.clone(),
            yes_message: question.yes_message.clone(),
            no_message: question.no_message.clone(),
            yes_message_align: question.yes_message_align,
            no_message_align: question.no_message_align,
            focused: FormField::Text,
        }
    }

    fn into_question(self, id: String) -> Question {
        Question {
            id,
            text: self.text,
            yes_next_id: self.yes_next_id,
            no_next_id: self.no_next_id,
            yes_message: self.yes_message,
            no_message: self.no_message,
            text_align: self.text_align,
            yes_message_align: self.yes_message_align,
            no_message_align: self.no_message_align,
        }
    }
}

/// A destructive action awaiting explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteQuestion(String),
    ResetToDefault,
}

impl ConfirmAction {
    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteQuestion(_) => "Delete this question? [y/n]".to_string(),
            ConfirmAction::ResetToDefault => {
                "Reset all questions to the defaults? [y/n]".to_string()
            }
        }
    }
}

/// What a text prompt in the status line is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPurpose {
    ImportJson,
    ExportJson,
    ExportHtml(bool), // editable?
    SurveyTitle,
    BgColor,
    CardColor,
    PrimaryColor,
    SecondaryColor,
    TextColor,
    FontFamily,
    FontSize,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub purpose: PromptPurpose,
    pub label: String,
    pub buffer: String,
}

/// The main application state
pub struct App {
    /// Persistence context; every mutation is saved through it immediately
    store: SurveyStore,

    pub graph: SurveyGraph,
    pub state: TraversalState,
    pub survey_theme: ThemeConfig,

    pub screen: Screen,
    pub list_selected: usize,
    pub form: Option<QuestionForm>,
    pub confirm: Option<ConfirmAction>,
    pub prompt: Option<Prompt>,

    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    /// Create a new app around a loaded store.
    pub fn new(store: SurveyStore, graph: SurveyGraph, survey_theme: ThemeConfig) -> Self {
        let state = engine::start(&graph);
        App {
            store,
            graph,
            state,
            survey_theme,
            screen: Screen::Player,
            list_selected: 0,
            form: None,
            confirm: None,
            prompt: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        match self.screen {
            Screen::Player => {
                super::panes::render_player_pane(
                    frame,
                    main_chunks[0],
                    &self.graph,
                    &self.state,
                    &self.survey_theme,
                );
            }
            Screen::Settings => {
                super::panes::render_settings_pane(
                    frame,
                    main_chunks[0],
                    &self.graph,
                    self.list_selected,
                    self.form.as_ref(),
                    &self.survey_theme,
                );
            }
        }

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.screen,
            self.confirm.as_ref(),
            self.prompt.as_ref(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }
        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.form.is_some() {
            self.handle_form_key(key);
            return;
        }

        match self.screen {
            Screen::Player => self.handle_player_key(key),
            Screen::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_player_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answer(Choice::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => self.answer(Choice::No),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.state = engine::restart(&self.graph);
                self.status_message = "Restarted".to_string();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.screen = Screen::Settings;
                self.status_message = "Settings".to_string();
            }
            _ => {}
        }
    }

    /// Apply a yes/no answer. The engine no-ops on an unresolvable
    /// position, and terminal questions only offer restart.
    fn answer(&mut self, choice: Choice) {
        if matches!(
            DisplayMode::of(&self.graph, &self.state),
            DisplayMode::Prompt(_)
        ) {
            self.state = engine::answer(&self.graph, &self.state, choice);
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::Player;
                self.status_message = "Player".to_string();
            }
            KeyCode::Up => {
                self.list_selected = self.list_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.list_selected + 1 < self.graph.len() {
                    self.list_selected += 1;
                }
            }
            KeyCode::Char('a') => {
                self.form = Some(QuestionForm::blank());
                self.status_message = "Add question".to_string();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(question) = self.graph.questions().get(self.list_selected) {
                    self.form = Some(QuestionForm::for_question(question));
                    self.status_message = "Edit question".to_string();
                }
            }
            KeyCode::Char('d') => {
                if let Some(question) = self.graph.questions().get(self.list_selected) {
                    self.confirm = Some(ConfirmAction::DeleteQuestion(question.id.clone()));
                }
            }
            KeyCode::Char('R') => {
                self.confirm = Some(ConfirmAction::ResetToDefault);
            }
            KeyCode::Char('j') => {
                self.open_prompt(
                    PromptPurpose::ExportJson,
                    "Export JSON to",
                    store::suggested_json_filename(),
                );
            }
            KeyCode::Char('h') => {
                self.open_prompt(
                    PromptPurpose::ExportHtml(false),
                    "Export HTML to",
                    store::suggested_html_filename(false),
                );
            }
            KeyCode::Char('H') => {
                self.open_prompt(
                    PromptPurpose::ExportHtml(true),
                    "Export editable HTML to",
                    store::suggested_html_filename(true),
                );
            }
            KeyCode::Char('i') => {
                self.open_prompt(PromptPurpose::ImportJson, "Import JSON from", String::new());
            }
            KeyCode::Char('t') => {
                let current = self.survey_theme.survey_title.clone();
                self.open_prompt(PromptPurpose::SurveyTitle, "Survey title", current);
            }
            KeyCode::Char('1') => {
                let current = self.survey_theme.bg_color.clone();
                self.open_prompt(PromptPurpose::BgColor, "Background color", current);
            }
            KeyCode::Char('2') => {
                let current = self.survey_theme.card_bg_color.clone();
                self.open_prompt(PromptPurpose::CardColor, "Card color", current);
            }
            KeyCode::Char('3') => {
                let current = self.survey_theme.primary_btn_color.clone();
                self.open_prompt(PromptPurpose::PrimaryColor, "Yes-button color", current);
            }
            KeyCode::Char('4') => {
                let current = self.survey_theme.secondary_btn_color.clone();
                self.open_prompt(PromptPurpose::SecondaryColor, "No-button color", current);
            }
            KeyCode::Char('5') => {
                let current = self.survey_theme.text_color.clone();
                self.open_prompt(PromptPurpose::TextColor, "Text color", current);
            }
            KeyCode::Char('f') => {
                let current = self.survey_theme.font_family.clone();
                self.open_prompt(PromptPurpose::FontFamily, "Font family", current);
            }
            KeyCode::Char('z') => {
                let current = self.survey_theme.font_size.clone();
                self.open_prompt(PromptPurpose::FontSize, "Font size (px)", current);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.form = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Tab => form.focused = form.focused.next(),
            KeyCode::BackTab => form.focused = form.focused.prev(),
            KeyCode::Enter => self.save_form(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                let editing_id = form.editing_id.clone();
                match form.focused {
                    FormField::TextAlign => form.text_align = toggle_align(form.text_align),
                    FormField::YesMessageAlign => {
                        form.yes_message_align = toggle_align(form.yes_message_align)
                    }
                    FormField::NoMessageAlign => {
                        form.no_message_align = toggle_align(form.no_message_align)
                    }
                    FormField::YesNext => {
                        form.yes_next_id = cycle_link(
                            &self.graph,
                            form.yes_next_id.as_deref(),
                            editing_id.as_deref(),
                            forward,
                        );
                    }
                    FormField::NoNext => {
                        form.no_next_id = cycle_link(
                            &self.graph,
                            form.no_next_id.as_deref(),
                            editing_id.as_deref(),
                            forward,
                        );
                    }
                    _ => {}
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = form.focused_text_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = form.focused_text_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// Validate and commit the form. Empty question text blocks the save
    /// and leaves everything untouched.
    fn save_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };

        if form.text.trim().is_empty() {
            self.status_message = "Enter the question text".to_string();
            self.form = Some(form);
            return;
        }

        let editing = form.editing_id.clone();
        let id = editing.clone().unwrap_or_else(|| self.graph.fresh_id());
        self.graph.upsert(form.into_question(id.clone()));
        self.persist_graph();

        // Editing the active question restarts traversal so stale
        // positions never linger.
        if editing.is_some() && self.state.current_question_id.as_deref() == Some(id.as_str()) {
            self.state = engine::restart(&self.graph);
        }

        self.status_message = if editing.is_some() {
            "Question updated".to_string()
        } else {
            "Question added".to_string()
        };
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(action) = self.confirm.take() else {
            return;
        };

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => match action {
                ConfirmAction::DeleteQuestion(id) => self.delete_question(&id),
                ConfirmAction::ResetToDefault => self.reset_to_default(),
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.status_message = "Cancelled".to_string();
            }
            _ => {
                // Any other key keeps the confirmation pending.
                self.confirm = Some(action);
            }
        }
    }

    /// Remove a question. Links pointing at it are left dangling on
    /// purpose; the engine degrades on them silently.
    fn delete_question(&mut self, id: &str) {
        if self.graph.remove(id) {
            self.persist_graph();
            if self.list_selected >= self.graph.len() {
                self.list_selected = self.graph.len().saturating_sub(1);
            }
            if self.state.current_question_id.as_deref() == Some(id) {
                self.state = engine::restart(&self.graph);
            }
            self.status_message = "Question deleted".to_string();
        }
    }

    fn reset_to_default(&mut self) {
        self.graph = SurveyGraph::new(SurveyGraph::default_questions());
        self.persist_graph();
        self.state = engine::restart(&self.graph);
        self.list_selected = 0;
        self.status_message = "Questions reset to defaults".to_string();
    }

    fn open_prompt(&mut self, purpose: PromptPurpose, label: &str, buffer: String) {
        self.prompt = Some(Prompt {
            purpose,
            label: label.to_string(),
            buffer,
        });
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Enter => self.submit_prompt(prompt),
            KeyCode::Backspace => {
                prompt.buffer.pop();
                self.prompt = Some(prompt);
            }
            KeyCode::Char(c) => {
                prompt.buffer.push(c);
                self.prompt = Some(prompt);
            }
            _ => {
                self.prompt = Some(prompt);
            }
        }
    }

    fn submit_prompt(&mut self, prompt: Prompt) {
        let value = prompt.buffer.trim().to_string();

        match prompt.purpose {
            PromptPurpose::ImportJson => self.import_questions(&value),
            PromptPurpose::ExportJson => {
                let path = if value.is_empty() {
                    store::suggested_json_filename()
                } else {
                    value
                };
                match self.store.export_questions(&self.graph, Path::new(&path)) {
                    Ok(()) => self.status_message = format!("Survey exported to {}", path),
                    Err(e) => self.status_message = format!("Export failed: {}", e),
                }
            }
            PromptPurpose::ExportHtml(editable) => {
                let path = if value.is_empty() {
                    store::suggested_html_filename(editable)
                } else {
                    value
                };
                let mode = if editable {
                    ExportMode::Editable
                } else {
                    ExportMode::Simple
                };
                let document = export_html(&self.graph, &self.survey_theme, mode);
                match store::save_file(Path::new(&path), &document) {
                    Ok(()) => self.status_message = format!("HTML exported to {}", path),
                    Err(e) => self.status_message = format!("Export failed: {}", e),
                }
            }
            PromptPurpose::SurveyTitle => {
                self.survey_theme.survey_title = value;
                self.persist_theme();
            }
            PromptPurpose::BgColor => {
                self.survey_theme.bg_color = value;
                self.persist_theme();
            }
            PromptPurpose::CardColor => {
                self.survey_theme.card_bg_color = value;
                self.persist_theme();
            }
            PromptPurpose::PrimaryColor => {
                self.survey_theme.primary_btn_color = value;
                self.persist_theme();
            }
            PromptPurpose::SecondaryColor => {
                self.survey_theme.secondary_btn_color = value;
                self.persist_theme();
            }
            PromptPurpose::TextColor => {
                self.survey_theme.text_color = value;
                self.persist_theme();
            }
            PromptPurpose::FontFamily => {
                self.survey_theme.font_family = value;
                self.persist_theme();
            }
            PromptPurpose::FontSize => {
                self.survey_theme.font_size = value;
                self.persist_theme();
            }
        }
    }

    /// Import replaces the graph wholesale; on any decode error the prior
    /// graph and traversal state stay untouched.
    fn import_questions(&mut self, path: &str) {
        if path.is_empty() {
            self.status_message = "No file given".to_string();
            return;
        }
        match self.store.import_questions(Path::new(path)) {
            Ok(graph) => {
                self.graph = graph;
                self.state = engine::restart(&self.graph);
                self.list_selected = 0;
                self.status_message = "Survey imported".to_string();
            }
            Err(e) => {
                self.status_message = format!("Import failed: {}", e);
            }
        }
    }

    fn persist_graph(&mut self) {
        if let Err(e) = self.store.save_graph(&self.graph) {
            self.status_message = format!("Save failed: {}", e);
        }
    }

    fn persist_theme(&mut self) {
        match self.store.save_theme(&self.survey_theme) {
            Ok(()) => self.status_message = "Theme saved".to_string(),
            Err(e) => self.status_message = format!("Save failed: {}", e),
        }
    }
}

impl QuestionForm {
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::Text => Some(&mut self.text),
            FormField::YesMessage => Some(&mut self.yes_message),
            FormField::NoMessage => Some(&mut self.no_message),
            _ => None,
        }
    }
}

fn toggle_align(align: Align) -> Align {
    match align {
        Align::Left => Align::Center,
        Align::Center => Align::Left,
    }
}

/// Cycle a next-link through `None` and every question id except the one
/// being edited (a question never links to itself through the form).
fn cycle_link(
    graph: &SurveyGraph,
    current: Option<&str>,
    editing_id: Option<&str>,
    forward: bool,
) -> Option<String> {
    let ids: Vec<&str> = graph
        .iter()
        .map(|q| q.id.as_str())
        .filter(|id| Some(*id) != editing_id)
        .collect();
    if ids.is_empty() {
        return None;
    }

    // Positions: 0 = None, 1..=ids.len() = ids
    let position = match current {
        None => 0,
        Some(id) => ids.iter().position(|x| *x == id).map(|i| i + 1).unwrap_or(0),
    };
    let count = ids.len() + 1;
    let next = if forward {
        (position + 1) % count
    } else {
        (position + count - 1) % count
    };

    if next == 0 {
        None
    } else {
        Some(ids[next - 1].to_string())
    }
}
