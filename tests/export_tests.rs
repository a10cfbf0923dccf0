// Integration tests for the standalone HTML exporter

use twofold::engine::{DEFAULT_COMPLETION_MESSAGE, NOT_CONFIGURED_MESSAGE};
use twofold::export::{export_html, ExportMode, QUESTIONS_MARKER};
use twofold::survey::{Align, Question, SurveyGraph, ThemeConfig};

fn two_question_graph() -> SurveyGraph {
    let mut q1 = Question::new("1", "Like X?");
    q1.yes_next_id = Some("2".to_string());
    q1.no_message = "Try something simpler!".to_string();
    let mut q2 = Question::new("2", "Know Y?");
    q2.yes_message = "Great, ready!".to_string();
    SurveyGraph::new(vec![q1, q2])
}

/// Pull the embedded graph literal back out of an exported document.
fn embedded_questions(document: &str) -> Vec<Question> {
    let after = document
        .split(QUESTIONS_MARKER)
        .nth(1)
        .expect("document should embed the graph");
    let literal = after
        .lines()
        .next()
        .expect("graph literal should end its line")
        .trim_end()
        .trim_end_matches(';');
    serde_json::from_str(literal).expect("embedded graph should decode")
}

#[test]
fn test_embedded_graph_round_trips() {
    let graph = two_question_graph();
    let theme = ThemeConfig::default();

    for mode in [ExportMode::Simple, ExportMode::Editable] {
        let document = export_html(&graph, &theme, mode);
        assert_eq!(
            SurveyGraph::new(embedded_questions(&document)),
            graph,
            "embedded graph should equal the source in {:?} mode",
            mode
        );
    }
}

#[test]
fn test_runtime_carries_the_default_completion_branch() {
    // A branch with neither link nor message must fall back to the shared
    // default message inside the exported runtime, same as the engine.
    let document = export_html(
        &two_question_graph(),
        &ThemeConfig::default(),
        ExportMode::Simple,
    );

    let default_literal = serde_json::to_string(DEFAULT_COMPLETION_MESSAGE).expect("encodes");
    assert!(document.contains(&format!("const DEFAULT_MESSAGE = {};", default_literal)));
    assert!(document.contains("finalMessage = DEFAULT_MESSAGE;"));

    let not_configured_literal = serde_json::to_string(NOT_CONFIGURED_MESSAGE).expect("encodes");
    assert!(document.contains(&format!("const NOT_CONFIGURED = {};", not_configured_literal)));
}

#[test]
fn test_simple_mode_has_no_editor_surface() {
    let document = export_html(
        &two_question_graph(),
        &ThemeConfig::default(),
        ExportMode::Simple,
    );

    assert!(!document.contains("toggleSettings"));
    assert!(!document.contains("exportData"));
    assert!(!document.contains("exportSimpleHtml"));
    assert!(!document.contains(r#"id="settings""#));
    assert!(document.contains("handleAnswer"));
}

#[test]
fn test_editable_mode_embeds_the_editor() {
    let document = export_html(
        &two_question_graph(),
        &ThemeConfig::default(),
        ExportMode::Editable,
    );

    assert!(document.contains("toggleSettings"));
    assert!(document.contains(r#"id="settings""#));
    assert!(document.contains("saveQuestion"));
    assert!(document.contains("deleteQuestion"));
    assert!(document.contains("exportData"));
    assert!(document.contains("applyTheme"));
}

#[test]
fn test_editable_mode_can_reexport_a_playback_only_copy() {
    let document = export_html(
        &two_question_graph(),
        &ThemeConfig::default(),
        ExportMode::Editable,
    );

    assert!(document.contains("function exportSimpleHtml()"));
    assert!(document.contains("Export playable HTML"));
    // The rebuilt copy embeds the edited questions and strips the editor
    // surface before download.
    assert!(document.contains("'const QUESTIONS = ' + JSON.stringify(questions)"));
    assert!(document.contains("clone.querySelector('#settings')"));
}

#[test]
fn test_initial_view_shows_the_first_question() {
    let document = export_html(
        &two_question_graph(),
        &ThemeConfig::default(),
        ExportMode::Simple,
    );

    assert!(document.contains("Like X?"));
    assert!(document.contains(r#"onclick="handleAnswer('yes')">Yes</button>"#));
    assert!(document.contains(r#"onclick="handleAnswer('no')">No</button>"#));
}

#[test]
fn test_initial_view_for_terminal_first_question_is_a_completion() {
    let mut q = Question::new("only", "All done already");
    q.text_align = Align::Left;
    let graph = SurveyGraph::new(vec![q]);

    let document = export_html(&graph, &ThemeConfig::default(), ExportMode::Simple);

    assert!(document.contains("All done already"));
    assert!(document.contains("Take the survey again"));
    assert!(document.contains(r#"class="text-left""#));
    assert!(!document.contains(r#"onclick="handleAnswer('yes')">Yes</button>"#));
}

#[test]
fn test_initial_view_for_empty_graph_is_not_configured() {
    let graph = SurveyGraph::new(vec![]);
    let document = export_html(&graph, &ThemeConfig::default(), ExportMode::Simple);

    // The pre-rendered #app view carries the notice directly.
    assert!(document.contains(&format!(
        r#"<div id="app"><div class="final-message"><div class="message-text">{}</div></div></div>"#,
        NOT_CONFIGURED_MESSAGE
    )));
}

#[test]
fn test_initial_view_renders_markup_as_html() {
    let graph = SurveyGraph::new(vec![Question::new("1", "Pick **now** or *later*?")]);
    let document = export_html(&graph, &ThemeConfig::default(), ExportMode::Simple);

    assert!(document.contains("Pick <strong>now</strong> or <em>later</em>?"));
}

#[test]
fn test_theme_values_are_substituted() {
    let mut theme = ThemeConfig::default();
    theme.bg_color = "#112233".to_string();
    theme.survey_title = "Quarterly <check-in>".to_string();
    theme.font_size = "32".to_string();

    let document = export_html(&two_question_graph(), &theme, ExportMode::Simple);

    assert!(document.contains("#112233"));
    assert!(document.contains("font-size: 32px"));
    // The title lands in markup context and must be escaped there.
    assert!(document.contains("Quarterly &lt;check-in&gt;"));
    assert!(!document.contains("Quarterly <check-in>"));
}

#[test]
fn test_no_template_markers_survive() {
    for mode in [ExportMode::Simple, ExportMode::Editable] {
        let document = export_html(&two_question_graph(), &ThemeConfig::default(), mode);
        assert!(
            !document.contains("__TF_"),
            "unreplaced marker left in {:?} mode",
            mode
        );
    }
}
