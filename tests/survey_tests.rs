// Integration tests for the question/graph/theme data model

use twofold::survey::{Align, Question, SurveyGraph, ThemeConfig};

#[test]
fn test_question_wire_format_is_camel_case() {
    let mut q = Question::new("1", "Like X?");
    q.yes_next_id = Some("2".to_string());
    q.no_message = "Bye".to_string();
    q.no_message_align = Align::Left;

    let value = serde_json::to_value(&q).expect("question should encode");
    assert_eq!(value["id"], "1");
    assert_eq!(value["yesNextId"], "2");
    assert_eq!(value["noNextId"], serde_json::Value::Null);
    assert_eq!(value["noMessage"], "Bye");
    assert_eq!(value["textAlign"], "center");
    assert_eq!(value["noMessageAlign"], "left");
}

#[test]
fn test_question_decodes_from_camel_case() {
    let q: Question = serde_json::from_str(
        r#"{"id": "x", "text": "T?", "yesNextId": "y", "noMessage": "m", "textAlign": "left"}"#,
    )
    .expect("question should decode");

    assert_eq!(q.id, "x");
    assert_eq!(q.yes_next_id.as_deref(), Some("y"));
    assert_eq!(q.no_next_id, None);
    assert_eq!(q.no_message, "m");
    assert_eq!(q.text_align, Align::Left);
    assert_eq!(q.yes_message_align, Align::Center);
}

#[test]
fn test_terminal_detection_ignores_messages() {
    let mut q = Question::new("1", "Done?");
    q.yes_message = "msg".to_string();
    assert!(q.is_terminal());

    q.no_next_id = Some("2".to_string());
    assert!(!q.is_terminal());
}

#[test]
fn test_upsert_replaces_in_place_and_appends_unknown() {
    let mut graph = SurveyGraph::new(vec![
        Question::new("a", "first"),
        Question::new("b", "second"),
    ]);

    let mut edited = Question::new("a", "first, edited");
    edited.yes_next_id = Some("b".to_string());
    graph.upsert(edited);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.first().map(|q| q.text.as_str()), Some("first, edited"));

    graph.upsert(Question::new("c", "third"));
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.questions()[2].id, "c");
}

#[test]
fn test_remove_does_not_cascade_links() {
    let mut a = Question::new("a", "first");
    a.yes_next_id = Some("b".to_string());
    let mut graph = SurveyGraph::new(vec![a, Question::new("b", "second")]);

    assert!(graph.remove("b"));
    assert!(!graph.remove("b"));
    assert_eq!(graph.len(), 1);

    // The link survives as a dangling reference.
    assert_eq!(graph.get("a").and_then(|q| q.yes_next_id.as_deref()), Some("b"));
    assert!(!graph.contains("b"));
}

#[test]
fn test_fresh_ids_avoid_collisions() {
    let mut graph = SurveyGraph::new(vec![]);
    let first = graph.fresh_id();
    graph.upsert(Question::new(first.clone(), "one"));

    let second = graph.fresh_id();
    assert_ne!(second, first);
    assert!(!graph.contains(&second));
}

#[test]
fn test_theme_fills_missing_fields_with_defaults() {
    let theme: ThemeConfig =
        serde_json::from_str(r##"{"bgColor": "#101010"}"##).expect("theme should decode");

    assert_eq!(theme.bg_color, "#101010");
    assert_eq!(theme.card_bg_color, "#ffffff");
    assert_eq!(theme.survey_title, "Survey");
    assert_eq!(theme.font_size, "28");
}

#[test]
fn test_font_size_parse_falls_back() {
    let mut theme = ThemeConfig::default();
    assert_eq!(theme.font_size_px(), 28);

    theme.font_size = " 36 ".to_string();
    assert_eq!(theme.font_size_px(), 36);

    theme.font_size = "huge".to_string();
    assert_eq!(theme.font_size_px(), 28);
}
