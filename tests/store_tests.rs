// Integration tests for directory-backed persistence and import validation

use std::fs;
use std::path::PathBuf;

use twofold::store::{
    decode_questions, encode_questions, StoreError, SurveyStore, QUESTIONS_KEY, THEME_KEY,
};
use twofold::survey::{Question, SurveyGraph, ThemeConfig};

/// A fresh store under the system temp directory, unique per test name so
/// parallel tests never collide.
fn temp_store(test_name: &str) -> SurveyStore {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "twofold-store-tests-{}-{}",
        std::process::id(),
        test_name
    ));
    let _ = fs::remove_dir_all(&dir);
    SurveyStore::open(dir).expect("temp store should open")
}

fn two_question_graph() -> SurveyGraph {
    let mut q1 = Question::new("1", "Like X?");
    q1.yes_next_id = Some("2".to_string());
    q1.no_message = "Try something simpler!".to_string();
    let q2 = Question::new("2", "Know Y?");
    SurveyGraph::new(vec![q1, q2])
}

#[test]
fn test_first_run_seeds_default_questions() {
    let store = temp_store("first_run");

    let graph = store.load_graph().expect("first load should succeed");
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.first().map(|q| q.id.as_str()), Some("1"));
    assert_eq!(graph.get("1").map(|q| q.yes_next_id.as_deref()), Some(Some("2")));

    // The seed is persisted, not just returned.
    let raw = store
        .get(QUESTIONS_KEY)
        .expect("read should succeed")
        .expect("seed should be written");
    assert_eq!(decode_questions(&raw).expect("seed should decode").len(), 2);
}

#[test]
fn test_graph_round_trips_through_store() {
    let store = temp_store("graph_round_trip");
    let graph = two_question_graph();

    store.save_graph(&graph).expect("save should succeed");
    let loaded = store.load_graph().expect("load should succeed");
    assert_eq!(loaded, graph);
}

#[test]
fn test_export_then_import_round_trips() {
    let store = temp_store("export_import");
    let graph = two_question_graph();
    let file = store.dir().join("exported.json");

    store
        .export_questions(&graph, &file)
        .expect("export should succeed");
    let imported = store.import_questions(&file).expect("import should succeed");
    assert_eq!(imported, graph);

    // The import also replaced the stored graph.
    assert_eq!(store.load_graph().expect("load should succeed"), graph);
}

#[test]
fn test_malformed_import_leaves_stored_graph_untouched() {
    let store = temp_store("malformed_import");
    let graph = two_question_graph();
    store.save_graph(&graph).expect("save should succeed");

    let file = store.dir().join("broken.json");
    fs::write(&file, "{ this is not json").expect("write should succeed");

    match store.import_questions(&file) {
        Err(StoreError::Decode { .. }) => {}
        other => panic!("Expected decode error, got {:?}", other),
    }
    assert_eq!(store.load_graph().expect("load should succeed"), graph);
}

#[test]
fn test_import_rejects_bad_record_with_its_index() {
    let store = temp_store("bad_record");
    let graph = two_question_graph();
    store.save_graph(&graph).expect("save should succeed");

    let file = store.dir().join("bad-record.json");
    fs::write(
        &file,
        r#"[{"id": "a", "text": "fine"}, {"id": 7, "text": "id is not a string"}]"#,
    )
    .expect("write should succeed");

    match store.import_questions(&file) {
        Err(StoreError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
        other => panic!("Expected invalid-record error, got {:?}", other),
    }
    assert_eq!(store.load_graph().expect("load should succeed"), graph);
}

#[test]
fn test_import_rejects_empty_id() {
    match decode_questions(r#"[{"id": "", "text": "nameless"}]"#) {
        Err(StoreError::EmptyId { index }) => assert_eq!(index, 0),
        other => panic!("Expected empty-id error, got {:?}", other),
    }
}

#[test]
fn test_import_rejects_duplicate_id() {
    let raw = r#"[
        {"id": "a", "text": "first"},
        {"id": "b", "text": "second"},
        {"id": "a", "text": "impostor"}
    ]"#;
    match decode_questions(raw) {
        Err(StoreError::DuplicateId { index, id }) => {
            assert_eq!(index, 2);
            assert_eq!(id, "a");
        }
        other => panic!("Expected duplicate-id error, got {:?}", other),
    }
}

#[test]
fn test_decode_normalizes_empty_link_to_none() {
    // Legacy exports carry "" where they mean "no link".
    let questions = decode_questions(r#"[{"id": "a", "text": "t", "yesNextId": ""}]"#)
        .expect("decode should succeed");
    assert_eq!(questions[0].yes_next_id, None);
}

#[test]
fn test_decode_fills_missing_fields_with_defaults() {
    let questions =
        decode_questions(r#"[{"id": "a", "text": "bare"}]"#).expect("decode should succeed");
    let q = &questions[0];
    assert_eq!(q.yes_next_id, None);
    assert_eq!(q.no_next_id, None);
    assert_eq!(q.yes_message, "");
    assert_eq!(q.no_message, "");
}

#[test]
fn test_encode_decode_round_trip() {
    let graph = two_question_graph();
    let decoded = decode_questions(&encode_questions(&graph)).expect("decode should succeed");
    assert_eq!(SurveyGraph::new(decoded), graph);
}

#[test]
fn test_theme_round_trips_through_store() {
    let store = temp_store("theme_round_trip");
    let mut theme = ThemeConfig::default();
    theme.bg_color = "#112233".to_string();
    theme.survey_title = "Customer survey".to_string();
    theme.font_size = "32".to_string();

    store.save_theme(&theme).expect("save should succeed");
    assert_eq!(store.load_theme(), theme);
}

#[test]
fn test_missing_or_corrupt_theme_falls_back_to_defaults() {
    let store = temp_store("theme_fallback");
    assert_eq!(store.load_theme(), ThemeConfig::default());

    store
        .set(THEME_KEY, "not json at all")
        .expect("set should succeed");
    assert_eq!(store.load_theme(), ThemeConfig::default());
}

#[test]
fn test_get_unknown_key_is_none() {
    let store = temp_store("unknown_key");
    assert_eq!(store.get("neverSet").expect("read should succeed"), None);
}
