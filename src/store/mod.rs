//! Key-value persistence and file triggers
//!
//! The store is the explicit context object holding everything that used to
//! be ambient browser state: the active graph and theme live under fixed
//! keys in a data directory, loaded once at session start and saved on
//! every mutation. File save/read triggers for JSON export and import live
//! here too.
//!
//! Imported data is never trusted wholesale: each array element is
//! validated against the question shape, and the first offending record
//! aborts the import with its index while the previously loaded graph
//! stays untouched.

pub mod errors;

pub use errors::StoreError;

use crate::survey::{Question, SurveyGraph, ThemeConfig};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Key under which the question graph is persisted.
pub const QUESTIONS_KEY: &str = "surveyQuestions";

/// Key under which the theme configuration is persisted.
pub const THEME_KEY: &str = "surveyColors";

/// A directory-backed key-value store (one `<key>.json` file per key).
#[derive(Debug)]
pub struct SurveyStore {
    dir: PathBuf,
}

impl SurveyStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(SurveyStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Fetch the raw value for a key, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        read_file(&path).map(Some)
    }

    /// Set the raw value for a key.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        save_file(&self.key_path(key), value)
    }

    /// Load the persisted graph. A first run with nothing stored seeds the
    /// default questions and persists them before returning.
    pub fn load_graph(&self) -> Result<SurveyGraph, StoreError> {
        match self.get(QUESTIONS_KEY)? {
            Some(raw) => Ok(SurveyGraph::new(decode_questions(&raw)?)),
            None => {
                let graph = SurveyGraph::new(SurveyGraph::default_questions());
                self.save_graph(&graph)?;
                Ok(graph)
            }
        }
    }

    pub fn save_graph(&self, graph: &SurveyGraph) -> Result<(), StoreError> {
        self.set(QUESTIONS_KEY, &encode_questions(graph))
    }

    /// Load the persisted theme, falling back to defaults per field. A
    /// missing or corrupt theme never blocks the session.
    pub fn load_theme(&self) -> ThemeConfig {
        self.get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: &ThemeConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(theme).map_err(|e| StoreError::Decode {
            message: e.to_string(),
        })?;
        self.set(THEME_KEY, &raw)
    }

    /// Import a question file, replacing the stored graph wholesale.
    ///
    /// On any error the stored graph is untouched; decoding happens fully
    /// before anything is written.
    pub fn import_questions(&self, path: &Path) -> Result<SurveyGraph, StoreError> {
        let raw = read_file(path)?;
        let graph = SurveyGraph::new(decode_questions(&raw)?);
        self.save_graph(&graph)?;
        Ok(graph)
    }

    /// Export the graph as pretty-printed JSON to `path`.
    pub fn export_questions(&self, graph: &SurveyGraph, path: &Path) -> Result<(), StoreError> {
        save_file(path, &encode_questions(graph))
    }
}

/// Decode and validate a persisted question array.
///
/// Every element must individually match the [`Question`] shape and carry a
/// non-empty id that no earlier element claimed.
pub fn decode_questions(raw: &str) -> Result<Vec<Question>, StoreError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| StoreError::Decode {
            message: e.to_string(),
        })?;

    let mut questions = Vec::with_capacity(values.len());
    let mut seen = FxHashSet::default();

    for (index, value) in values.into_iter().enumerate() {
        let question: Question =
            serde_json::from_value(value).map_err(|e| StoreError::InvalidRecord {
                index,
                message: e.to_string(),
            })?;
        if question.id.is_empty() {
            return Err(StoreError::EmptyId { index });
        }
        if !seen.insert(question.id.clone()) {
            return Err(StoreError::DuplicateId {
                index,
                id: question.id,
            });
        }
        questions.push(question);
    }

    Ok(questions)
}

/// Encode a graph as the pretty-printed persisted array.
pub fn encode_questions(graph: &SurveyGraph) -> String {
    // Question serialization is infallible (plain strings and enums).
    serde_json::to_string_pretty(graph.questions()).unwrap_or_else(|_| "[]".to_string())
}

/// File-read trigger: yield a file's text content or an error.
pub fn read_file(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// File-save trigger: write content to `path`, creating parents as needed.
pub fn save_file(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }
    fs::write(path, contents).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Suggested download name for a JSON export.
pub fn suggested_json_filename() -> String {
    format!("survey-questions-{}.json", unix_millis())
}

/// Suggested download name for an exported HTML document.
pub fn suggested_html_filename(editable: bool) -> String {
    if editable {
        format!("survey-editable-{}.html", unix_millis())
    } else {
        format!("survey-{}.html", unix_millis())
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
