//! A single survey question node

use serde::{Deserialize, Serialize};

/// Text alignment for a question or termination message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
}

/// A node in the survey graph.
///
/// Each branch (`yes_next_id` / `no_next_id`) either references another
/// question's id or is absent, which terminates the flow on that branch.
/// The corresponding message (`yes_message` / `no_message`) is only shown
/// when the branch has no next-question link; an empty string means "no
/// message" and falls back to the default completion text.
///
/// Wire format is the camelCase JSON record of the persisted graph array;
/// absent links serialize as `null` and messages as empty strings, matching
/// what the editor has always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique, stable identifier. Assigned at creation, never reused.
    pub id: String,

    /// Display text; may embed `**bold**`, `*italic*`, `__underline__` spans.
    pub text: String,

    /// Next question when the respondent answers "yes", if any.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub yes_next_id: Option<String>,

    /// Next question when the respondent answers "no", if any.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub no_next_id: Option<String>,

    /// Termination message for the "yes" branch (empty = none).
    #[serde(default)]
    pub yes_message: String,

    /// Termination message for the "no" branch (empty = none).
    #[serde(default)]
    pub no_message: String,

    #[serde(default)]
    pub text_align: Align,

    #[serde(default)]
    pub yes_message_align: Align,

    #[serde(default)]
    pub no_message_align: Align,
}

impl Question {
    /// Create a question with the given id and text and no links or messages.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Question {
            id: id.into(),
            text: text.into(),
            yes_next_id: None,
            no_next_id: None,
            yes_message: String::new(),
            no_message: String::new(),
            text_align: Align::Center,
            yes_message_align: Align::Center,
            no_message_align: Align::Center,
        }
    }

    /// A terminal question has no outgoing links on either branch.
    ///
    /// Terminal questions are rendered as a completion screen using their
    /// own `text`; their `yes_message`/`no_message` fields are never shown
    /// through normal traversal. That is long-standing observed behavior,
    /// kept as-is rather than "fixed".
    pub fn is_terminal(&self) -> bool {
        self.yes_next_id.is_none() && self.no_next_id.is_none()
    }
}

/// Legacy exports sometimes carry `""` where they mean "no link".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
