//! Pure traversal state transitions

use crate::survey::{Align, Question, SurveyGraph};

/// Final message shown when a branch terminates without its own message.
pub const DEFAULT_COMPLETION_MESSAGE: &str = "Thank you for completing the survey!";

/// Message shown when the graph is empty or the position cannot be resolved.
pub const NOT_CONFIGURED_MESSAGE: &str = "No questions configured yet.";

/// A respondent's yes/no choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

/// The respondent's position in the graph.
///
/// Either an active question (by id) or a terminated flow carrying its
/// final message. The state is ephemeral and never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraversalState {
    /// The active question, or `None` once the flow has terminated (or was
    /// never configured).
    pub current_question_id: Option<String>,

    /// Final message once terminated; empty while a question is active.
    pub final_message: String,

    pub final_message_align: Align,
}

/// Initial state: positioned at the first question, or a distinguishable
/// "not configured" state for an empty graph.
pub fn start(graph: &SurveyGraph) -> TraversalState {
    TraversalState {
        current_question_id: graph.first().map(|q| q.id.clone()),
        final_message: String::new(),
        final_message_align: Align::Center,
    }
}

/// Apply a yes/no answer to the current question.
///
/// If the current id does not resolve (already terminated, or a dangling
/// reference left behind by a deletion), this is a no-op that returns the
/// state unchanged. Dangling next-links are not an error either: they put
/// the respondent on a position the next `answer` call degrades on.
pub fn answer(graph: &SurveyGraph, state: &TraversalState, choice: Choice) -> TraversalState {
    let question = match state
        .current_question_id
        .as_deref()
        .and_then(|id| graph.get(id))
    {
        Some(q) => q,
        None => return state.clone(),
    };

    let (next_id, message, message_align) = branch(question, choice);

    if let Some(next_id) = next_id {
        // A link wins even when a message is also set on the branch.
        return TraversalState {
            current_question_id: Some(next_id.to_string()),
            final_message: String::new(),
            final_message_align: Align::Center,
        };
    }

    if !message.is_empty() {
        return TraversalState {
            current_question_id: None,
            final_message: message.to_string(),
            final_message_align: message_align,
        };
    }

    TraversalState {
        current_question_id: None,
        final_message: DEFAULT_COMPLETION_MESSAGE.to_string(),
        final_message_align: Align::Center,
    }
}

/// Jump back to the first question and clear any final message.
pub fn restart(graph: &SurveyGraph) -> TraversalState {
    start(graph)
}

fn branch(question: &Question, choice: Choice) -> (Option<&str>, &str, Align) {
    match choice {
        Choice::Yes => (
            question.yes_next_id.as_deref(),
            &question.yes_message,
            question.yes_message_align,
        ),
        Choice::No => (
            question.no_next_id.as_deref(),
            &question.no_message,
            question.no_message_align,
        ),
    }
}

/// What the player should render for a given graph and state.
///
/// Terminal detection is graph-driven (both links absent), independent of
/// `final_message`: a terminal question is rendered as a completion screen
/// using its own `text`, and `answer` is never invoked on it, so its
/// `yes_message`/`no_message` fields are dead there. The player has always
/// behaved this way and the exported runtime matches it.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayMode<'a> {
    /// Active question with outgoing links: show yes/no actions.
    Prompt(&'a Question),

    /// Active terminal question: show its text as a completion screen with
    /// a restart action.
    Completion(&'a Question),

    /// Terminated flow: show the final message with a restart action.
    Final { message: &'a str, align: Align },

    /// Empty graph, or an unresolvable position with no final message.
    NotConfigured,
}

impl<'a> DisplayMode<'a> {
    pub fn of(graph: &'a SurveyGraph, state: &'a TraversalState) -> Self {
        if let Some(question) = state
            .current_question_id
            .as_deref()
            .and_then(|id| graph.get(id))
        {
            if question.is_terminal() {
                return DisplayMode::Completion(question);
            }
            return DisplayMode::Prompt(question);
        }

        if !state.final_message.is_empty() {
            return DisplayMode::Final {
                message: &state.final_message,
                align: state.final_message_align,
            };
        }

        DisplayMode::NotConfigured
    }
}
