//! Survey traversal engine
//!
//! The engine is a pure state machine over a [`SurveyGraph`]: given the
//! current [`TraversalState`] and a yes/no [`Choice`], it computes the next
//! state with no I/O and no side effects. Callers (the TUI and the static
//! exporter's embedded runtime) own persistence and display.
//!
//! # Decision Order
//!
//! `answer` resolves a branch in this fixed order:
//!
//! 1. A next-question link wins, even when a message is also set.
//! 2. Otherwise a non-empty branch message terminates the flow with that
//!    message and its alignment.
//! 3. Otherwise the flow terminates with [`DEFAULT_COMPLETION_MESSAGE`],
//!    center-aligned.
//!
//! The exported HTML document re-implements the same order against the
//! embedded copy of the graph; the constants here are the single source
//! both runtimes are generated from.
//!
//! [`SurveyGraph`]: crate::survey::SurveyGraph

pub mod traversal;

pub use traversal::{
    answer, restart, start, Choice, DisplayMode, TraversalState, DEFAULT_COMPLETION_MESSAGE,
    NOT_CONFIGURED_MESSAGE,
};
