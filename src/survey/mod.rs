//! Survey data model
//!
//! This module provides the authored survey structures:
//! - [`question`]: A single yes/no question node and its branch links
//! - [`graph`]: The ordered collection of questions with id-based lookup
//! - [`theme`]: Cosmetic configuration (colors, font, title) for rendering
//!   and export
//!
//! # Graph Shape
//!
//! A survey is a directed graph: each question's yes/no branch either points
//! at another question by id or terminates the flow. Order matters only for
//! the entry point (first question) and list display. Cycles are allowed,
//! and branch links are not checked for dangling targets; deleting a
//! question never cascades.

pub mod graph;
pub mod question;
pub mod theme;

pub use graph::SurveyGraph;
pub use question::{Align, Question};
pub use theme::ThemeConfig;
