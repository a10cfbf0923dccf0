//! # Introduction
//!
//! twofold is a yes/no branching survey builder and player. An author
//! defines a directed graph of questions where each answer either advances
//! to another question or terminates the flow with a message; a respondent
//! walks that graph interactively in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), and the whole survey can be exported
//! as one standalone HTML document that replays identically offline.
//!
//! ## Pipeline
//!
//! ```text
//! Store (JSON) → Survey Graph → Traversal Engine → TUI
//!                            ↘ Static Exporter → standalone HTML
//! ```
//!
//! 1. [`survey`] — the data model: [`survey::Question`] nodes, the ordered
//!    [`survey::SurveyGraph`], and the cosmetic [`survey::ThemeConfig`].
//! 2. [`engine`] — the pure traversal state machine: `start`, `answer`,
//!    `restart`, and display-mode derivation. No I/O anywhere.
//! 3. [`markup`] — the `**bold**` / `__underline__` / `*italic*` inline
//!    mini-language, rendered to ratatui lines and to HTML from one parser.
//! 4. [`store`] — directory-backed key-value persistence plus the JSON
//!    import/export triggers, with per-record validation on import.
//! 5. [`export`] — the static exporter: a self-contained HTML document
//!    embedding the graph, theme, and a faithful copy of the engine.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod engine;
pub mod export;
pub mod markup;
pub mod store;
pub mod survey;
pub mod ui;
