//! Static export of a survey
//!
//! Produces one standalone, dependency-free HTML document that embeds a
//! deep copy of the graph and theme as inert data plus a re-implementation
//! of the traversal engine driving a minimal re-render on every answer.
//!
//! The embedded runtime is generated from the same constants and decision
//! order as [`crate::engine`]: the graph literal, the default completion
//! message, and the markup pass order are all emitted from the Rust side,
//! so the two runtimes cannot drift apart independently.
//!
//! [`ExportMode::Editable`] additionally embeds an in-document question
//! list/editor, a theme editor, a JSON re-export affordance, and a
//! playback-only HTML re-export that rebuilds a simple document from the
//! edited in-memory copy. All of it operates on the embedded copy only.

pub mod html;

pub use html::{export_html, ExportMode, QUESTIONS_MARKER};
