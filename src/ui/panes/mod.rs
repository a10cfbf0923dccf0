//! TUI pane rendering modules
//!
//! Stateless render functions for everything visible on screen:
//!
//! - [`player`]: the respondent's view (active question, completion
//!   screen, or not-configured notice)
//! - [`settings`]: the author's view (question list, add/edit form,
//!   theme and keybinding summary)
//! - [`status`]: the bottom status bar, which also hosts pending
//!   confirmations and text prompts

pub mod player;
pub mod settings;
pub mod status;

pub use player::render_player_pane;
pub use settings::render_settings_pane;
pub use status::render_status_bar;
