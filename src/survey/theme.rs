//! Cosmetic survey configuration
//!
//! Colors, font, and title consumed by the static exporter and by anything
//! that renders the survey. Not part of traversal semantics.

use serde::{Deserialize, Serialize};

/// Theme configuration persisted under the `surveyColors` key.
///
/// Every field is optional on the wire; missing fields fall back to the
/// defaults below. `font_size` stays a numeric string because that is what
/// the persisted format has always carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default = "default_bg_color")]
    pub bg_color: String,

    #[serde(default = "default_card_bg_color")]
    pub card_bg_color: String,

    #[serde(default = "default_primary_btn_color")]
    pub primary_btn_color: String,

    #[serde(default = "default_secondary_btn_color")]
    pub secondary_btn_color: String,

    #[serde(default = "default_text_color")]
    pub text_color: String,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Question/message font size in pixels, as a numeric string.
    #[serde(default = "default_font_size")]
    pub font_size: String,

    #[serde(default = "default_survey_title")]
    pub survey_title: String,
}

fn default_bg_color() -> String {
    "#dbeafe".to_string()
}

fn default_card_bg_color() -> String {
    "#ffffff".to_string()
}

fn default_primary_btn_color() -> String {
    "#3b82f6".to_string()
}

fn default_secondary_btn_color() -> String {
    "#ffffff".to_string()
}

fn default_text_color() -> String {
    "#0f172a".to_string()
}

fn default_font_family() -> String {
    "system-ui".to_string()
}

fn default_font_size() -> String {
    "28".to_string()
}

fn default_survey_title() -> String {
    "Survey".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            bg_color: default_bg_color(),
            card_bg_color: default_card_bg_color(),
            primary_btn_color: default_primary_btn_color(),
            secondary_btn_color: default_secondary_btn_color(),
            text_color: default_text_color(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            survey_title: default_survey_title(),
        }
    }
}

impl ThemeConfig {
    /// Font size as a pixel count, falling back to the default when the
    /// stored string is not a number.
    pub fn font_size_px(&self) -> u32 {
        self.font_size.trim().parse().unwrap_or(28)
    }
}
