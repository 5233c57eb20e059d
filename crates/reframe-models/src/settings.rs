//! Subtitle styling settings.
//!
//! Callers send a sparse [`SubtitleSettings`]; every field is optional and
//! missing fields fall back to the defaults below. The timeline only ever
//! works with the fully populated [`ResolvedSubtitleSettings`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Color;

pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::rgb(0x33, 0xff, 0x52);
pub const DEFAULT_SECONDARY_COLOR: Color = Color::rgb(0xff, 0x33, 0x52);
pub const DEFAULT_REMOVE_PUNCTUATION: bool = true;
pub const DEFAULT_ALL_CAPS: bool = true;
pub const DEFAULT_MAX_WORDS_PER_LINE: usize = 2;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u32 = 84;

/// Caller-supplied subtitle settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleSettings {
    /// Color of the highlighted word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<Color>,
    /// Accent color handed to the presentation layer for short lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    /// Strip punctuation from displayed text (timing is unaffected)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_punctuation: Option<bool>,
    /// Upper-case displayed text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_caps: Option<bool>,
    /// Word cap per display line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_words_per_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl SubtitleSettings {
    /// Merge with the defaults. Caller-supplied values always win.
    ///
    /// `max_words_per_line` is clamped to at least 1.
    pub fn resolve(&self) -> ResolvedSubtitleSettings {
        let defaults = ResolvedSubtitleSettings::default();
        ResolvedSubtitleSettings {
            highlight_color: self.highlight_color.unwrap_or(defaults.highlight_color),
            secondary_color: self.secondary_color.unwrap_or(defaults.secondary_color),
            remove_punctuation: self.remove_punctuation.unwrap_or(defaults.remove_punctuation),
            all_caps: self.all_caps.unwrap_or(defaults.all_caps),
            max_words_per_line: self
                .max_words_per_line
                .unwrap_or(defaults.max_words_per_line)
                .max(1),
            font_family: self
                .font_family
                .clone()
                .unwrap_or(defaults.font_family),
            font_size: self.font_size.unwrap_or(defaults.font_size),
        }
    }
}

/// Subtitle settings with every field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSubtitleSettings {
    pub highlight_color: Color,
    pub secondary_color: Color,
    pub remove_punctuation: bool,
    pub all_caps: bool,
    pub max_words_per_line: usize,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for ResolvedSubtitleSettings {
    fn default() -> Self {
        Self {
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            secondary_color: DEFAULT_SECONDARY_COLOR,
            remove_punctuation: DEFAULT_REMOVE_PUNCTUATION,
            all_caps: DEFAULT_ALL_CAPS,
            max_words_per_line: DEFAULT_MAX_WORDS_PER_LINE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}
