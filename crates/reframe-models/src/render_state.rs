//! Per-frame render state handed to the presentation layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Color;

/// A word as it should be drawn on a given frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VisibleWord {
    /// Display text after casing and punctuation rules
    pub text: String,
    pub color: Color,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    pub frame: u64,
    /// Play time of the frame in seconds
    pub time: f64,
    /// Index of the active display segment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_index: Option<usize>,
    /// Words of the active segment; empty when no subtitle is shown
    pub visible_words: Vec<VisibleWord>,
    /// Horizontal translation of the source video in pixels (zero or negative)
    pub crop_offset_pixels: f64,
    /// Index of the cropping box in effect; `None` means the centered fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_box_index: Option<usize>,
}

impl RenderState {
    /// Whether any subtitle text is drawn on this frame.
    pub fn has_subtitle(&self) -> bool {
        !self.visible_words.is_empty()
    }

    /// Display text of the frame, words joined by spaces.
    pub fn subtitle_text(&self) -> String {
        self.visible_words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
