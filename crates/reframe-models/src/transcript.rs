//! Transcript word timings and display segments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One spoken word with its start/end time in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordTiming {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl WordTiming {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Whether the word closes a sentence (`.`, `!` or `?`).
    pub fn ends_sentence(&self) -> bool {
        self.text.trim_end().ends_with(['.', '!', '?'])
    }
}

/// A line of subtitle text with aggregate timing and its words.
///
/// Transcription collaborators send segments of arbitrary length; the reflow
/// engine rebuilds them with [`Segment::from_words`] so that `start`, `end`
/// and `text` are always derived from `word_timings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub word_timings: Vec<WordTiming>,
}

impl Segment {
    /// Build a segment whose timing and text are derived from its words.
    ///
    /// Returns `None` for an empty word list.
    pub fn from_words(word_timings: Vec<WordTiming>) -> Option<Self> {
        let start = word_timings.first()?.start;
        let end = word_timings.last()?.end;
        let text = word_timings
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Some(Self {
            start,
            end,
            text,
            word_timings,
        })
    }

    /// Whether `time` (seconds) falls inside `[start, end]`.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    pub fn word_count(&self) -> usize {
        self.word_timings.len()
    }

    /// Check that `start`, `end` and `text` match the word list.
    pub fn is_consistent(&self) -> bool {
        match Segment::from_words(self.word_timings.clone()) {
            Some(derived) => {
                derived.start == self.start && derived.end == self.end && derived.text == self.text
            }
            None => false,
        }
    }
}
