//! Render job definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{CroppingBox, Segment, SubtitleSettings};

/// Unique identifier for a render job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to build the frame timeline of one short.
///
/// Produced by the orchestration layer from the transcription and
/// scene-detection collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderJob {
    #[serde(default)]
    pub id: JobId,
    /// Length of the clip in seconds
    pub duration_secs: f64,
    /// Transcript sentences with word timings
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Scene boxes for reframing; absent means a centered crop throughout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cropping_boxes: Option<Vec<CroppingBox>>,
    #[serde(default)]
    pub settings: SubtitleSettings,
}

impl RenderJob {
    /// Parse a job from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Crop boxes as a slice (empty when absent).
    pub fn cropping_boxes(&self) -> &[CroppingBox] {
        self.cropping_boxes.as_deref().unwrap_or_default()
    }

    /// Total number of transcript words.
    pub fn word_count(&self) -> usize {
        self.segments.iter().map(Segment::word_count).sum()
    }
}
