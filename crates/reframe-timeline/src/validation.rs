//! Precondition checks for collaborator input.
//!
//! The reflow engine and sampler tolerate any input. Broken ordering in the
//! transcript or scene boxes is still a bug upstream, so the job boundary
//! rejects it here instead of letting first-match tie-breaks hide it.

use reframe_models::{CroppingBox, Segment};

use crate::error::{TimelineError, TimelineResult};

/// Check word timings: finite, `start <= end`, non-decreasing starts.
pub fn validate_transcript(segments: &[Segment]) -> TimelineResult<()> {
    for (segment_index, segment) in segments.iter().enumerate() {
        let mut previous_start: Option<f64> = None;

        for (word_index, word) in segment.word_timings.iter().enumerate() {
            if !word.start.is_finite() || !word.end.is_finite() {
                return Err(TimelineError::NonFiniteTiming {
                    segment: segment_index,
                    word: word_index,
                });
            }
            if word.start > word.end {
                return Err(TimelineError::InvertedWord {
                    segment: segment_index,
                    word: word_index,
                    start: word.start,
                    end: word.end,
                });
            }
            if let Some(previous) = previous_start {
                if word.start < previous {
                    return Err(TimelineError::UnorderedWords {
                        segment: segment_index,
                        word: word_index,
                        start: word.start,
                        previous_start: previous,
                    });
                }
            }
            previous_start = Some(word.start);
        }
    }

    Ok(())
}

/// Check scene boxes: well-formed, ordered and non-overlapping.
///
/// Boxes may touch (`end_time == next.start_time`).
pub fn validate_cropping_boxes(boxes: &[CroppingBox]) -> TimelineResult<()> {
    for (index, crop) in boxes.iter().enumerate() {
        if !crop.start_time.is_finite() || !crop.end_time.is_finite() {
            return Err(TimelineError::invalid_box(index, "non-finite time"));
        }
        if crop.start_time > crop.end_time {
            return Err(TimelineError::invalid_box(index, "end_time before start_time"));
        }
        if crop
            .bbox
            .iter()
            .any(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
        {
            return Err(TimelineError::invalid_box(index, "bbox values must be within [0, 1]"));
        }
        let [x_min, y_min, x_max, y_max] = crop.bbox;
        if x_min > x_max || y_min > y_max {
            return Err(TimelineError::invalid_box(index, "bbox minimum exceeds maximum"));
        }

        if index > 0 {
            let previous = &boxes[index - 1];
            if crop.start_time < previous.end_time {
                return Err(TimelineError::OverlappingCroppingBoxes {
                    index,
                    start_time: crop.start_time,
                    previous_end: previous.end_time,
                });
            }
        }
    }

    Ok(())
}

/// Indices of segments that start before the previous segment ends.
///
/// Reflowed lines can overlap when the transcript's word timings do; the
/// sampler then shows the earlier line.
pub fn find_overlapping_segments(segments: &[Segment]) -> Vec<usize> {
    segments
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].start < pair[0].end)
        .map(|(i, _)| i + 1)
        .collect()
}
