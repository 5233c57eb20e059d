//! Reflow of transcript sentences into display lines.
//!
//! Each input segment is a transcript sentence of arbitrary length. Its words
//! are regrouped, left to right, into lines of at most `max_words_per_line`
//! words. A line also ends early after a word closing a sentence, and at the
//! end of every input segment. Words starting outside the rendered video are
//! dropped. Word timings are copied as-is; nothing is re-timed.

use reframe_models::{Composition, ResolvedSubtitleSettings, Segment, WordTiming};
use tracing::debug;

/// Regroup `segments` into display lines.
///
/// `max_words_per_line` of zero is treated as one. Segments without words
/// contribute nothing.
pub fn reflow_segments(
    segments: &[Segment],
    max_words_per_line: usize,
    video_duration_secs: f64,
) -> Vec<Segment> {
    let cap = max_words_per_line.max(1);
    let mut lines = Vec::new();
    let mut dropped = 0usize;

    for segment in segments {
        let mut pending: Vec<WordTiming> = Vec::with_capacity(cap);

        for word in &segment.word_timings {
            if !within_video(word, video_duration_secs) {
                dropped += 1;
                continue;
            }

            pending.push(word.clone());

            if pending.len() >= cap || word.ends_sentence() {
                flush(&mut pending, &mut lines);
            }
        }

        flush(&mut pending, &mut lines);
    }

    debug!(
        input_segments = segments.len(),
        output_lines = lines.len(),
        dropped_words = dropped,
        max_words_per_line = cap,
        "Reflowed transcript into display lines"
    );

    lines
}

/// Reflow with the word cap from `settings` and the duration of `composition`.
pub fn reflow_with_settings(
    segments: &[Segment],
    settings: &ResolvedSubtitleSettings,
    composition: &Composition,
) -> Vec<Segment> {
    reflow_segments(
        segments,
        settings.max_words_per_line,
        composition.duration_secs(),
    )
}

fn within_video(word: &WordTiming, video_duration_secs: f64) -> bool {
    word.start >= 0.0 && word.start <= video_duration_secs
}

fn flush(pending: &mut Vec<WordTiming>, lines: &mut Vec<Segment>) {
    if let Some(line) = Segment::from_words(std::mem::take(pending)) {
        lines.push(line);
    }
}
