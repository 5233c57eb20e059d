//! Per-frame timeline sampling.
//!
//! [`TimelineSampler`] borrows the reflowed segments, the crop boxes and the
//! resolved settings, and turns a frame number into a [`RenderState`]. No
//! state carries over between frames, so frames can be sampled in any order
//! and from any number of threads.

use std::ops::Range;

use rayon::prelude::*;
use reframe_models::timestamp::{end_frame, frame_to_seconds, start_frame};
use reframe_models::{
    Color, CropViewport, CroppingBox, RenderState, ResolvedSubtitleSettings, Segment, VisibleWord,
    WordTiming,
};
use tracing::debug;

use crate::crop::{select_crop, CropSelection};
use crate::interpolate::interpolate;
use crate::text::display_text;

/// Frames over which a highlighted word fades back to neutral.
pub const HIGHLIGHT_DECAY_FRAMES: f64 = 10.0;

/// Color of text that is not highlighted.
pub const NEUTRAL_COLOR: Color = Color::WHITE;

/// Frame-to-state sampler over immutable job data.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSampler<'a> {
    segments: &'a [Segment],
    cropping_boxes: &'a [CroppingBox],
    settings: &'a ResolvedSubtitleSettings,
    fps: f64,
    viewport: CropViewport,
}

impl<'a> TimelineSampler<'a> {
    pub fn new(
        segments: &'a [Segment],
        cropping_boxes: &'a [CroppingBox],
        settings: &'a ResolvedSubtitleSettings,
        fps: f64,
        viewport: CropViewport,
    ) -> Self {
        Self {
            segments,
            cropping_boxes,
            settings,
            fps,
            viewport,
        }
    }

    /// Render state for `frame`.
    pub fn sample(&self, frame: u64) -> RenderState {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            let crop = CropSelection::centered(&self.viewport);
            return RenderState {
                frame,
                time: 0.0,
                segment_index: None,
                visible_words: Vec::new(),
                crop_offset_pixels: crop.offset_pixels,
                crop_box_index: None,
            };
        }

        let time = frame_to_seconds(frame, self.fps);
        let segment_index = self.active_segment(time);
        let visible_words = segment_index
            .map(|index| self.visible_words(&self.segments[index], frame))
            .unwrap_or_default();
        let crop = select_crop(time, self.fps, self.cropping_boxes, &self.viewport);

        RenderState {
            frame,
            time,
            segment_index,
            visible_words,
            crop_offset_pixels: crop.offset_pixels,
            crop_box_index: crop.box_index,
        }
    }

    /// Sample a range of frames in parallel; results are in frame order.
    pub fn sample_frames(&self, frames: Range<u64>) -> Vec<RenderState> {
        debug!(
            start = frames.start,
            end = frames.end,
            segments = self.segments.len(),
            cropping_boxes = self.cropping_boxes.len(),
            "Sampling frame range"
        );

        frames
            .into_par_iter()
            .map(|frame| self.sample(frame))
            .collect()
    }

    /// Index of the first segment containing `time`.
    pub fn active_segment(&self, time: f64) -> Option<usize> {
        self.segments.iter().position(|segment| segment.contains(time))
    }

    fn visible_words(&self, segment: &Segment, frame: u64) -> Vec<VisibleWord> {
        segment
            .word_timings
            .iter()
            .map(|word| VisibleWord {
                text: display_text(&word.text, self.settings),
                color: word_color(frame, word, self.fps, self.settings.highlight_color),
            })
            .collect()
    }
}

/// Highlight color of `word` on `frame`.
///
/// Neutral until the word's start frame, ramps to `highlight` by its end
/// frame, then fades back to neutral over [`HIGHLIGHT_DECAY_FRAMES`].
pub fn word_color(frame: u64, word: &WordTiming, fps: f64, highlight: Color) -> Color {
    let word_start = start_frame(word.start, fps).max(0.0);
    let word_end = end_frame(word.end, fps).max(word_start);
    let breakpoints = [0.0, word_start, word_end, word_end + HIGHLIGHT_DECAY_FRAMES];
    let stops = [NEUTRAL_COLOR, NEUTRAL_COLOR, highlight, NEUTRAL_COLOR];

    interpolate(frame as f64, &breakpoints, &stops).unwrap_or(NEUTRAL_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Color = Color::rgb(0x33, 0xff, 0x52);

    fn segments() -> Vec<Segment> {
        vec![
            Segment::from_words(vec![
                WordTiming::new("hello,", 0.0, 0.5),
                WordTiming::new("world", 0.5, 1.0),
            ])
            .unwrap(),
            Segment::from_words(vec![WordTiming::new("today.", 1.0, 1.5)]).unwrap(),
            Segment::from_words(vec![WordTiming::new("later", 3.0, 3.5)]).unwrap(),
        ]
    }

    #[test]
    fn test_word_color_ramp() {
        let word = WordTiming::new("word", 1.0, 1.5);

        assert_eq!(word_color(0, &word, 30.0, GREEN), Color::WHITE);
        assert_eq!(word_color(30, &word, 30.0, GREEN), Color::WHITE);
        assert_eq!(word_color(45, &word, 30.0, GREEN), GREEN);
        assert_eq!(word_color(55, &word, 30.0, GREEN), Color::WHITE);
        assert_eq!(word_color(500, &word, 30.0, GREEN), Color::WHITE);
    }

    #[test]
    fn test_word_color_midway() {
        let word = WordTiming::new("word", 1.0, 1.5);
        // halfway through the decay
        assert_eq!(word_color(50, &word, 30.0, GREEN), Color::rgb(153, 255, 169));
    }

    #[test]
    fn test_word_color_negative_start_is_clamped() {
        let word = WordTiming::new("word", -0.5, 0.5);
        assert_eq!(word_color(15, &word, 30.0, GREEN), GREEN);
        assert_eq!(word_color(25, &word, 30.0, GREEN), Color::WHITE);
    }

    #[test]
    fn test_zero_length_word_snaps_to_highlight() {
        let word = WordTiming::new("blip", 1.0, 1.0);
        assert_eq!(word_color(29, &word, 30.0, GREEN), Color::WHITE);
        assert_eq!(word_color(30, &word, 30.0, GREEN), GREEN);
    }

    #[test]
    fn test_zero_length_word_at_clip_start() {
        let word = WordTiming::new("oh", 0.0, 0.0);
        assert_eq!(word_color(0, &word, 30.0, GREEN), GREEN);
        assert_eq!(word_color(5, &word, 30.0, GREEN), Color::rgb(153, 255, 169));
        assert_eq!(word_color(10, &word, 30.0, GREEN), Color::WHITE);
    }

    #[test]
    fn test_sample_active_segment() {
        let segments = segments();
        let settings = ResolvedSubtitleSettings::default();
        let sampler = TimelineSampler::new(&segments, &[], &settings, 30.0, CropViewport::default());

        let state = sampler.sample(15);
        assert_eq!(state.segment_index, Some(0));
        assert_eq!(state.subtitle_text(), "HELLO WORLD");
        assert_eq!(state.time, 0.5);

        // shared boundary at 1.0s resolves to the first line
        assert_eq!(sampler.sample(30).segment_index, Some(0));
        assert_eq!(sampler.sample(31).segment_index, Some(1));
        assert_eq!(sampler.sample(31).subtitle_text(), "TODAY");
    }

    #[test]
    fn test_sample_gap_shows_nothing() {
        let segments = segments();
        let settings = ResolvedSubtitleSettings::default();
        let sampler = TimelineSampler::new(&segments, &[], &settings, 30.0, CropViewport::default());

        let state = sampler.sample(60);
        assert_eq!(state.segment_index, None);
        assert!(!state.has_subtitle());
        assert_eq!(state.crop_offset_pixels, -420.0);

        assert!(!sampler.sample(10_000).has_subtitle());
    }

    #[test]
    fn test_invalid_fps_degrades() {
        let segments = segments();
        let settings = ResolvedSubtitleSettings::default();
        let viewport = CropViewport::default();

        for fps in [0.0, -30.0, f64::NAN, f64::INFINITY] {
            let sampler = TimelineSampler::new(&segments, &[], &settings, fps, viewport);
            let state = sampler.sample(15);
            assert!(!state.has_subtitle());
            assert_eq!(state.crop_offset_pixels, -420.0);
            assert_eq!(state.crop_box_index, None);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let segments = segments();
        let boxes = vec![
            CroppingBox::new(0.0, 1.0, [0.2, 0.0, 0.8, 1.0]),
            CroppingBox::new(2.0, 4.0, [0.6, 0.0, 1.0, 1.0]),
        ];
        let settings = ResolvedSubtitleSettings::default();
        let sampler =
            TimelineSampler::new(&segments, &boxes, &settings, 30.0, CropViewport::default());

        let parallel = sampler.sample_frames(0..150);
        let sequential: Vec<RenderState> = (0..150).map(|frame| sampler.sample(frame)).collect();

        assert_eq!(parallel.len(), 150);
        assert_eq!(parallel, sequential);
        assert!(parallel.iter().enumerate().all(|(i, s)| s.frame == i as u64));
    }
}
