//! Render plan construction.
//!
//! A render plan is the full frame timeline of one job: the composition, the
//! presentation style, the reflowed display lines and every frame's
//! [`RenderState`]. Building one is pure CPU work.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use reframe_models::{Color, Composition, JobId, RenderJob, RenderState, Segment};
use reframe_timeline::{
    find_overlapping_segments, reflow_with_settings, validate_cropping_boxes, validate_transcript,
    TimelineSampler,
};

use crate::config::WorkerConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::logging::RenderLogger;

/// Styling the presentation layer applies on top of the per-frame colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    pub font_family: String,
    pub font_size: u32,
    pub highlight_color: Color,
    pub secondary_color: Color,
}

/// Frame timeline for one render job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub job_id: JobId,
    pub composition: Composition,
    pub style: RenderStyle,
    /// Display lines after reflow
    pub segments: Vec<Segment>,
    /// One state per composition frame, in frame order
    pub frames: Vec<RenderState>,
}

impl RenderPlan {
    /// Number of frames that show subtitle text.
    pub fn subtitled_frame_count(&self) -> usize {
        self.frames.iter().filter(|f| f.has_subtitle()).count()
    }
}

/// Validate `job` and sample every frame of its composition.
pub fn build_render_plan(job: &RenderJob, config: &WorkerConfig) -> WorkerResult<RenderPlan> {
    let logger = RenderLogger::new(job);
    let _span = logger.stage_span("plan").entered();

    if !(job.duration_secs.is_finite() && job.duration_secs >= 0.0) {
        return Err(WorkerError::invalid_job(format!(
            "duration_secs must be a non-negative number, got {}",
            job.duration_secs
        )));
    }

    validate_transcript(&job.segments)?;
    validate_cropping_boxes(job.cropping_boxes())?;
    logger.job_accepted(job);

    let settings = job.settings.resolve();
    let composition = config.composition_for(job.duration_secs);
    let segments = reflow_with_settings(&job.segments, &settings, &composition);
    logger.lines_reflowed(
        segments.len(),
        settings.max_words_per_line,
        &find_overlapping_segments(&segments),
    );

    let started = Instant::now();
    let sampler = TimelineSampler::new(
        &segments,
        job.cropping_boxes(),
        &settings,
        composition.fps,
        config.viewport(),
    );
    let frames = sampler.sample_frames(0..composition.duration_in_frames);

    let plan = RenderPlan {
        job_id: job.id.clone(),
        composition,
        style: RenderStyle {
            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
            highlight_color: settings.highlight_color,
            secondary_color: settings.secondary_color,
        },
        segments,
        frames,
    };

    logger.frames_sampled(&plan.composition, plan.subtitled_frame_count(), started.elapsed());

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reframe_models::{CroppingBox, SubtitleSettings, WordTiming};

    fn job(segments: Vec<Segment>, duration_secs: f64) -> RenderJob {
        RenderJob {
            id: JobId::from_string("test-job"),
            duration_secs,
            segments,
            cropping_boxes: None,
            settings: SubtitleSettings::default(),
        }
    }

    fn sentence(words: &[(&str, f64, f64)]) -> Segment {
        Segment::from_words(
            words
                .iter()
                .map(|(text, start, end)| WordTiming::new(*text, *start, *end))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_plan_covers_every_frame() {
        let job = job(
            vec![sentence(&[
                ("hello", 0.0, 0.5),
                ("world", 0.5, 1.0),
                ("today", 1.0, 1.5),
            ])],
            2.0,
        );

        let plan = build_render_plan(&job, &WorkerConfig::default()).unwrap();

        assert_eq!(plan.composition.duration_in_frames, 60);
        assert_eq!(plan.frames.len(), 60);
        assert!(plan.frames.iter().enumerate().all(|(i, f)| f.frame == i as u64));
        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.segments[0].text, "hello world");

        // Frames 0..=45 fall inside a line, the rest are past the last word.
        assert_eq!(plan.subtitled_frame_count(), 46);
        assert_eq!(plan.frames[15].subtitle_text(), "HELLO WORLD");
        assert_eq!(plan.frames[40].subtitle_text(), "TODAY");
        assert!(!plan.frames[50].has_subtitle());
    }

    #[test]
    fn test_plan_without_boxes_is_centered() {
        let job = job(Vec::new(), 1.0);
        let plan = build_render_plan(&job, &WorkerConfig::default()).unwrap();

        assert_eq!(plan.frames.len(), 30);
        assert!(plan
            .frames
            .iter()
            .all(|f| f.crop_offset_pixels == -420.0 && f.crop_box_index.is_none()));
    }

    #[test]
    fn test_plan_follows_cropping_boxes() {
        let mut job = job(Vec::new(), 2.0);
        job.cropping_boxes = Some(vec![
            CroppingBox::new(0.0, 1.0, [0.5, 0.0, 1.0, 1.0]),
            CroppingBox::new(1.0, 2.0, [0.1, 0.0, 0.6, 1.0]),
        ]);

        let plan = build_render_plan(&job, &WorkerConfig::default()).unwrap();

        assert_eq!(plan.frames[15].crop_offset_pixels, -840.0);
        assert_eq!(plan.frames[15].crop_box_index, Some(0));
        // Touching boxes: the seam frame belongs to the first box.
        assert_eq!(plan.frames[30].crop_box_index, Some(0));
        assert_eq!(plan.frames[45].crop_offset_pixels, -192.0);
        assert_eq!(plan.frames[45].crop_box_index, Some(1));
    }

    #[test]
    fn test_plan_carries_style() {
        let mut job = job(Vec::new(), 1.0);
        job.settings.font_family = Some("Montserrat".to_string());
        job.settings.secondary_color = Some(Color::rgb(0, 0, 255));

        let plan = build_render_plan(&job, &WorkerConfig::default()).unwrap();

        assert_eq!(plan.style.font_family, "Montserrat");
        assert_eq!(plan.style.font_size, 84);
        assert_eq!(plan.style.secondary_color, Color::rgb(0, 0, 255));
        assert_eq!(plan.style.highlight_color, Color::rgb(0x33, 0xff, 0x52));
    }

    #[test]
    fn test_rejects_invalid_input() {
        let negative = job(Vec::new(), -1.0);
        assert!(matches!(
            build_render_plan(&negative, &WorkerConfig::default()),
            Err(WorkerError::InvalidJob(_))
        ));

        let inverted = job(vec![sentence(&[("late", 2.0, 1.0)])], 3.0);
        assert!(matches!(
            build_render_plan(&inverted, &WorkerConfig::default()),
            Err(WorkerError::Timeline(_))
        ));

        let mut overlapping = job(Vec::new(), 3.0);
        overlapping.cropping_boxes = Some(vec![
            CroppingBox::new(0.0, 2.0, [0.0, 0.0, 0.5, 1.0]),
            CroppingBox::new(1.0, 3.0, [0.5, 0.0, 1.0, 1.0]),
        ]);
        let err = build_render_plan(&overlapping, &WorkerConfig::default()).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_plan_respects_duration_cap() {
        let job = job(Vec::new(), 120.0);
        let plan = build_render_plan(&job, &WorkerConfig::default()).unwrap();

        assert_eq!(plan.composition.duration_in_frames, 59 * 30 - 1);
        assert_eq!(plan.frames.len(), 59 * 30 - 1);
    }
}
