//! Crop-window selection for the background video.
//!
//! Scene boxes come from an out-of-band vision pass, so they are matched
//! against play time rather than the subtitle timeline. Play time is snapped
//! to the frame grid first; see [`snap_to_frame_time`].

use reframe_models::timestamp::snap_to_frame_time;
use reframe_models::{CropViewport, CroppingBox};

/// Horizontal placement of the source video for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSelection {
    /// Translation of the source video in pixels (zero or negative)
    pub offset_pixels: f64,
    /// Matching box, or `None` for the centered fallback
    pub box_index: Option<usize>,
}

impl CropSelection {
    /// Centered crop used when no box covers the frame.
    pub fn centered(viewport: &CropViewport) -> Self {
        Self {
            offset_pixels: viewport.centered_offset(),
            box_index: None,
        }
    }
}

/// Pick the crop for play time `time_secs`.
///
/// The first box whose `[start_time, end_time]` contains the snapped time
/// wins. Its normalized left edge becomes a pixel offset that never pans past
/// either edge of the source.
pub fn select_crop(
    time_secs: f64,
    fps: f64,
    boxes: &[CroppingBox],
    viewport: &CropViewport,
) -> CropSelection {
    let closest_time = snap_to_frame_time(time_secs, fps);

    boxes
        .iter()
        .position(|crop| crop.contains(closest_time))
        .map(|index| CropSelection {
            offset_pixels: viewport.offset_for_left_edge(boxes[index].x_min()),
            box_index: Some(index),
        })
        .unwrap_or_else(|| CropSelection::centered(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_box_and_converts_left_edge() {
        let boxes = vec![CroppingBox::new(0.0, 2.0, [0.5, 0.0, 1.0, 1.0])];
        let selection = select_crop(1.0, 30.0, &boxes, &CropViewport::default());

        assert_eq!(selection.offset_pixels, -840.0);
        assert_eq!(selection.box_index, Some(0));
    }

    #[test]
    fn test_falls_back_to_centered_crop() {
        let boxes = vec![CroppingBox::new(0.0, 2.0, [0.1, 0.0, 0.6, 1.0])];
        let selection = select_crop(3.0, 30.0, &boxes, &CropViewport::default());

        assert_eq!(selection.offset_pixels, -420.0);
        assert_eq!(selection.box_index, None);
    }

    #[test]
    fn test_empty_boxes_fall_back() {
        let selection = select_crop(0.0, 30.0, &[], &CropViewport::default());
        assert_eq!(selection, CropSelection::centered(&CropViewport::default()));
    }

    #[test]
    fn test_shared_boundary_goes_to_first_box() {
        let boxes = vec![
            CroppingBox::new(0.0, 2.0, [0.0, 0.0, 0.5, 1.0]),
            CroppingBox::new(2.0, 4.0, [0.25, 0.0, 0.75, 1.0]),
        ];
        let viewport = CropViewport::default();

        assert_eq!(select_crop(2.0, 30.0, &boxes, &viewport).box_index, Some(0));
        assert_eq!(
            select_crop(61.0 / 30.0, 30.0, &boxes, &viewport).box_index,
            Some(1)
        );
    }

    #[test]
    fn test_non_positive_fps_falls_back() {
        let boxes = vec![CroppingBox::new(0.0, 2.0, [0.5, 0.0, 1.0, 1.0])];
        let viewport = CropViewport::default();
        assert_eq!(select_crop(1.0, 0.0, &boxes, &viewport).box_index, None);
    }
}
