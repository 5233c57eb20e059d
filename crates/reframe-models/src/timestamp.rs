//! Frame and time conversion utilities.
//!
//! All timeline comparisons go through these helpers so that the same
//! rounding rules apply everywhere a continuous time meets a frame grid.

/// Decimal places kept when snapping times to the frame grid.
pub const SNAP_DECIMALS: i32 = 5;

/// Time in seconds at which `frame` is displayed.
#[inline]
pub fn frame_to_seconds(frame: u64, fps: f64) -> f64 {
    frame as f64 / fps
}

/// First frame on which a word starting at `seconds` is visible.
#[inline]
pub fn start_frame(seconds: f64, fps: f64) -> f64 {
    (seconds * fps).floor()
}

/// Frame by which a word ending at `seconds` has finished.
#[inline]
pub fn end_frame(seconds: f64, fps: f64) -> f64 {
    (seconds * fps).ceil()
}

/// Round to [`SNAP_DECIMALS`] decimal places.
#[inline]
pub fn round_to_snap_precision(seconds: f64) -> f64 {
    let scale = 10f64.powi(SNAP_DECIMALS);
    (seconds * scale).round() / scale
}

/// Snap a continuous play time to the time of the nearest frame.
///
/// Both the input and the result are rounded to 5 decimals; the double
/// rounding keeps boundary frames from flickering between adjacent boxes.
///
/// # Examples
/// ```
/// use reframe_models::timestamp::snap_to_frame_time;
/// assert_eq!(snap_to_frame_time(10.0 / 30.0, 30.0), 0.33333);
/// assert_eq!(snap_to_frame_time(1.0, 30.0), 1.0);
/// ```
pub fn snap_to_frame_time(seconds: f64, fps: f64) -> f64 {
    let rounded = round_to_snap_precision(seconds);
    let closest_frame = (rounded * fps).round();
    round_to_snap_precision(closest_frame / fps)
}
