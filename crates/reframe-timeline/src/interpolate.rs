//! Piecewise-linear keyframe interpolation.
//!
//! A track is a non-decreasing list of breakpoints with one value per
//! breakpoint. Sampling clamps outside the first and last breakpoint and
//! interpolates linearly in between. Where two breakpoints coincide the track
//! jumps straight to the later value.

use reframe_models::Color;

use crate::error::InterpolationError;

/// Values that can be blended linearly.
pub trait Lerp: Copy {
    /// Blend from `self` (t = 0) to `other` (t = 1).
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    #[inline]
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Color {
    fn lerp(self, other: Self, t: f64) -> Self {
        let channel = |from: u8, to: u8| -> u8 {
            (from as f64).lerp(to as f64, t).round().clamp(0.0, 255.0) as u8
        };
        Color::rgba(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            channel(self.a, other.a),
        )
    }
}

/// A validated keyframe track.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<T> {
    breakpoints: Vec<f64>,
    values: Vec<T>,
}

impl<T: Lerp> Keyframes<T> {
    pub fn new(breakpoints: Vec<f64>, values: Vec<T>) -> Result<Self, InterpolationError> {
        check_track(&breakpoints, &values)?;
        Ok(Self { breakpoints, values })
    }

    /// Value of the track at `x`.
    pub fn sample(&self, x: f64) -> T {
        sample_track(x, &self.breakpoints, &self.values)
    }
}

/// Interpolate `x` over `breakpoints`/`values` without allocating.
///
/// Returns `None` when the track is empty, the lengths differ or the
/// breakpoints are not finite and non-decreasing.
///
/// # Examples
/// ```
/// use reframe_timeline::interpolate;
/// assert_eq!(interpolate(5.0, &[0.0, 10.0], &[0.0, 1.0]), Some(0.5));
/// assert_eq!(interpolate(20.0, &[0.0, 10.0], &[0.0, 1.0]), Some(1.0));
/// ```
pub fn interpolate<T: Lerp>(x: f64, breakpoints: &[f64], values: &[T]) -> Option<T> {
    check_track(breakpoints, values).ok()?;
    Some(sample_track(x, breakpoints, values))
}

fn check_track<T>(breakpoints: &[f64], values: &[T]) -> Result<(), InterpolationError> {
    if breakpoints.is_empty() {
        return Err(InterpolationError::Empty);
    }
    if breakpoints.len() != values.len() {
        return Err(InterpolationError::LengthMismatch {
            breakpoints: breakpoints.len(),
            values: values.len(),
        });
    }
    for (i, bp) in breakpoints.iter().enumerate() {
        if !bp.is_finite() || (i > 0 && *bp < breakpoints[i - 1]) {
            return Err(InterpolationError::NotMonotonic(i));
        }
    }
    Ok(())
}

// Caller guarantees a checked track.
fn sample_track<T: Lerp>(x: f64, breakpoints: &[f64], values: &[T]) -> T {
    let last = breakpoints.len() - 1;
    if x.is_nan() || x < breakpoints[0] {
        return values[0];
    }
    if x >= breakpoints[last] {
        return values[last];
    }

    // Last breakpoint at or before x, so coincident breakpoints resolve to
    // the later value. The next one is strictly greater.
    let i = breakpoints.partition_point(|bp| *bp <= x) - 1;
    let (x0, x1) = (breakpoints[i], breakpoints[i + 1]);
    let t = (x - x0) / (x1 - x0);
    values[i].lerp(values[i + 1], t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_between_breakpoints() {
        let track = Keyframes::new(vec![0.0, 10.0, 20.0], vec![0.0, 100.0, 50.0]).unwrap();
        assert_eq!(track.sample(5.0), 50.0);
        assert_eq!(track.sample(10.0), 100.0);
        assert_eq!(track.sample(15.0), 75.0);
    }

    #[test]
    fn test_clamps_at_ends() {
        let track = Keyframes::new(vec![10.0, 20.0], vec![1.0, 2.0]).unwrap();
        assert_eq!(track.sample(-100.0), 1.0);
        assert_eq!(track.sample(100.0), 2.0);
        assert_eq!(track.sample(f64::NAN), 1.0);
    }

    #[test]
    fn test_zero_width_span_jumps_to_later_value() {
        let track = Keyframes::new(vec![0.0, 30.0, 30.0, 40.0], vec![0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(track.sample(29.0), 0.0);
        assert_eq!(track.sample(30.0), 1.0);
        assert_eq!(track.sample(35.0), 0.5);
    }

    #[test]
    fn test_zero_width_span_at_first_breakpoint() {
        let track = Keyframes::new(vec![0.0, 0.0, 0.0, 10.0], vec![0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(track.sample(-1.0), 0.0);
        assert_eq!(track.sample(0.0), 1.0);
        assert_eq!(track.sample(5.0), 0.5);
    }

    #[test]
    fn test_leading_duplicate_breakpoint() {
        let track = Keyframes::new(vec![0.0, 0.0, 15.0, 25.0], vec![0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(track.sample(0.0), 0.0);
        assert_eq!(track.sample(15.0), 1.0);
        assert_eq!(track.sample(20.0), 0.5);
    }

    #[test]
    fn test_single_breakpoint_is_constant() {
        let track = Keyframes::new(vec![3.0], vec![7.0]).unwrap();
        assert_eq!(track.sample(0.0), 7.0);
        assert_eq!(track.sample(3.0), 7.0);
        assert_eq!(track.sample(9.0), 7.0);
    }

    #[test]
    fn test_invalid_tracks() {
        assert_eq!(
            Keyframes::<f64>::new(vec![], vec![]).unwrap_err(),
            InterpolationError::Empty
        );
        assert_eq!(
            Keyframes::new(vec![0.0, 1.0], vec![1.0]).unwrap_err(),
            InterpolationError::LengthMismatch {
                breakpoints: 2,
                values: 1
            }
        );
        assert_eq!(
            Keyframes::new(vec![0.0, 2.0, 1.0], vec![1.0, 2.0, 3.0]).unwrap_err(),
            InterpolationError::NotMonotonic(2)
        );
        assert!(interpolate(1.0, &[0.0, f64::INFINITY], &[0.0, 1.0]).is_none());
    }

    #[test]
    fn test_color_lerp_rounds_channels() {
        let from = Color::WHITE;
        let to = Color::rgb(0x33, 0xff, 0x52);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        // 255 + (51 - 255) / 2 = 153, 255 + (82 - 255) / 2 = 168.5 -> 169
        assert_eq!(from.lerp(to, 0.5), Color::rgb(153, 255, 169));
    }
}
