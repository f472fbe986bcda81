use crate::range::AnimationRange;
use std::time::Duration;

/// One ring of the sweep. Only the start delay distinguishes rings; the
/// interpolated values are derived per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub phase_offset: Duration,
}

/// Interpolated state of a ring at one instant. Alphas are on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub radius: f64,
    pub stroke_alpha: f64,
    pub fill_alpha: f64,
}

impl RingFrame {
    pub fn at(range: &AnimationRange, t: f64) -> Self {
        Self {
            radius: range.radius.lerp(t),
            stroke_alpha: range.stroke_alpha.lerp(t),
            fill_alpha: range.fill_alpha.lerp(t),
        }
    }
}

impl Ring {
    pub fn new(phase_offset: Duration) -> Self {
        Self { phase_offset }
    }

    pub fn progress(&self, elapsed: Duration, duration: Duration) -> f64 {
        cycle_progress(elapsed, self.phase_offset, duration)
    }

    pub fn sample(
        &self,
        range: &AnimationRange,
        duration: Duration,
        elapsed: Duration,
    ) -> RingFrame {
        RingFrame::at(range, self.progress(elapsed, duration))
    }
}

/// Position within the current repeat, in `[0, 1)`.
///
/// Computed as `((elapsed - offset) mod duration) / duration` with a Euclidean
/// modulo on whole nanoseconds, so a ring that has not reached its start delay
/// yet sits where it would be in the previous cycle and sampling is exactly
/// periodic in `duration`.
pub fn cycle_progress(elapsed: Duration, offset: Duration, duration: Duration) -> f64 {
    let period = duration.as_nanos() as i128;
    if period == 0 {
        return 0.0;
    }
    let local = (elapsed.as_nanos() as i128 - offset.as_nanos() as i128).rem_euclid(period);
    let t = local as f64 / period as f64;
    // f64 rounding on huge periods must not yield exactly 1.0
    if t < 1.0 { t } else { 0.0 }
}
