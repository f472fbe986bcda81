use crate::animator::RingAnimator;
use crate::geometry::{Bounds, Point};
use crate::ring::RingFrame;
use palette::{Srgb, Srgba, WithAlpha};

/// Paint parameters for one ring: a filled disc and an outline at the same radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePaint {
    pub center: Point,
    pub radius: f64,
    pub fill: Srgba<f64>,
    pub stroke: Srgba<f64>,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub accent: Srgb<f64>,
    pub stroke_width: f64,
}

impl CirclePaint {
    pub fn for_frame(frame: &RingFrame, center: Point, style: &RingStyle) -> Self {
        Self {
            center,
            radius: frame.radius.max(0.0),
            fill: style.accent.with_alpha(unit_alpha(frame.fill_alpha)),
            stroke: style.accent.with_alpha(unit_alpha(frame.stroke_alpha)),
            stroke_width: style.stroke_width,
        }
    }
}

fn unit_alpha(alpha: f64) -> f64 {
    (alpha / 255.0).clamp(0.0, 1.0)
}

/// One paint per live ring, centered on `bounds`. Nothing when stopped.
pub fn ring_paints(animator: &RingAnimator, bounds: Bounds, style: &RingStyle) -> Vec<CirclePaint> {
    let center = bounds.center();
    animator
        .frames()
        .iter()
        .map(|frame| CirclePaint::for_frame(frame, center, style))
        .collect()
}
