use crate::geometry::Bounds;
use crate::settings::SweepSettings;

/// Start and end value of one interpolated channel over a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        lerp(t, self.start, self.end)
    }
}

#[inline]
pub fn lerp(t: f64, start: f64, end: f64) -> f64 {
    start + t * (end - start)
}

/// Everything a ring interpolates across during one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRange {
    pub radius: Span,
    pub stroke_alpha: Span,
    pub fill_alpha: Span,
}

impl AnimationRange {
    pub fn new(min_radius: f64, max_radius: f64, stroke_alpha: u8, fill_alpha: u8) -> Self {
        Self {
            radius: Span::new(min_radius, max_radius),
            stroke_alpha: Span::new(stroke_alpha as f64, 0.0),
            fill_alpha: Span::new(fill_alpha as f64, 0.0),
        }
    }

    /// Rings grow from `min_radius` to the largest circle inscribed in `bounds`.
    pub fn derive(bounds: Bounds, min_radius: f64, settings: &SweepSettings) -> Self {
        Self::from_radii(min_radius, bounds.inscribed_radius(), settings)
    }

    pub fn from_radii(min_radius: f64, max_radius: f64, settings: &SweepSettings) -> Self {
        Self::new(
            min_radius,
            max_radius,
            settings.stroke_alpha,
            settings.fill_alpha,
        )
    }

    pub fn min_radius(&self) -> f64 {
        self.radius.start
    }

    pub fn max_radius(&self) -> f64 {
        self.radius.end
    }

    /// A cycle only makes sense when the rings have room to grow.
    pub fn is_valid(&self) -> bool {
        self.max_radius() > self.min_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 50.0, 150.0), 50.0);
        assert_eq!(lerp(0.5, 50.0, 150.0), 100.0);
        assert_eq!(lerp(1.0, 200.0, 0.0), 0.0);
    }

    #[test]
    fn test_derive_from_bounds() {
        let settings = SweepSettings::default();
        let range = AnimationRange::derive(Bounds::from_size(400.0, 300.0), 48.0, &settings);
        assert_eq!(range.min_radius(), 48.0);
        assert_eq!(range.max_radius(), 150.0);
        assert_eq!(range.stroke_alpha, Span::new(200.0, 0.0));
        assert_eq!(range.fill_alpha, Span::new(30.0, 0.0));
        assert!(range.is_valid());
    }

    #[test]
    fn test_unmeasured_surface_is_invalid() {
        let settings = SweepSettings::default();
        let range = AnimationRange::derive(Bounds::default(), 0.0, &settings);
        assert!(!range.is_valid());

        let inverted = AnimationRange::from_radii(80.0, 60.0, &settings);
        assert!(!inverted.is_valid());
    }
}
