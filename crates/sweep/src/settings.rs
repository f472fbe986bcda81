use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DURATION_MS: u64 = 3000;
pub const DEFAULT_RING_COUNT: usize = 3;
pub const DEFAULT_STROKE_ALPHA: u8 = 200;
pub const DEFAULT_FILL_ALPHA: u8 = 30;
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const MAX_RING_COUNT: usize = 64;
/// One day.
pub const MAX_DURATION_MS: u64 = 86_400_000;

/// Timing and paint parameters shared by every ring of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Length of one ring cycle.
    pub duration_ms: u64,
    pub ring_count: usize,
    /// Stroke alpha at the start of a cycle (0-255), fades to 0.
    pub stroke_alpha: u8,
    /// Fill alpha at the start of a cycle (0-255), fades to 0.
    pub fill_alpha: u8,
    pub stroke_width: f64,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            ring_count: DEFAULT_RING_COUNT,
            stroke_alpha: DEFAULT_STROKE_ALPHA,
            fill_alpha: DEFAULT_FILL_ALPHA,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("ring_count must be at least 1")]
    NoRings,
    #[error("ring_count must be at most {MAX_RING_COUNT}, got {0}")]
    TooManyRings(usize),
    #[error("duration_ms must be at least 1")]
    ZeroDuration,
    #[error("duration_ms must be at most {MAX_DURATION_MS}, got {0}")]
    DurationTooLong(u64),
    #[error("stroke_width must be a non-negative number, got {0}")]
    StrokeWidth(f64),
}

impl SweepSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.ring_count == 0 {
            return Err(SettingsError::NoRings);
        }
        if self.ring_count > MAX_RING_COUNT {
            return Err(SettingsError::TooManyRings(self.ring_count));
        }
        if self.duration_ms == 0 {
            return Err(SettingsError::ZeroDuration);
        }
        if self.duration_ms > MAX_DURATION_MS {
            return Err(SettingsError::DurationTooLong(self.duration_ms));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(SettingsError::StrokeWidth(self.stroke_width));
        }
        Ok(())
    }

    /// Cycle length, capped at [`MAX_DURATION_MS`] for unvalidated settings.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.min(MAX_DURATION_MS))
    }

    /// Start delays spread evenly over one cycle: `i * duration / ring_count`.
    /// The count is clamped to `1..=MAX_RING_COUNT`.
    pub fn phase_offsets(&self) -> Vec<Duration> {
        let period = self.duration().as_nanos();
        let count = self.ring_count.clamp(1, MAX_RING_COUNT) as u128;
        (0..count)
            .map(|i| Duration::from_nanos((period * i / count) as u64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets_match_three_ring_stagger() {
        let offsets = SweepSettings::default().phase_offsets();
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                Duration::from_millis(1000),
                Duration::from_millis(2000)
            ]
        );
    }

    #[test]
    fn test_two_ring_offsets() {
        let settings = SweepSettings {
            duration_ms: 2000,
            ring_count: 2,
            ..Default::default()
        };
        assert_eq!(
            settings.phase_offsets(),
            vec![Duration::ZERO, Duration::from_millis(1000)]
        );
    }

    #[test]
    fn test_validate() {
        assert!(SweepSettings::default().validate().is_ok());

        let no_rings = SweepSettings {
            ring_count: 0,
            ..Default::default()
        };
        assert_eq!(no_rings.validate(), Err(SettingsError::NoRings));

        let zero = SweepSettings {
            duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(SettingsError::ZeroDuration));

        let negative_stroke = SweepSettings {
            stroke_width: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_stroke.validate(),
            Err(SettingsError::StrokeWidth(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_settings() {
        let many_rings = SweepSettings {
            ring_count: MAX_RING_COUNT + 1,
            ..Default::default()
        };
        assert_eq!(
            many_rings.validate(),
            Err(SettingsError::TooManyRings(MAX_RING_COUNT + 1))
        );

        let long = SweepSettings {
            duration_ms: 9_000_000_000_000_000_000,
            ..Default::default()
        };
        assert_eq!(
            long.validate(),
            Err(SettingsError::DurationTooLong(9_000_000_000_000_000_000))
        );

        let at_limits = SweepSettings {
            ring_count: MAX_RING_COUNT,
            duration_ms: MAX_DURATION_MS,
            ..Default::default()
        };
        assert!(at_limits.validate().is_ok());
    }

    #[test]
    fn test_offsets_of_unvalidated_settings_do_not_overflow() {
        let huge = SweepSettings {
            duration_ms: 9_000_000_000_000_000_000,
            ring_count: 3000,
            ..Default::default()
        };
        let offsets = huge.phase_offsets();
        assert_eq!(offsets.len(), MAX_RING_COUNT);
        assert_eq!(offsets[0], Duration::ZERO);
        assert!(offsets.iter().all(|o| *o < huge.duration()));
        assert_eq!(huge.duration(), Duration::from_millis(MAX_DURATION_MS));
    }

    #[test]
    fn test_ring_count_is_not_truncated() {
        let wide = SweepSettings {
            ring_count: (1usize << 32) + 1,
            ..Default::default()
        };
        assert_eq!(wide.phase_offsets().len(), MAX_RING_COUNT);
        assert!(wide.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let settings: SweepSettings =
            serde_json::from_str(r#"{ "ring_count": 2, "duration_ms": 2000 }"#).unwrap();
        assert_eq!(settings.ring_count, 2);
        assert_eq!(settings.duration_ms, 2000);
        assert_eq!(settings.stroke_alpha, DEFAULT_STROKE_ALPHA);
        assert_eq!(settings.fill_alpha, DEFAULT_FILL_ALPHA);
    }
}
