//! Looping ring timeline driven by the host's frame clock.

use crate::geometry::inscribed_radius;
use crate::range::AnimationRange;
use crate::ring::{Ring, RingFrame};
use crate::settings::SweepSettings;
use std::time::Duration;
use strum::{Display, EnumIs};

/// What the host asked for, independent of whether rings can be drawn yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIs)]
pub enum AnimatorState {
    #[default]
    Stopped,
    Running,
}

/// One built set of rings over a fixed range.
///
/// A timeline is never edited after construction; reconfiguration replaces it
/// whole so a frame can't mix an old radius range with new alphas.
#[derive(Debug, Clone)]
struct Timeline {
    range: AnimationRange,
    duration: Duration,
    rings: Vec<Ring>,
    frames: Vec<RingFrame>,
    /// Frame clock time of the first tick, latched lazily.
    origin: Option<Duration>,
    advancing: bool,
}

impl Timeline {
    fn build(range: AnimationRange, settings: &SweepSettings) -> Self {
        let rings: Vec<Ring> = settings
            .phase_offsets()
            .into_iter()
            .map(Ring::new)
            .collect();
        let mut timeline = Self {
            range,
            duration: settings.duration(),
            frames: Vec::with_capacity(rings.len()),
            rings,
            origin: None,
            advancing: false,
        };
        timeline.sample(Duration::ZERO);
        timeline
    }

    fn sample(&mut self, elapsed: Duration) {
        self.frames.clear();
        self.frames.extend(
            self.rings
                .iter()
                .map(|ring| ring.sample(&self.range, self.duration, elapsed)),
        );
    }

    fn advance(&mut self, frame_time: Duration) {
        let origin = *self.origin.get_or_insert(frame_time);
        self.sample(frame_time.saturating_sub(origin));
    }
}

/// Drives the concurrent rings of a radar sweep.
///
/// All calls must come from the thread that owns the frame clock; the animator
/// holds no locks.
#[derive(Debug, Clone)]
pub struct RingAnimator {
    settings: SweepSettings,
    min_radius: f64,
    max_radius: f64,
    desired: AnimatorState,
    timeline: Option<Timeline>,
}

impl Default for RingAnimator {
    fn default() -> Self {
        Self::new(SweepSettings::default())
    }
}

impl RingAnimator {
    pub fn new(settings: SweepSettings) -> Self {
        Self {
            settings,
            min_radius: 0.0,
            max_radius: 0.0,
            desired: AnimatorState::Stopped,
            timeline: None,
        }
    }

    /// Distance from the center at which rings start growing.
    pub fn set_min_radius(&mut self, px: f64) {
        self.min_radius = sanitize_radius(px);
        if self.desired.is_running() {
            self.reinitialize();
        }
    }

    pub fn on_bounds_changed(&mut self, width: f64, height: f64) {
        self.max_radius = inscribed_radius(width, height);
        if self.desired.is_running() {
            self.reinitialize();
        }
    }

    /// Replaces timing/paint parameters. Invalid settings are rejected by the
    /// caller; the animator stores whatever it is given.
    pub fn set_settings(&mut self, settings: SweepSettings) {
        self.settings = settings;
        if self.desired.is_running() {
            self.reinitialize();
        }
    }

    pub fn start(&mut self) {
        self.desired = AnimatorState::Running;
        if !self.is_running() {
            self.reinitialize();
        }
    }

    pub fn stop(&mut self) {
        self.desired = AnimatorState::Stopped;
        if self.timeline.take().is_some() {
            log::debug!("sweep stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timeline.as_ref().is_some_and(|t| t.advancing)
    }

    /// Throws away the current rings and builds a fresh set from the current
    /// radii. Leaves no rings when there is no room between the radii.
    pub fn reinitialize(&mut self) {
        self.timeline = None;

        let range = AnimationRange::from_radii(self.min_radius, self.max_radius, &self.settings);
        if !range.is_valid() {
            log::debug!(
                "sweep idle: max radius {} does not exceed min radius {}",
                self.max_radius,
                self.min_radius
            );
            return;
        }

        let mut timeline = Timeline::build(range, &self.settings);
        timeline.advancing = self.desired.is_running();
        log::debug!(
            "sweep initialized: {} rings, radius {}..{}, advancing: {}",
            timeline.rings.len(),
            self.min_radius,
            self.max_radius,
            timeline.advancing
        );
        self.timeline = Some(timeline);
    }

    /// Advances every ring to `frame_time` (any monotonic clock). Returns
    /// whether the surface should be redrawn.
    pub fn tick(&mut self, frame_time: Duration) -> bool {
        match self.timeline.as_mut() {
            Some(timeline) if timeline.advancing => {
                timeline.advance(frame_time);
                true
            }
            _ => false,
        }
    }

    /// Current frame of every ring. Empty unless running.
    pub fn frames(&self) -> &[RingFrame] {
        match &self.timeline {
            Some(timeline) if timeline.advancing => &timeline.frames,
            _ => &[],
        }
    }

    pub fn rings(&self) -> &[Ring] {
        self.timeline
            .as_ref()
            .map(|t| t.rings.as_slice())
            .unwrap_or_default()
    }

    pub fn range(&self) -> Option<&AnimationRange> {
        self.timeline.as_ref().map(|t| &t.range)
    }

    pub fn state(&self) -> AnimatorState {
        self.desired
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn settings(&self) -> &SweepSettings {
        &self.settings
    }
}

fn sanitize_radius(px: f64) -> f64 {
    if px.is_finite() && px >= 0.0 {
        px
    } else {
        log::warn!("ignoring invalid min radius {}, using 0", px);
        0.0
    }
}
