pub mod animator;
pub mod geometry;
pub mod ipc;
pub mod paint;
pub mod range;
pub mod ring;
pub mod settings;

pub use animator::{AnimatorState, RingAnimator};
pub use geometry::{Bounds, Point};
pub use paint::{CirclePaint, RingStyle, ring_paints};
pub use range::AnimationRange;
pub use ring::{Ring, RingFrame};
pub use settings::{SettingsError, SweepSettings};
