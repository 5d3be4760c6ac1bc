//! Click feedback animations.
//!
//! Selected objects can be pulsed (temporary scale-up) or spun (temporary
//! rotation). Both are driven by an [`AnimationCurve`] over normalized time
//! and advanced once per frame by the [`Animator`].

mod animator;
mod curve;
mod easing;
mod feedback;

pub use animator::Animator;
pub use curve::{AnimationCurve, Keyframe};
pub use easing::EasingFunction;
pub use feedback::{AnimationStatus, FeedbackAnimation, FeedbackKind};
