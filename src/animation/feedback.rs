//! Pulse and spin feedback tweens.
//!
//! A [`FeedbackAnimation`] captures the rest value of the track it animates
//! (scale for a pulse, rotation for a spin) when it starts, writes an
//! interpolated value into the object's transform once per frame, and writes
//! the rest value back when it ends.

use glam::{Quat, Vec3};

use super::curve::AnimationCurve;
use crate::options::{PulseOptions, SpinOptions};
use crate::scene::Transform;

/// Which feedback animation is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// Temporary scale-up and back.
    Pulse,
    /// Temporary rotation about a local axis.
    Spin,
}

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// More frames remain.
    Running,
    /// The rest value has been restored; drop the animation.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Track {
    Scale { rest: Vec3, multiplier: f32 },
    Rotation { rest: Quat, axis: Vec3, angle: f32 },
}

/// A single time-driven tween of one transform track.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackAnimation {
    kind: FeedbackKind,
    track: Track,
    curve: AnimationCurve,
    duration: f32,
    elapsed: f32,
}

impl FeedbackAnimation {
    /// Scale pulse starting from the transform's current scale.
    #[must_use]
    pub fn pulse(transform: &Transform, options: &PulseOptions) -> Self {
        Self {
            kind: FeedbackKind::Pulse,
            track: Track::Scale {
                rest: transform.scale,
                multiplier: options.scale_multiplier,
            },
            curve: options.curve.clone(),
            duration: options.duration,
            elapsed: 0.0,
        }
    }

    /// Spin starting from the transform's current rotation.
    #[must_use]
    pub fn spin(transform: &Transform, options: &SpinOptions) -> Self {
        Self {
            kind: FeedbackKind::Spin,
            track: Track::Rotation {
                rest: transform.rotation,
                axis: options.axis.vector(),
                angle: options.angle_degrees.to_radians(),
            },
            curve: options.curve.clone(),
            duration: options.duration,
            elapsed: 0.0,
        }
    }

    /// Which animation this is.
    #[must_use]
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    /// Seconds played so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the full duration has been played. True from the start for
    /// zero or negative durations.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Write the value for the current progress into `transform`.
    pub fn apply(&self, transform: &mut Transform) {
        let weight = self.curve.evaluate(self.progress());
        match self.track {
            Track::Scale { rest, multiplier } => {
                // Scale stays within [1, multiplier] even if the curve
                // overshoots.
                let factor = 1.0 + (multiplier - 1.0) * weight.clamp(0.0, 1.0);
                transform.scale = rest * factor;
            }
            Track::Rotation { rest, axis, angle } => {
                transform.rotation =
                    rest * Quat::from_axis_angle(axis, angle * weight);
            }
        }
    }

    /// Write the captured rest value back into `transform`.
    pub fn restore(&self, transform: &mut Transform) {
        match self.track {
            Track::Scale { rest, .. } => transform.scale = rest,
            Track::Rotation { rest, .. } => transform.rotation = rest,
        }
    }

    /// Advance by `dt` seconds and update `transform`.
    ///
    /// Once the duration has elapsed the rest value is restored exactly and
    /// [`AnimationStatus::Finished`] is returned.
    pub fn advance(
        &mut self,
        dt: f32,
        transform: &mut Transform,
    ) -> AnimationStatus {
        self.elapsed += dt.max(0.0);
        if self.is_finished() {
            self.restore(transform);
            return AnimationStatus::Finished;
        }
        self.apply(transform);
        AnimationStatus::Running
    }
}
