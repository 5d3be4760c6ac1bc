//! Authored animation curves.
//!
//! A curve maps normalized animation time to a blend weight. Curves are
//! either built from an [`EasingFunction`] or authored as keyframes with
//! cubic Hermite tangents, so a TOML preset can describe any shape a
//! designer would draw in a curve editor.

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;

/// One control point of a keyframed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Normalized time of the key.
    pub time: f32,
    /// Curve value at `time`.
    pub value: f32,
    /// Slope arriving at the key.
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving the key.
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Key with flat tangents.
    #[must_use]
    pub const fn flat(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    /// Key with the same slope on both sides.
    #[must_use]
    pub const fn with_slope(time: f32, value: f32, slope: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: slope,
            out_tangent: slope,
        }
    }
}

/// Maps normalized time in [0, 1] to a blend weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationCurve {
    /// Rises from 0 to 1 following `function`.
    Easing {
        /// Shape of the rise.
        function: EasingFunction,
    },
    /// Rises from 0 to 1 over the first half and falls back over the second.
    PingPong {
        /// Shape of each half.
        function: EasingFunction,
    },
    /// Cubic Hermite spline through keys sorted by time.
    ///
    /// Values before the first key or after the last key are clamped.
    Keyframes {
        /// Control points in ascending time order.
        keys: Vec<Keyframe>,
    },
}

impl Default for AnimationCurve {
    fn default() -> Self {
        Self::linear()
    }
}

impl AnimationCurve {
    /// Straight line from (0, 0) to (1, 1).
    #[must_use]
    pub fn linear() -> Self {
        Self::keyframes(vec![
            Keyframe::with_slope(0.0, 0.0, 1.0),
            Keyframe::with_slope(1.0, 1.0, 1.0),
        ])
    }

    /// Flat-tangent rise from 0 to 1.
    #[must_use]
    pub fn ease_in_out() -> Self {
        Self::keyframes(vec![Keyframe::flat(0.0, 0.0), Keyframe::flat(1.0, 1.0)])
    }

    /// Smooth 0 → 1 → 0 hump peaking at t = 0.5.
    #[must_use]
    pub fn bell() -> Self {
        Self::keyframes(vec![
            Keyframe::flat(0.0, 0.0),
            Keyframe::flat(0.5, 1.0),
            Keyframe::flat(1.0, 0.0),
        ])
    }

    /// Keyframed curve; keys are sorted by time.
    #[must_use]
    pub fn keyframes(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self::Keyframes { keys }
    }

    /// Evaluate the curve at normalized time `t` (clamped to [0, 1]).
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Easing { function } => function.evaluate(t),
            Self::PingPong { function } => {
                if t <= 0.5 {
                    function.evaluate(t * 2.0)
                } else {
                    function.evaluate((1.0 - t) * 2.0)
                }
            }
            Self::Keyframes { keys } => evaluate_keys(keys, t),
        }
    }
}

fn evaluate_keys(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return 0.0;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    let Some(pair) = keys.windows(2).find(|w| t <= w[1].time) else {
        return last.value;
    };
    let (k0, k1) = (pair[0], pair[1]);
    let span = k1.time - k0.time;
    if span <= f32::EPSILON {
        return k1.value;
    }

    let s = (t - k0.time) / span;
    let s2 = s * s;
    let s3 = s2 * s;
    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value
        + h10 * k0.out_tangent * span
        + h01 * k1.value
        + h11 * k1.in_tangent * span
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn linear_curve_is_identity() {
        let c = AnimationCurve::linear();
        for t in [0.0, 0.1, 0.5, 0.77, 1.0] {
            assert!(close(c.evaluate(t), t), "t={t}");
        }
    }

    #[test]
    fn bell_peaks_in_the_middle_and_returns_to_zero() {
        let c = AnimationCurve::bell();
        assert_eq!(c.evaluate(0.0), 0.0);
        assert!(close(c.evaluate(0.5), 1.0));
        assert_eq!(c.evaluate(1.0), 0.0);
        assert!(c.evaluate(0.25) > 0.0 && c.evaluate(0.25) < 1.0);
        assert!(close(c.evaluate(0.25), c.evaluate(0.75)));
    }

    #[test]
    fn ease_in_out_matches_smoothstep() {
        let c = AnimationCurve::ease_in_out();
        for t in [0.1, 0.3, 0.6, 0.9] {
            let expected = EasingFunction::SmoothStep.evaluate(t);
            assert!(close(c.evaluate(t), expected), "t={t}");
        }
    }

    #[test]
    fn values_outside_key_range_are_clamped() {
        let c = AnimationCurve::keyframes(vec![
            Keyframe::flat(0.2, 0.4),
            Keyframe::flat(0.8, 0.9),
        ]);
        assert_eq!(c.evaluate(0.0), 0.4);
        assert_eq!(c.evaluate(1.0), 0.9);
        assert_eq!(c.evaluate(-3.0), 0.4);
    }

    #[test]
    fn keyframes_constructor_sorts_keys() {
        let c = AnimationCurve::keyframes(vec![
            Keyframe::flat(1.0, 0.0),
            Keyframe::flat(0.0, 0.0),
            Keyframe::flat(0.5, 1.0),
        ]);
        assert!(close(c.evaluate(0.5), 1.0));
    }

    #[test]
    fn empty_and_single_key_curves() {
        let empty = AnimationCurve::Keyframes { keys: Vec::new() };
        assert_eq!(empty.evaluate(0.5), 0.0);
        let single = AnimationCurve::keyframes(vec![Keyframe::flat(0.3, 0.7)]);
        assert_eq!(single.evaluate(0.9), 0.7);
    }

    #[test]
    fn ping_pong_mirrors_the_easing() {
        let c = AnimationCurve::PingPong {
            function: EasingFunction::Linear,
        };
        assert!(close(c.evaluate(0.25), 0.5));
        assert!(close(c.evaluate(0.5), 1.0));
        assert!(close(c.evaluate(0.75), 0.5));
        assert_eq!(c.evaluate(1.0), 0.0);
    }
}
