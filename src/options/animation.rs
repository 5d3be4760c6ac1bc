use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationCurve, EasingFunction};

/// Local axis a spin animation rotates about.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SpinAxis {
    /// Local X axis.
    X,
    /// Local Y axis.
    Y,
    /// Local Z axis.
    #[default]
    Z,
}

impl SpinAxis {
    /// Unit vector for this axis.
    #[must_use]
    pub fn vector(self) -> glam::Vec3 {
        match self {
            Self::X => glam::Vec3::X,
            Self::Y => glam::Vec3::Y,
            Self::Z => glam::Vec3::Z,
        }
    }
}

/// Scale pulse played on a selected object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pulse", inline)]
#[serde(default)]
pub struct PulseOptions {
    /// Length of the pulse in seconds.
    #[schemars(title = "Duration", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub duration: f32,
    /// Peak scale factor reached when the curve evaluates to 1.
    #[schemars(title = "Scale Multiplier", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub scale_multiplier: f32,
    /// Curve mapping normalized time to blend weight.
    #[schemars(skip)]
    pub curve: AnimationCurve,
}

impl Default for PulseOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            scale_multiplier: 1.5,
            curve: AnimationCurve::bell(),
        }
    }
}

/// Rotation spin played on a selected object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spin", inline)]
#[serde(default)]
pub struct SpinOptions {
    /// Length of the spin in seconds.
    #[schemars(title = "Duration", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub duration: f32,
    /// Rotation reached when the curve evaluates to 1, in degrees.
    #[schemars(title = "Angle", range(min = -720.0, max = 720.0), extend("step" = 15.0))]
    pub angle_degrees: f32,
    /// Local axis to spin about.
    #[schemars(title = "Axis")]
    pub axis: SpinAxis,
    /// Curve mapping normalized time to rotation fraction.
    #[schemars(skip)]
    pub curve: AnimationCurve,
}

impl Default for SpinOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            angle_degrees: 360.0,
            axis: SpinAxis::Z,
            curve: AnimationCurve::Easing {
                function: EasingFunction::DEFAULT,
            },
        }
    }
}

/// Feedback animation parameters.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Scale pulse.
    pub pulse: PulseOptions,
    /// Rotation spin.
    pub spin: SpinOptions,
}
