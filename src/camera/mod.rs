//! Camera system for 3D scene viewing.
//!
//! Provides a free-fly camera with mouse look, local-axis translation,
//! cursor pick rays, frustum culling and the GPU uniform binding.

/// Camera uniform buffer and bind group.
pub mod binding;
/// Fly camera controller driven by look deltas and movement axes.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;

pub use binding::CameraBinding;
pub use controller::FlyCameraController;
pub use core::{Camera, CameraUniform};
pub use frustum::Frustum;
