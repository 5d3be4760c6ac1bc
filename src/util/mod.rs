//! Shared utilities.

/// Per-frame delta time and FPS smoothing.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
