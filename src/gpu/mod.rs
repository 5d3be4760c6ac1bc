//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable buffers and the
//! depth attachment.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth texture for the scene pass.
pub mod texture;

pub use dynamic_buffer::DynamicBuffer;
pub use render_context::{RenderContext, RenderContextError};
pub use texture::DepthTexture;
