// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D scene viewer with a free-fly camera, click selection and
//! feedback animations, built on wgpu.
//!
//! The viewer has two interaction modes. In camera mode the mouse turns the
//! camera and W/A/S/D/Q/E fly it; in selection mode the cursor hovers and
//! clicks objects and the same keys move the selected object along world
//! axes. Selected objects can play a scale pulse or a spin.
//!
//! # Key entry points
//!
//! - [`engine::ViewerEngine`] - GPU-free interaction state machine
//! - [`scene::Scene`] - the objects on screen and the starting camera pose
//! - [`options::Options`] - runtime configuration (camera, selection,
//!   animation, keybindings, HUD text)
//! - [`renderer::SceneRenderer`] - instanced wgpu drawing
//! - `Viewer` - winit window (`viewer` feature)
//!
//! # Frame loop
//!
//! Window events become [`InputEvent`]s fed to
//! [`ViewerEngine::handle_input`]. Each redraw calls
//! [`ViewerEngine::update`] with the frame's delta time, then the renderer
//! culls the scene against the camera frustum and draws it.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{InteractionMode, ViewerCommand, ViewerEngine};
pub use error::ViewerError;
pub use input::{InputEvent, KeyAction, MouseButton};
pub use options::Options;
pub use scene::{ObjectId, Scene};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
