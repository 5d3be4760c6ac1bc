//! Input handling: event types, held-key and mouse state, and the input
//! processor that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Held-key tracking and bindable actions.
pub mod keyboard;
/// Cursor position and look-delta accumulation.
pub(crate) mod mouse;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::{KeyAction, KeyboardState};
pub use processor::InputProcessor;
