//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! click or a programmatic call, is a `ViewerCommand`. Consumers construct
//! commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use super::mode::InteractionMode;
use crate::scene::ObjectId;

/// A discrete operation the engine can perform.
///
/// ```ignore
/// engine.execute(ViewerCommand::ToggleMode);
/// engine.execute(ViewerCommand::Spin { id });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    // ── Mode ────────────────────────────────────────────────────────
    /// Switch between camera and selection mode.
    ToggleMode,

    /// Enter a specific mode.
    SetMode {
        /// Mode to enter.
        mode: InteractionMode,
    },

    // ── Selection ───────────────────────────────────────────────────
    /// Click whatever is under the cursor. No-op over empty space.
    ClickHovered,

    /// Click a specific object, as if it were under the cursor.
    ClickObject {
        /// Object clicked.
        id: ObjectId,
    },

    /// Clear the selection.
    Deselect,

    // ── Feedback ────────────────────────────────────────────────────
    /// Pulse the selected object. No-op without a selection.
    PulseSelected,

    /// Spin the selected object. No-op without a selection.
    SpinSelected,

    /// Pulse a specific object.
    Pulse {
        /// Object to animate.
        id: ObjectId,
    },

    /// Spin a specific object.
    Spin {
        /// Object to animate.
        id: ObjectId,
    },

    // ── HUD ─────────────────────────────────────────────────────────
    /// Show or hide the instruction panel.
    ToggleInstructions,
}
