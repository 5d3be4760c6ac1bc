//! Read-only queries and scene editing for [`ViewerEngine`].

use super::{Hud, InteractionMode, ViewerEngine};
use crate::animation::{Animator, FeedbackKind};
use crate::camera::{Camera, FlyCameraController};
use crate::options::Options;
use crate::scene::{ObjectDescription, ObjectId, Scene};

// ── State ──

impl ViewerEngine {
    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Object under the cursor, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ObjectId> {
        self.hover.hovered()
    }

    /// Whether movement keys currently move the selected object.
    #[must_use]
    pub fn can_move_object(&self) -> bool {
        self.can_move_object
    }

    /// Status text and instructions.
    #[must_use]
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Whether the HUD changed since the last call.
    pub fn take_hud_changed(&mut self) -> bool {
        self.hud.take_changed()
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Camera ──

impl ViewerEngine {
    /// The camera to render from.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera.camera
    }

    /// The fly camera controller.
    #[must_use]
    pub fn camera_controller(&self) -> &FlyCameraController {
        &self.camera
    }
}

// ── Scene ──

impl ViewerEngine {
    /// The scene as currently animated.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Feedback animation scheduler.
    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Kind of feedback animation running on `id`, if any.
    #[must_use]
    pub fn animation_on(&self, id: ObjectId) -> Option<FeedbackKind> {
        self.animator.active_kind(id)
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, description: ObjectDescription) -> ObjectId {
        self.scene.add(description)
    }

    /// Remove an object, clearing selection and hover that point at it.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        if self.selected == Some(id) {
            self.deselect();
        }
        if self.hover.hovered() == Some(id) {
            let _ = self.hover.clear();
        }
        self.scene.remove(id).is_some()
    }
}
