//! Input dispatch and command execution for [`ViewerEngine`].

use super::{mode_label, InteractionMode, ViewerCommand, ViewerEngine};
use crate::input::InputEvent;
use crate::scene::ObjectId;

// ── Unified input handler ──

impl ViewerEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Held keys, cursor position and mouse motion are recorded for the next
    /// [`update`](Self::update); bound keys and left clicks are executed
    /// immediately. Returns the command that was executed, if any.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<ViewerCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::ToggleMode => self.set_mode(self.mode.toggled()),
            ViewerCommand::SetMode { mode } => self.set_mode(mode),
            ViewerCommand::ClickHovered => {
                if let Some(id) = self.hover.hovered() {
                    self.click_object(id);
                }
            }
            ViewerCommand::ClickObject { id } => self.click_object(id),
            ViewerCommand::Deselect => self.deselect(),
            ViewerCommand::PulseSelected => match self.selected {
                Some(id) => self.pulse(id),
                None => log::info!("Pulse ignored: no object selected"),
            },
            ViewerCommand::SpinSelected => match self.selected {
                Some(id) => self.spin(id),
                None => log::info!("Spin ignored: no object selected"),
            },
            ViewerCommand::Pulse { id } => self.pulse(id),
            ViewerCommand::Spin { id } => self.spin(id),
            ViewerCommand::ToggleInstructions => {
                self.hud.toggle_instructions();
                log::debug!(
                    "Instructions {}",
                    if self.hud.instructions_visible() {
                        "shown"
                    } else {
                        "hidden"
                    }
                );
            }
        }
    }
}

// ── Mode and selection ──

impl ViewerEngine {
    fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        log::info!("Entered {mode} mode");
        if mode.is_camera() {
            self.deselect();
            let _ = self.hover.clear();
        }
        self.hud.set_mode_text(mode_label(&self.options, mode));
    }

    /// Click semantics: ignored in camera mode, toggles the selection of the
    /// clicked object otherwise.
    fn click_object(&mut self, id: ObjectId) {
        if self.mode.is_camera() {
            log::debug!("Click on {id} ignored in camera mode");
            return;
        }
        if !self.scene.get(id).is_some_and(|o| o.selectable) {
            log::debug!("Click on {id} ignored: not selectable");
            return;
        }
        if self.selected == Some(id) {
            self.deselect();
        } else {
            self.select(id);
        }
    }

    fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
        self.can_move_object = true;
        self.refresh_selection_text();
        log::info!("{}", self.hud.selection_text());
    }

    pub(super) fn deselect(&mut self) {
        if let Some(id) = self.selected.take() {
            log::info!("Deselected {id}");
        }
        self.can_move_object = false;
        self.hud.set_selection_text(&self.options.hud.no_selection);
    }
}

// ── Feedback animations ──

impl ViewerEngine {
    fn pulse(&mut self, id: ObjectId) {
        match self.scene.get_mut(id) {
            Some(object) => {
                self.animator.pulse(object, &self.options.animation.pulse);
            }
            None => log::warn!("Pulse requested for missing object {id}"),
        }
    }

    fn spin(&mut self, id: ObjectId) {
        match self.scene.get_mut(id) {
            Some(object) => {
                self.animator.spin(object, &self.options.animation.spin);
            }
            None => log::warn!("Spin requested for missing object {id}"),
        }
    }
}
