//! Scene-level controller.
//!
//! [`ViewerEngine`] owns the scene, the fly camera, input state, hover and
//! selection, the feedback animator and the HUD. It has no GPU state, so the
//! whole interaction model can be driven from tests:
//!
//! ```ignore
//! let mut engine = ViewerEngine::new(Scene::demo(), Options::default(), (1280, 720));
//! engine.handle_input(&InputEvent::CursorMoved { x: 640.0, y: 360.0 });
//! engine.update(1.0 / 60.0);
//! engine.execute(ViewerCommand::ClickHovered);
//! ```

mod accessors;
pub mod command;
mod execute;
mod hud;
mod mode;

use glam::{Vec2, Vec3};

pub use self::command::ViewerCommand;
pub use self::hud::Hud;
pub use self::mode::InteractionMode;
use crate::animation::Animator;
use crate::camera::FlyCameraController;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::picking::{self, HoverChange, HoverState};
use crate::scene::{ObjectId, Scene};

/// Interactive viewer state machine.
///
/// # Frame loop
///
/// Forward window events through [`handle_input`](Self::handle_input), then
/// call [`update`](Self::update) once per frame with the elapsed seconds.
/// Read the camera, scene and HUD to draw.
pub struct ViewerEngine {
    options: Options,
    scene: Scene,
    camera: FlyCameraController,
    input: InputProcessor,
    hover: HoverState,
    mode: InteractionMode,
    selected: Option<ObjectId>,
    can_move_object: bool,
    animator: Animator,
    hud: Hud,
    viewport: Vec2,
}

impl ViewerEngine {
    /// Engine for `scene` with a viewport of `(width, height)` physical
    /// pixels.
    #[must_use]
    pub fn new(scene: Scene, options: Options, viewport: (u32, u32)) -> Self {
        let viewport = Vec2::new(viewport.0 as f32, viewport.1 as f32);
        let aspect = if viewport.y > 0.0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        let camera =
            FlyCameraController::new(scene.camera_pose(), &options.camera, aspect);
        let mode = if options.selection.start_in_camera_mode {
            InteractionMode::Camera
        } else {
            InteractionMode::Selection
        };
        let hud = Hud::new(
            mode_label(&options, mode),
            &options.hud.no_selection,
            options.hud.show_instructions,
            &options.keybindings,
        );
        log::info!(
            "Viewer engine ready: {} objects, starting in {mode} mode",
            scene.len()
        );
        Self {
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            options,
            scene,
            camera,
            hover: HoverState::default(),
            mode,
            selected: None,
            can_move_object: false,
            animator: Animator::new(),
            hud,
            viewport,
        }
    }

    /// Advance one frame.
    ///
    /// In camera mode the camera turns by the accumulated mouse motion and
    /// flies along its own axes; in selection mode the selected object
    /// moves along world axes. Hover is then refreshed from the cursor and
    /// feedback animations advance by `dt`.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let direction = self.input.movement_axis();
        let look = self.input.take_look_delta();

        match self.mode {
            InteractionMode::Camera => {
                self.camera.look(look);
                self.camera.translate(direction, dt);
            }
            InteractionMode::Selection => {
                if self.can_move_object {
                    self.move_selected(direction, dt);
                }
            }
        }
        self.hud.set_mode_text(mode_label(&self.options, self.mode));

        self.update_hover();
        self.animator.update(dt, &mut self.scene);
    }

    /// Resize the viewport (physical pixels).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
            self.camera.resize(width, height);
        }
    }

    /// Replace the options, keeping the camera pose, mode and selection.
    pub fn set_options(&mut self, options: Options) {
        self.camera.apply_options(&options.camera);
        self.input.set_key_bindings(options.keybindings.clone());
        self.hud.set_bindings(&options.keybindings);
        self.options = options;
        self.hud.set_mode_text(mode_label(&self.options, self.mode));
        self.refresh_selection_text();
        log::debug!("Options updated");
    }

    fn move_selected(&mut self, direction: Vec3, dt: f32) {
        let Some(id) = self.selected else {
            return;
        };
        let speed = self.options.selection.object_speed;
        if let Some(object) = self.scene.get_mut(id) {
            object.transform.position += world_direction(direction) * speed * dt;
        }
    }

    fn update_hover(&mut self) {
        let hit = if self.mode.is_camera() {
            None
        } else {
            self.input
                .cursor()
                .and_then(|cursor| {
                    self.camera.camera.screen_ray(cursor, self.viewport)
                })
                .and_then(|ray| picking::pick(&ray, &self.scene))
                .map(|hit| hit.id)
        };
        if let Some(change) = self.hover.update(hit) {
            self.log_hover(change);
        }
    }

    fn log_hover(&self, change: HoverChange) {
        let name = |id| self.scene.get(id).map_or("?", |o| o.name.as_str());
        match change {
            HoverChange::Entered(id) => log::debug!("Hover enter '{}'", name(id)),
            HoverChange::Exited(id) => log::debug!("Hover exit '{}'", name(id)),
            HoverChange::Changed { from, to } => {
                log::debug!("Hover '{}' -> '{}'", name(from), name(to));
            }
        }
    }

    fn refresh_selection_text(&mut self) {
        let text = match self.selected.and_then(|id| self.scene.get(id)) {
            Some(object) => self.options.hud.selected_label(&object.name),
            None => self.options.hud.no_selection.clone(),
        };
        self.hud.set_selection_text(&text);
    }
}

/// Map a (right, up, forward) movement axis onto world axes. World forward
/// is -Z, matching the camera's rest orientation.
fn world_direction(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, direction.y, -direction.z)
}

fn mode_label(options: &Options, mode: InteractionMode) -> &str {
    match mode {
        InteractionMode::Camera => &options.hud.camera_mode,
        InteractionMode::Selection => &options.hud.selection_mode,
    }
}
