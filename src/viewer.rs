//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! # use flyview::{Scene, Viewer};
//! Viewer::builder()
//!     .with_scene(Scene::demo())
//!     .with_title("flyview")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    engine::ViewerEngine, error::ViewerError, gpu::RenderContext,
    input::InputEvent, options::Options, renderer::SceneRenderer,
    scene::Scene, util::FrameTiming, MouseButton,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    scene: Option<Scene>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Builder with the demo scene, default options and title "flyview".
    fn new() -> Self {
        Self {
            scene: None,
            options: None,
            title: "flyview".into(),
        }
    }

    /// Scene to show instead of the demo scene.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            scene: self.scene.unwrap_or_else(Scene::demo),
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing an interactive scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    scene: Scene,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewerError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            state: None,
            pending: Some((self.scene, self.options)),
            title: self.title,
            frame_timing: FrameTiming::new(),
            cursor_locked: false,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewerError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU resources plus the engine, created once the window exists.
struct ViewerState {
    context: RenderContext,
    renderer: SceneRenderer,
    engine: ViewerEngine,
}

impl ViewerState {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
        self.engine.resize(width, height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let _ = self.renderer.prepare(
            &self.context,
            self.engine.camera(),
            self.engine.scene(),
            self.engine.hovered(),
            self.engine.selected(),
        );
        let mut encoder = self.context.create_encoder();
        self.renderer.render(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    state: Option<ViewerState>,
    pending: Option<(Scene, Options)>,
    title: String,
    frame_timing: FrameTiming,
    cursor_locked: bool,
}

/// Surface size for a window: never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn forward(&mut self, event: &InputEvent) {
        if let Some(state) = &mut self.state {
            let _ = state.engine.handle_input(event);
        }
    }

    /// Lock and hide the cursor in camera mode, release it otherwise.
    fn sync_cursor(&mut self) {
        let (Some(window), Some(state)) = (&self.window, &self.state) else {
            return;
        };
        let want_locked = state.engine.mode().is_camera();
        if want_locked == self.cursor_locked {
            return;
        }
        if want_locked {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("Cursor grab unavailable: {e}");
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Cursor release failed: {e}");
        }
        window.set_cursor_visible(!want_locked);
        self.cursor_locked = want_locked;
    }

    /// Mirror HUD changes into the window title and the log.
    fn present_hud(&mut self) {
        let (Some(window), Some(state)) = (&self.window, &mut self.state) else {
            return;
        };
        if !state.engine.take_hud_changed() {
            return;
        }
        let hud = state.engine.hud();
        window.set_title(&hud.title(&self.title));
        if hud.instructions_visible() {
            for line in hud.instructions() {
                log::info!("  {line}");
            }
        }
    }

    fn redraw(&mut self) {
        let dt = self.frame_timing.tick();
        let Some(state) = &mut self.state else {
            return;
        };
        state.engine.update(dt);
        match state.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(w) = &self.window {
                    let (vp_w, vp_h) = viewport_size(w.inner_size());
                    state.resize(vp_w, vp_h);
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
            }
            Err(e) => log::warn!("Frame skipped: {e:?}"),
        }
        self.sync_cursor();
        self.present_hud();
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some((scene, options)) = self.pending.take() else {
            return;
        };

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (vp_w, vp_h),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        let engine = ViewerEngine::new(scene, options, (vp_w, vp_h));
        let renderer = SceneRenderer::new(&context, engine.camera());

        window.request_redraw();
        self.window = Some(window);
        self.state = Some(ViewerState {
            context,
            renderer,
            engine,
        });
        self.frame_timing = FrameTiming::new();
        self.sync_cursor();
        self.present_hud();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        if self.state.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (vp_w, vp_h) = viewport_size(size);
                if let Some(state) = &mut self.state {
                    state.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::Focused(false) => self.forward(&InputEvent::FocusLost),

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(&InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(&InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.forward(&InputEvent::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                    repeat: event.repeat,
                });
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.forward(&InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }
}
