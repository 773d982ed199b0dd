//! Standalone viewport window backed by winit.
//!
//! The shell owns nothing interesting: it translates winit events into
//! [`InputEvent`]s for the frame loop, applies the loop's cursor
//! requests (warp to the midpoint, show/hide), and forwards frame
//! parameters to the wgpu grid renderer. Diagnostics are surfaced
//! through the window title at ~4 Hz.
//!
//! ```no_run
//! # use simview::Viewer;
//! Viewer::builder().with_title("simview").build().run().unwrap();
//! ```

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::FrameLoop,
    error::SimviewError,
    input::InputEvent,
    options::Options,
    render::{GridRenderer, RenderBackend, RenderContext},
};

/// How often the diagnostics line in the window title is refreshed.
const STATUS_REFRESH: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "simview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running the viewport harness.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop. Blocks until the window is closed.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimviewError::Viewer`] if the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), SimviewError> {
        let event_loop =
            EventLoop::new().map_err(|e| SimviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            renderer: None,
            frame_loop: None,
            options: self.options,
            title: self.title,
            last_status_refresh: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SimviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    renderer: Option<GridRenderer>,
    frame_loop: Option<FrameLoop>,
    options: Options,
    title: String,
    last_status_refresh: Instant,
}

impl ViewerApp {
    /// Warp the pointer back to the window midpoint. Some platforms
    /// refuse cursor warping; mouselook degrades there, nothing else.
    fn recenter_cursor(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let inner = window.inner_size();
        let anchor =
            PhysicalPosition::new(inner.width / 2, inner.height / 2);
        if let Err(e) = window.set_cursor_position(anchor) {
            log::debug!("cursor warp unsupported: {e}");
        }
    }

    /// Sync cursor visibility with the grab state.
    fn apply_cursor_mode(&self) {
        if let (Some(window), Some(frame_loop)) =
            (&self.window, &self.frame_loop)
        {
            window.set_cursor_visible(!frame_loop.cursor_grabbed());
        }
    }

    /// Apply a mapper response: warp, visibility, exit.
    fn apply_response(
        &self,
        response: crate::input::EventResponse,
        event_loop: &ActiveEventLoop,
    ) {
        if response.grab_changed {
            self.apply_cursor_mode();
        }
        if response.recenter_cursor {
            self.recenter_cursor();
        }
        if response.exit {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(
                self.options.viewport.window_width,
                self.options.viewport.window_height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to initialize GPU context: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut frame_loop = FrameLoop::new(&self.options);
        // The actual surface can differ from the configured size (DPI
        // scaling); bring the projection and midpoint anchor in line.
        let _ = frame_loop.handle_event(&InputEvent::Resized {
            width: inner.width,
            height: inner.height,
        });

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(GridRenderer::new(context));
        self.frame_loop = Some(frame_loop);

        self.apply_cursor_mode();
        self.recenter_cursor();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.is_none()
            || self.renderer.is_none()
            || self.frame_loop.is_none()
        {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                if let Some(frame_loop) = &mut self.frame_loop {
                    let response =
                        frame_loop.handle_event(&InputEvent::CloseRequested);
                    self.apply_response(response, event_loop);
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                if let Some(frame_loop) = &mut self.frame_loop {
                    let response = frame_loop.handle_event(&InputEvent::Resized {
                        width: size.width,
                        height: size.height,
                    });
                    self.apply_response(response, event_loop);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Key repeats would re-toggle bound actions.
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key = format!("{code:?}");
                let input = if event.state == ElementState::Pressed {
                    InputEvent::KeyPressed { key }
                } else {
                    InputEvent::KeyReleased { key }
                };
                if let Some(frame_loop) = &mut self.frame_loop {
                    let response = frame_loop.handle_event(&input);
                    self.apply_response(response, event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(frame_loop) = &mut self.frame_loop {
                    let response =
                        frame_loop.handle_event(&InputEvent::MouseMoved {
                            x: position.x as f32,
                            y: position.y as f32,
                        });
                    self.apply_response(response, event_loop);
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(frame_loop), Some(renderer)) = (
                    &self.window,
                    &mut self.frame_loop,
                    &mut self.renderer,
                ) else {
                    return;
                };

                if !frame_loop.should_render() {
                    window.request_redraw();
                    return;
                }

                frame_loop.advance();
                match renderer.render(&frame_loop.frame()) {
                    Ok(()) => {}
                    Err(
                        wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                    ) => {
                        let inner = window.inner_size();
                        renderer.resize(inner.width, inner.height);
                    }
                    Err(e) => {
                        log::error!("render error: {e:?}");
                    }
                }

                let now = Instant::now();
                if now.duration_since(self.last_status_refresh)
                    >= STATUS_REFRESH
                {
                    window.set_title(&format!(
                        "{} | {}",
                        self.title,
                        frame_loop.panel().status_line()
                    ));
                    self.last_status_refresh = now;
                }

                window.request_redraw();
            }

            _ => (),
        }
    }
}
