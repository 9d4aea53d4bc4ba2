//! winit `ApplicationHandler` hosting a single `PageView`.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use webpane::{PageConfig, PageView, WrySurface};

pub struct DemoApp {
    view: PageView,
    window: Option<Arc<Window>>,
    surface: Option<WrySurface<Arc<Window>>>,
}

impl DemoApp {
    pub fn new(config: PageConfig) -> Self {
        let url = config.url.clone();
        let view = PageView::new(config)
            .on_load(move || tracing::info!(url = %url, "web content finished loading"))
            .on_error(|error| {
                tracing::error!(code = error.code, stage = %error.stage, "{}", error.message);
            });

        Self {
            view,
            window: None,
            surface: None,
        }
    }

    /// Bounds covering the whole client area of `window`.
    fn full_window_bounds(window: &Window) -> wry::Rect {
        let size = window.inner_size();
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
            size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("webpane demo")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut surface =
            WrySurface::new(Arc::clone(&window), Self::full_window_bounds(&window));

        // The configuration is applied exactly once per view; a second
        // resume on platforms that suspend/resume is a no-op.
        self.view.prepare_surface(&mut surface);
        if let Err(e) = self.view.apply_configuration(&mut surface) {
            tracing::error!("Failed to start page load: {e}");
        }

        self.window = Some(window);
        self.surface = Some(surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let (Some(surface), Some(window)) = (&mut self.surface, &self.window) {
                        if let Err(e) = surface.set_bounds(Self::full_window_bounds(window)) {
                            tracing::warn!("Failed to resize webview: {e}");
                        }
                    }
                }
            }

            _ => {}
        }
    }
}
