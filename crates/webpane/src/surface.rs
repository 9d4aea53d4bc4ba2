//! The platform web-rendering surface seam and its wry-backed implementation.

use std::sync::Arc;

use url::Url;
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use crate::color::Color;
use crate::events::NavigationAdapter;
use crate::script::InjectedScript;

/// Errors from the engine-backed surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("engine error: {0}")]
    Engine(#[from] wry::Error),
}

/// The web-rendering surface as seen by `PageView`.
///
/// A plain interface over the platform collaborator: background paint,
/// script registration, and a single page-load request. Production code uses
/// [`WrySurface`]; tests substitute a recording double.
pub trait Surface {
    /// Paint the surface and its scroll container with `color`.
    fn set_background_color(&mut self, color: Color);

    /// Attach the adapter that receives navigation lifecycle events.
    fn set_navigation_adapter(&mut self, adapter: Arc<NavigationAdapter>);

    /// Register a script to run at its declared phase on the loaded page.
    fn register_script(&mut self, script: &InjectedScript);

    /// Issue a page-load request for `url`.
    fn load_url(&mut self, url: &Url) -> Result<(), SurfaceError>;
}

/// wry-backed surface, built as a child of a host window.
///
/// The engine webview is constructed lazily on the first `load_url`: wry
/// takes initialization scripts and the background color at build time, so
/// everything staged beforehand is folded into the builder. No network
/// activity happens until that first load.
pub struct WrySurface<W> {
    window: W,
    bounds: wry::Rect,
    background: Option<Color>,
    scripts: Vec<InjectedScript>,
    adapter: Option<Arc<NavigationAdapter>>,
    webview: Option<WebView>,
}

impl<W: HasWindowHandle> WrySurface<W> {
    /// Stage a surface positioned at `bounds` within the parent `window`.
    pub fn new(window: W, bounds: wry::Rect) -> Self {
        Self {
            window,
            bounds,
            background: None,
            scripts: Vec::new(),
            adapter: None,
            webview: None,
        }
    }

    /// Whether the engine webview has been built yet.
    pub fn is_live(&self) -> bool {
        self.webview.is_some()
    }

    /// Move/resize the surface within the parent window.
    pub fn set_bounds(&mut self, bounds: wry::Rect) -> Result<(), SurfaceError> {
        self.bounds = bounds;
        if let Some(webview) = &self.webview {
            webview.set_bounds(bounds)?;
        }
        Ok(())
    }

    fn build(&self, url: &Url) -> Result<WebView, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(self.bounds)
            .with_focused(false);

        if let Some(color) = self.background {
            builder = builder.with_background_color(color.to_rgba());
        }

        for script in &self.scripts {
            let source = script.engine_source();
            builder = builder.with_initialization_script(source.as_str());
        }

        if let Some(adapter) = &self.adapter {
            let adapter = Arc::clone(adapter);
            builder = builder.with_on_page_load_handler(move |event, url| {
                if matches!(event, wry::PageLoadEvent::Finished) {
                    tracing::debug!(url = %url, "page load finished");
                    adapter.navigation_finished();
                }
            });
        }

        builder.with_url(url.as_str()).build_as_child(&self.window)
    }
}

impl<W: HasWindowHandle> Surface for WrySurface<W> {
    fn set_background_color(&mut self, color: Color) {
        self.background = Some(color);
        // wry exposes one background color covering the whole view,
        // scroll area included.
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_background_color(color.to_rgba()) {
                tracing::warn!(error = %e, "failed to repaint webview background");
            }
        }
    }

    fn set_navigation_adapter(&mut self, adapter: Arc<NavigationAdapter>) {
        self.adapter = Some(adapter);
    }

    fn register_script(&mut self, script: &InjectedScript) {
        if self.webview.is_some() {
            tracing::warn!("script registered after the load was issued; ignored");
            return;
        }
        self.scripts.push(script.clone());
    }

    fn load_url(&mut self, url: &Url) -> Result<(), SurfaceError> {
        if let Some(webview) = &self.webview {
            webview.load_url(url.as_str())?;
            return Ok(());
        }

        match self.build(url) {
            Ok(webview) => {
                tracing::debug!(url = %url, scripts = self.scripts.len(), "webview created");
                self.webview = Some(webview);
                Ok(())
            }
            Err(e) => {
                // The engine never started the navigation; report it through
                // the adapter like any other pre-commit failure.
                if let Some(adapter) = &self.adapter {
                    adapter.provisional_navigation_failed(0, e.to_string());
                }
                Err(SurfaceError::Engine(e))
            }
        }
    }
}
