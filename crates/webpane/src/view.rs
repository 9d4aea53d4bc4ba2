//! The embedded page view: one surface, one configuration, one load.

use std::sync::Arc;

use crate::config::PageConfig;
use crate::events::{LoadError, NavigationAdapter};
use crate::script::{style_injection_script, InjectedScript};
use crate::surface::{Surface, SurfaceError};

/// A reusable view that owns a single web-rendering surface, applies at most
/// one configuration, and reports the terminal outcome (loaded / failed) to
/// caller-supplied callbacks.
///
/// ```no_run
/// use url::Url;
/// use webpane::{PageConfig, PageView};
///
/// let config = PageConfig::new(Url::parse("https://example.com").unwrap());
/// let view = PageView::new(config)
///     .on_load(|| tracing::info!("page loaded"))
///     .on_error(|e| tracing::error!("{e}"));
/// ```
pub struct PageView {
    config: PageConfig,
    on_load: Option<Box<dyn Fn()>>,
    on_error: Option<Box<dyn Fn(&LoadError)>>,
    adapter: Option<Arc<NavigationAdapter>>,
    scripts: Vec<InjectedScript>,
    applied: bool,
}

impl PageView {
    /// Store the configuration and callbacks. Performs no I/O.
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            on_load: None,
            on_error: None,
            adapter: None,
            scripts: Vec::new(),
            applied: false,
        }
    }

    /// Set the success callback, invoked once when the navigation finishes.
    pub fn on_load(mut self, f: impl Fn() + 'static) -> Self {
        self.on_load = Some(Box::new(f));
        self
    }

    /// Set the failure callback, invoked once with the engine's error when
    /// the navigation fails at either stage.
    pub fn on_error(mut self, f: impl Fn(&LoadError) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The delegate receiving this view's navigation events. Created on
    /// first use; callbacks must be set before then.
    pub fn adapter(&mut self) -> Arc<NavigationAdapter> {
        if let Some(adapter) = &self.adapter {
            return Arc::clone(adapter);
        }
        let adapter = Arc::new(NavigationAdapter::new(
            self.on_load.take(),
            self.on_error.take(),
        ));
        self.adapter = Some(Arc::clone(&adapter));
        adapter
    }

    /// Prepare a freshly allocated surface: paint the configured background
    /// and attach the navigation adapter. No network activity.
    pub fn prepare_surface(&mut self, surface: &mut impl Surface) {
        if let Some(color) = self.config.background_color {
            surface.set_background_color(color);
        }
        let adapter = self.adapter();
        surface.set_navigation_adapter(adapter);
    }

    /// Register the configured injections and issue the single page load.
    ///
    /// Runs at most once per view instance; any later call is a no-op, so a
    /// host that re-runs its update path cannot duplicate scripts or
    /// re-issue the load.
    pub fn apply_configuration(&mut self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        if self.applied {
            tracing::debug!(url = %self.config.url, "configuration already applied");
            return Ok(());
        }
        self.applied = true;

        if let Some(css) = &self.config.custom_css {
            let script = style_injection_script(css);
            surface.register_script(&script);
            self.scripts.push(script);
        }

        if let Some(js) = &self.config.custom_js {
            let script = InjectedScript::document_end(js.clone());
            surface.register_script(&script);
            self.scripts.push(script);
        }

        tracing::debug!(url = %self.config.url, "issuing page load");
        surface.load_url(&self.config.url)
    }

    /// Scripts registered on the surface by `apply_configuration`.
    pub fn scripts(&self) -> &[InjectedScript] {
        &self.scripts
    }

    /// Whether the configuration has been applied.
    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use url::Url;

    use super::*;
    use crate::color::Color;
    use crate::script::InjectionPhase;

    /// Recording stand-in for the platform surface.
    #[derive(Default)]
    struct FakeSurface {
        background: Option<Color>,
        scroll_background: Option<Color>,
        scripts: Vec<InjectedScript>,
        loads: Vec<Url>,
        adapter: Option<Arc<NavigationAdapter>>,
    }

    impl Surface for FakeSurface {
        fn set_background_color(&mut self, color: Color) {
            // The platform paints the view and its scroll container together.
            self.background = Some(color);
            self.scroll_background = Some(color);
        }

        fn set_navigation_adapter(&mut self, adapter: Arc<NavigationAdapter>) {
            self.adapter = Some(adapter);
        }

        fn register_script(&mut self, script: &InjectedScript) {
            self.scripts.push(script.clone());
        }

        fn load_url(&mut self, url: &Url) -> Result<(), SurfaceError> {
            self.loads.push(url.clone());
            Ok(())
        }
    }

    fn test_config() -> PageConfig {
        PageConfig::new(Url::parse("https://example.com").unwrap())
    }

    #[test]
    fn apply_registers_both_scripts_and_loads() {
        let css = "p { color: blue !important; }";
        let js = "console.log('injected');";
        let mut view =
            PageView::new(test_config().with_custom_css(css).with_custom_js(js));
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);
        view.apply_configuration(&mut surface).unwrap();

        assert_eq!(surface.scripts.len(), 2);

        let css_script = surface
            .scripts
            .iter()
            .find(|s| s.phase == InjectionPhase::DocumentStart)
            .expect("a document-start script");
        assert!(css_script.source.contains(css));

        let js_script = surface
            .scripts
            .iter()
            .find(|s| s.phase == InjectionPhase::DocumentEnd)
            .expect("a document-end script");
        assert_eq!(js_script.source, js);

        assert_eq!(surface.loads.len(), 1);
        assert_eq!(surface.loads[0].as_str(), "https://example.com/");

        // The view's own registry mirrors what the surface received.
        assert_eq!(view.scripts(), surface.scripts.as_slice());
    }

    #[test]
    fn prepare_paints_surface_and_scroll_container() {
        let green = Color::from_rgb(0, 255, 0);
        let mut view = PageView::new(test_config().with_background_color(green));
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);

        assert_eq!(surface.background, Some(green));
        assert_eq!(surface.scroll_background, Some(green));
        assert!(surface.adapter.is_some());
    }

    #[test]
    fn prepare_without_color_leaves_platform_default() {
        let mut view = PageView::new(test_config());
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);

        assert_eq!(surface.background, None);
        assert_eq!(surface.scroll_background, None);
    }

    #[test]
    fn apply_twice_is_a_no_op() {
        let mut view = PageView::new(
            test_config()
                .with_custom_css("body {}")
                .with_custom_js("1;"),
        );
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);
        view.apply_configuration(&mut surface).unwrap();
        view.apply_configuration(&mut surface).unwrap();

        assert_eq!(surface.scripts.len(), 2);
        assert_eq!(surface.loads.len(), 1);
        assert_eq!(view.scripts().len(), 2);
        assert!(view.is_applied());
    }

    #[test]
    fn apply_without_customization_only_loads() {
        let mut view = PageView::new(test_config());
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);
        view.apply_configuration(&mut surface).unwrap();

        assert!(surface.scripts.is_empty());
        assert_eq!(surface.loads.len(), 1);
    }

    #[test]
    fn finished_navigation_reaches_success_callback() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut view =
            PageView::new(test_config()).on_load(move || counter.set(counter.get() + 1));
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);
        view.apply_configuration(&mut surface).unwrap();

        let adapter = surface.adapter.expect("adapter attached");
        adapter.navigation_finished();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn provisional_failure_reaches_error_callback() {
        let captured = Rc::new(Cell::new(0i32));
        let sink = Rc::clone(&captured);
        let mut view =
            PageView::new(test_config()).on_error(move |e: &LoadError| sink.set(e.code));
        let mut surface = FakeSurface::default();

        view.prepare_surface(&mut surface);

        let adapter = surface.adapter.expect("adapter attached");
        adapter.provisional_navigation_failed(42, "name resolution failed");

        assert_eq!(captured.get(), 42);
    }
}
