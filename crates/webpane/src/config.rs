//! Page configuration.

use url::Url;

use crate::color::Color;

/// Configuration for a single embedded page.
///
/// The URL is the only required field; it is validated at the call site by
/// `Url::parse`, so a malformed address can never reach the view. The other
/// three fields are independently optional and default to the platform's
/// behavior when absent.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Absolute URL to load.
    pub url: Url,
    /// Background for the surface and its scroll container.
    pub background_color: Option<Color>,
    /// Stylesheet text injected once, before the page content renders.
    pub custom_css: Option<String>,
    /// Script text injected once, after the document is fully parsed.
    pub custom_js: Option<String>,
}

impl PageConfig {
    /// Create a config that loads `url` with no customization.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            background_color: None,
            custom_css: None,
            custom_js: None,
        }
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    pub fn with_custom_js(mut self, js: impl Into<String>) -> Self {
        self.custom_js = Some(js.into());
        self
    }
}
