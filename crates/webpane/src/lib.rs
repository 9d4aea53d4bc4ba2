//! Embeddable web page view built on the `wry` engine.
//!
//! Wraps a system web-rendering surface to provide:
//! - A single page load per view instance
//! - Caller-supplied CSS injected at document start
//! - Caller-supplied JS injected at document end
//! - Custom background color for the surface
//! - Terminal navigation outcome (loaded / failed) forwarded to host callbacks

pub mod color;
pub mod config;
pub mod events;
pub mod script;
pub mod surface;
pub mod view;

pub use color::Color;
pub use config::PageConfig;
pub use events::{FailureStage, LoadError, NavigationAdapter, PageEvent};
pub use script::{style_injection_script, InjectedScript, InjectionPhase};
pub use surface::{Surface, SurfaceError, WrySurface};
pub use view::PageView;
