//! Navigation outcome types and the adapter that forwards them to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which point of the navigation a failure was reported at.
///
/// Both stages route to the same failure callback; the stage is carried on
/// the error as a reason tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureStage {
    /// The engine gave up before the navigation was committed.
    Provisional,
    /// The navigation was committed and failed mid-load.
    Committed,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provisional => write!(f, "provisional"),
            Self::Committed => write!(f, "committed"),
        }
    }
}

/// Opaque navigation failure reported by the web engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("navigation failed ({stage}, code {code}): {message}")]
pub struct LoadError {
    pub stage: FailureStage,
    /// The engine's numeric error code; 0 when the engine supplies none.
    pub code: i32,
    /// Human-readable description, surfaced verbatim.
    pub message: String,
}

impl LoadError {
    pub fn new(stage: FailureStage, code: i32, message: impl Into<String>) -> Self {
        Self {
            stage,
            code,
            message: message.into(),
        }
    }
}

/// Terminal outcome of the single page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Navigation finished successfully.
    Loaded,
    /// Navigation failed, before or after it was committed.
    Failed(LoadError),
}

/// Receives navigation lifecycle events from the engine and forwards the
/// terminal outcome to the host's callbacks.
///
/// Shared as an `Arc` so engine handler closures can hold it. Absent
/// callbacks drop the event silently.
pub struct NavigationAdapter {
    on_load: Option<Box<dyn Fn()>>,
    on_error: Option<Box<dyn Fn(&LoadError)>>,
}

impl NavigationAdapter {
    pub fn new(
        on_load: Option<Box<dyn Fn()>>,
        on_error: Option<Box<dyn Fn(&LoadError)>>,
    ) -> Self {
        Self { on_load, on_error }
    }

    /// The engine finished the navigation.
    pub fn navigation_finished(&self) {
        self.dispatch(PageEvent::Loaded);
    }

    /// The navigation failed after it was committed.
    pub fn navigation_failed(&self, code: i32, message: impl Into<String>) {
        self.dispatch(PageEvent::Failed(LoadError::new(
            FailureStage::Committed,
            code,
            message,
        )));
    }

    /// The navigation failed before it was committed.
    pub fn provisional_navigation_failed(&self, code: i32, message: impl Into<String>) {
        self.dispatch(PageEvent::Failed(LoadError::new(
            FailureStage::Provisional,
            code,
            message,
        )));
    }

    /// Forward a terminal event to the matching callback, if any.
    pub fn dispatch(&self, event: PageEvent) {
        match event {
            PageEvent::Loaded => {
                tracing::debug!("navigation finished");
                if let Some(on_load) = &self.on_load {
                    on_load();
                }
            }
            PageEvent::Failed(error) => {
                tracing::warn!(code = error.code, stage = %error.stage, "{}", error.message);
                if let Some(on_error) = &self.on_error {
                    on_error(&error);
                }
            }
        }
    }
}
