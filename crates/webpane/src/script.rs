//! Injected scripts: snippets of CSS or JS registered to run automatically
//! at a page-load phase, without modifying the served page.

use serde::{Deserialize, Serialize};

/// When an injected script runs during the page-load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjectionPhase {
    /// Before the page's own content begins rendering.
    DocumentStart,
    /// After the document structure is fully parsed.
    DocumentEnd,
}

/// A script registered on the surface, with its scheduled phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedScript {
    /// The script text as supplied by the caller (or built for CSS injection).
    pub source: String,
    pub phase: InjectionPhase,
}

impl InjectedScript {
    pub fn document_start(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            phase: InjectionPhase::DocumentStart,
        }
    }

    pub fn document_end(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            phase: InjectionPhase::DocumentEnd,
        }
    }

    /// Lower the script to the form handed to the engine.
    ///
    /// wry only schedules initialization scripts at document start, so a
    /// `DocumentEnd` script is delivered inside a `DOMContentLoaded`
    /// listener. `source` itself stays verbatim.
    pub fn engine_source(&self) -> String {
        match self.phase {
            InjectionPhase::DocumentStart => self.source.clone(),
            InjectionPhase::DocumentEnd => format!(
                "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
                self.source
            ),
        }
    }
}

/// Escape CSS text so it can sit inside a double-quoted JS string literal.
/// Backslashes first, then newlines, then quotes.
fn escape_css(css: &str) -> String {
    css.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

/// Build the document-start script that installs `css` on the page via a
/// `<style>` element.
pub fn style_injection_script(css: &str) -> InjectedScript {
    let escaped = escape_css(css);
    let source = format!(
        "var style = document.createElement('style');\n\
         style.innerText = \"{escaped}\";\n\
         document.head.appendChild(style);"
    );
    InjectedScript::document_start(source)
}
