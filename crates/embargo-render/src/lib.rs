//! Rendering utilities for console and CI surfaces (text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use text::render_text;

use embargo_types::{Direction, Violation};

/// One-line description of a violation, shared by all renderers.
pub fn violation_message(v: &Violation) -> String {
    match v.direction {
        Direction::Import => format!("import of `{}` is not allowed here", v.imported_module),
        Direction::Export => match v.importing_module.as_deref() {
            Some(importer) => format!(
                "`{}` may not be imported by `{}`",
                v.imported_module, importer
            ),
            None => format!("`{}` may not be imported here", v.imported_module),
        },
    }
}
