//! Repository adapters: discover Python sources, extract their imports, and resolve policy files.
//!
//! This crate is allowed to do filesystem IO (reads only). It never writes to the console;
//! diagnostics go through `tracing`.

#![forbid(unsafe_code)]

mod discover;
mod edges;
mod python;
mod store;

pub use discover::{DEFAULT_IGNORED, discover_sources};
pub use edges::{build_edges, edges_for_source, is_local_module};
pub use python::{ImportFrom, extract_imports};
pub use store::PolicyStore;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use camino::Utf8Path;

    /// Parse arbitrary text as Python and count its top-level `from` imports.
    ///
    /// Returns `Err(...)` for a syntax error. **Never panics** on any input.
    pub fn extract_imports(text: &str) -> anyhow::Result<usize> {
        Ok(crate::python::extract_imports(text, "<fuzz>")?.len())
    }

    /// Parse arbitrary text as a policy file.
    ///
    /// Returns `Ok(())` for a valid policy, `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_policy(text: &str) -> anyhow::Result<()> {
        let path = Utf8Path::new("__embargo__.json");
        embargo_domain::parse_policy_json(path, text)?;
        Ok(())
    }
}
