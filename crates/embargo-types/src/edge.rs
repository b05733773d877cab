use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// One `from <module> import ...` statement found in a source file.
///
/// Produced by the source adapters, consumed by the checker. An edge with
/// `imported_module == None` or `is_local == false` is out of scope and is skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEdge {
    pub importing_file: Utf8PathBuf,
    pub imported_module: Option<String>,
    /// Whether the first segment of the module resolves under the application root.
    pub is_local: bool,
    /// 1-based line of the statement, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl ImportEdge {
    pub fn local(importing_file: impl Into<Utf8PathBuf>, module: &str) -> Self {
        Self {
            importing_file: importing_file.into(),
            imported_module: Some(module.to_string()),
            is_local: true,
            line: None,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// The module to check, if this edge is in scope at all.
    pub fn checked_module(&self) -> Option<&str> {
        if !self.is_local {
            return None;
        }
        self.imported_module.as_deref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_party_and_missing_modules_are_not_checked() {
        let mut edge = ImportEdge::local("/app/pkg/a.py", "pkg.b");
        assert_eq!(edge.checked_module(), Some("pkg.b"));

        edge.is_local = false;
        assert_eq!(edge.checked_module(), None);

        edge.is_local = true;
        edge.imported_module = None;
        assert_eq!(edge.checked_module(), None);

        edge.imported_module = Some(String::new());
        assert_eq!(edge.checked_module(), None);
    }
}
