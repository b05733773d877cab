//! Top-level `from <module> import ...` extraction from Python source.
//!
//! Sources are parsed into a module AST with `rustpython-parser`; only statements directly in
//! the module body are reported. Imports nested in functions, classes or `if` blocks are not,
//! and neither are plain `import x` statements.

use anyhow::Context;
use rustpython_parser::{Parse, ast};

/// One `from ... import ...` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportFrom {
    /// Absolute or relative module name, without the leading dots. `None` for `from . import x`.
    pub module: Option<String>,
    /// Number of leading dots (0 for absolute imports).
    pub level: u32,
    /// 1-based line where the statement starts.
    pub line: u32,
}

/// Parse `source` and return its top-level `from` imports in source order.
///
/// A syntax error fails the whole file; `source_path` only labels the error.
pub fn extract_imports(source: &str, source_path: &str) -> anyhow::Result<Vec<ImportFrom>> {
    let body = ast::Suite::parse(source, source_path)
        .with_context(|| format!("parse python source {source_path}"))?;
    let lines = LineIndex::new(source);

    let imports = body
        .iter()
        .filter_map(|stmt| match stmt {
            ast::Stmt::ImportFrom(import) => Some(ImportFrom {
                module: import.module.as_ref().map(|m| m.as_str().to_string()),
                level: import.level.as_ref().map_or(0, |l| l.to_u32()),
                line: lines.line_of(usize::from(import.range.start())),
            }),
            _ => None,
        })
        .collect();

    Ok(imports)
}

/// Byte offsets of line starts, for mapping AST offsets to 1-based line numbers.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> u32 {
        let line = self.starts.partition_point(|&start| start <= offset);
        u32::try_from(line).unwrap_or(u32::MAX)
    }
}
