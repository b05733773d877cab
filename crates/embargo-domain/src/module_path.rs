//! Translation between dotted module names and paths under the application root.

use camino::{Utf8Path, Utf8PathBuf};

use crate::prefix::SEPARATOR;

/// Suffix stripped from source files when deriving their module name.
pub const SOURCE_SUFFIX: &str = ".py";

/// Would-be location of `module` under `root` (`pkg.db` -> `<root>/pkg/db`).
pub fn module_to_path(module: &str, root: &Utf8Path) -> Utf8PathBuf {
    let mut path = root.to_path_buf();
    for segment in module.split(SEPARATOR).filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

/// Dotted module name of a source file (`<root>/pkg/db.py` -> `pkg.db`).
///
/// Returns `None` when `path` is not inside `root`.
pub fn path_to_module(path: &Utf8Path, root: &Utf8Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let joined = rel
        .components()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(".");
    Some(match joined.strip_suffix(SOURCE_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => joined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_maps_to_nested_path() {
        let root = Utf8Path::new("/app");
        assert_eq!(
            module_to_path("pkg.db.conn", root),
            Utf8PathBuf::from("/app/pkg/db/conn")
        );
        assert_eq!(module_to_path("pkg", root), Utf8PathBuf::from("/app/pkg"));
    }

    #[test]
    fn path_maps_to_module() {
        let root = Utf8Path::new("/app");
        assert_eq!(
            path_to_module(Utf8Path::new("/app/pkg/worker.py"), root).as_deref(),
            Some("pkg.worker")
        );
        assert_eq!(
            path_to_module(Utf8Path::new("/app/pkg/sub/__init__.py"), root).as_deref(),
            Some("pkg.sub.__init__")
        );
        assert_eq!(
            path_to_module(Utf8Path::new("/app/pkg/sub"), root).as_deref(),
            Some("pkg.sub")
        );
    }

    #[test]
    fn only_the_trailing_suffix_is_stripped() {
        let root = Utf8Path::new("/app");
        assert_eq!(
            path_to_module(Utf8Path::new("/app/pkg.pyx/mod.py"), root).as_deref(),
            Some("pkg.pyx.mod")
        );
    }

    #[test]
    fn outside_root_has_no_module() {
        assert_eq!(
            path_to_module(Utf8Path::new("/elsewhere/a.py"), Utf8Path::new("/app")),
            None
        );
    }
}
