use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use embargo_domain::module_path::SOURCE_SUFFIX;
use embargo_types::ImportEdge;
use rayon::prelude::*;
use tracing::debug;

use crate::python::extract_imports;

/// Does the first segment of `module` name a package directory or module file under `app_root`?
pub fn is_local_module(app_root: &Utf8Path, module: &str) -> bool {
    let Some(first) = module.split('.').next().filter(|s| !s.is_empty()) else {
        return false;
    };
    app_root.join(first).is_dir() || app_root.join(format!("{first}{SOURCE_SUFFIX}")).is_file()
}

/// Edges for the top-level absolute `from` imports of one source file.
///
/// Fails when `source` is not valid Python.
pub fn edges_for_source(
    app_root: &Utf8Path,
    file: &Utf8Path,
    source: &str,
) -> anyhow::Result<Vec<ImportEdge>> {
    let imports = extract_imports(source, file.as_str())?;

    let edges = imports
        .into_iter()
        .filter(|import| {
            if import.level > 0 {
                debug!(file = %file, line = import.line, "skipping relative import");
                return false;
            }
            true
        })
        .map(|import| {
            let is_local = import
                .module
                .as_deref()
                .is_some_and(|m| is_local_module(app_root, m));
            ImportEdge {
                importing_file: file.to_path_buf(),
                imported_module: import.module,
                is_local,
                line: Some(import.line),
            }
        })
        .collect();

    Ok(edges)
}

/// Read `files` in parallel and extract their import edges, keeping file order.
///
/// Files without a `.py` extension produce no edges. Unreadable or unparseable sources fail
/// the whole build.
pub fn build_edges(app_root: &Utf8Path, files: &[Utf8PathBuf]) -> anyhow::Result<Vec<ImportEdge>> {
    let per_file = files
        .par_iter()
        .map(|file| -> anyhow::Result<Vec<ImportEdge>> {
            if file.extension() != Some("py") {
                debug!(file = %file, "not checking non-python file");
                return Ok(Vec::new());
            }
            let bytes = std::fs::read(file).with_context(|| format!("read {}", file))?;
            let text = String::from_utf8_lossy(&bytes);
            edges_for_source(app_root, file, &text)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(per_file.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn local_modules_are_packages_or_files_under_root() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("pkg/__init__.py"), "");
        write_file(&root.join("settings.py"), "");

        assert!(is_local_module(&root, "pkg.db"));
        assert!(is_local_module(&root, "pkg"));
        assert!(is_local_module(&root, "settings"));
        assert!(!is_local_module(&root, "requests.adapters"));
        assert!(!is_local_module(&root, ""));
        assert!(!is_local_module(&root, ".pkg"));
    }

    #[test]
    fn build_edges_marks_locality_and_skips_relative() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(
            &root.join("pkg/worker.py"),
            "from pkg.db import conn\nfrom requests import get\nfrom . import sibling\n",
        );
        write_file(&root.join("pkg/db.py"), "conn = None\n");
        write_file(&root.join("pkg/readme.txt"), "from pkg.db import conn\n");

        let files = vec![
            root.join("pkg/db.py"),
            root.join("pkg/readme.txt"),
            root.join("pkg/worker.py"),
        ];
        let edges = build_edges(&root, &files).expect("edges");

        assert_eq!(
            edges,
            vec![
                ImportEdge {
                    importing_file: root.join("pkg/worker.py"),
                    imported_module: Some("pkg.db".to_string()),
                    is_local: true,
                    line: Some(1),
                },
                ImportEdge {
                    importing_file: root.join("pkg/worker.py"),
                    imported_module: Some("requests".to_string()),
                    is_local: false,
                    line: Some(2),
                },
            ]
        );
    }

    #[test]
    fn unreadable_source_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = build_edges(&root, &[root.join("missing.py")]).unwrap_err();
        assert!(err.to_string().contains("missing.py"));
    }

    #[test]
    fn syntax_error_fails_the_build() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("pkg/ok.py"), "from pkg.db import conn\n");
        write_file(&root.join("pkg/broken.py"), "def f(:\n    pass\n");

        let err = build_edges(&root, &[root.join("pkg/ok.py"), root.join("pkg/broken.py")])
            .unwrap_err();
        assert!(format!("{err:#}").contains("broken.py"));
    }
}
