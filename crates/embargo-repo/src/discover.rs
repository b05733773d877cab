use anyhow::Context;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Path components that are never scanned.
pub const DEFAULT_IGNORED: &[&str] = &["__pycache__", ".mypy_cache", ".DS_Store", ".ruff_cache"];

/// Collect the source files to check.
///
/// Behavior:
/// - each target is resolved against `app_root`
/// - a file target is taken as-is (non-Python files are skipped later, with a log line)
/// - a directory target is walked recursively for `*.py`, never entering [`DEFAULT_IGNORED`]
/// - `excludes` are globs matched against the root-relative path
/// - missing targets contribute nothing
pub fn discover_sources(
    app_root: &Utf8Path,
    targets: &[String],
    excludes: &[String],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let exclude_set = build_globset(excludes).context("compile exclude globset")?;
    let is_excluded = |path: &Utf8Path| {
        let rel = path.strip_prefix(app_root).unwrap_or(path);
        exclude_set.is_match(rel.as_str().replace('\\', "/"))
    };

    let mut out: Vec<Utf8PathBuf> = Vec::new();

    for target in targets {
        let start = join_target(app_root, target);

        if start.is_file() {
            if !is_excluded(&start) {
                out.push(start);
            }
            continue;
        }
        if !start.is_dir() {
            debug!(target = %start, "target does not exist; skipping");
            continue;
        }

        let walker = WalkDir::new(&start)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_ignored(e));
        for entry in walker {
            let entry = entry.with_context(|| format!("walk {}", start))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(path) = pathbuf_to_utf8(entry.into_path()) else {
                continue;
            };
            if path.extension() != Some("py") || is_excluded(&path) {
                continue;
            }
            out.push(path);
        }
    }

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

/// `app_root.join(target)` without `.` components, so reported paths stay clean.
fn join_target(app_root: &Utf8Path, target: &str) -> Utf8PathBuf {
    let mut path = app_root.to_path_buf();
    for component in Utf8Path::new(target).components() {
        if component != Utf8Component::CurDir {
            path.push(component.as_str());
        }
    }
    path
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| DEFAULT_IGNORED.contains(&name))
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid exclude glob: {p}"))?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
