//! Per-edge import and export checks.

use camino::Utf8Path;
use embargo_types::{Direction, ImportEdge, Violation};

use crate::fingerprint::fingerprint_for_violation;
use crate::module_path::{module_to_path, path_to_module};
use crate::policy::{Config, PolicyError, PolicyResolver};
use crate::prefix::PrefixSet;

/// Outcome of checking one edge. At most one violation per direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeViolations {
    pub import: Option<Violation>,
    pub export: Option<Violation>,
}

impl EdgeViolations {
    pub fn is_clean(&self) -> bool {
        self.import.is_none() && self.export.is_none()
    }
}

/// Check one import edge in both directions.
///
/// Edges that are not local, or have no module, are skipped. Policy errors abort the check.
pub fn check_edge<R>(
    edge: &ImportEdge,
    root: &Utf8Path,
    resolver: &R,
) -> Result<EdgeViolations, PolicyError>
where
    R: PolicyResolver + ?Sized,
{
    let Some(module) = edge.checked_module() else {
        return Ok(EdgeViolations::default());
    };

    Ok(EdgeViolations {
        import: check_import(edge, module, resolver)?,
        export: check_export(edge, module, root, resolver)?,
    })
}

/// May the importing file import `module`? Governed by the importer's own policy.
fn check_import<R>(
    edge: &ImportEdge,
    module: &str,
    resolver: &R,
) -> Result<Option<Violation>, PolicyError>
where
    R: PolicyResolver + ?Sized,
{
    let Some(directory) = edge.importing_file.parent() else {
        return Ok(None);
    };
    let Some(config) = resolver.resolve(directory)? else {
        return Ok(None);
    };

    if config.import_allow.contains(module) {
        return Ok(None);
    }

    Ok(Some(violation(
        Direction::Import,
        edge,
        module,
        None,
        &config.import_allow,
        &config,
    )))
}

/// May `module` be imported by the importing file? Governed by the target module's policy.
fn check_export<R>(
    edge: &ImportEdge,
    module: &str,
    root: &Utf8Path,
    resolver: &R,
) -> Result<Option<Violation>, PolicyError>
where
    R: PolicyResolver + ?Sized,
{
    let target = module_to_path(module, root);
    let Some(directory) = target.parent() else {
        return Ok(None);
    };
    let Some(config) = resolver.resolve(directory)? else {
        return Ok(None);
    };

    let importer = path_to_module(&edge.importing_file, root).unwrap_or_default();

    // Bypass short-circuits the export list; an absent bypass list exempts nobody.
    if config.bypass.contains_listed(&importer) {
        return Ok(None);
    }
    if config.export_allow.contains(&importer) {
        return Ok(None);
    }

    Ok(Some(violation(
        Direction::Export,
        edge,
        module,
        Some(importer),
        &config.export_allow,
        &config,
    )))
}

fn violation(
    direction: Direction,
    edge: &ImportEdge,
    module: &str,
    importing_module: Option<String>,
    allowed: &PrefixSet,
    config: &Config,
) -> Violation {
    Violation {
        direction,
        importing_file: edge.importing_file.clone(),
        imported_module: module.to_string(),
        importing_module,
        allowed: allowed.entries(),
        policy_path: config.path.clone(),
        line: edge.line,
        fingerprint: Some(fingerprint_for_violation(
            direction.check_id(),
            direction.code(),
            edge.importing_file.as_str(),
            module,
        )),
    }
}
