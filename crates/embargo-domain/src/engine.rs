use crate::checker::check_edge;
use crate::policy::{PolicyError, PolicyResolver};
use crate::report::DomainReport;
use camino::Utf8Path;
use embargo_types::{ImportEdge, Verdict, saturating_count};
use rayon::prelude::*;

/// Check every edge and aggregate the violations.
///
/// Edges are checked in parallel; the output keeps input order. The first policy error
/// aborts the whole evaluation.
pub fn evaluate<R>(
    edges: &[ImportEdge],
    root: &Utf8Path,
    resolver: &R,
) -> Result<DomainReport, PolicyError>
where
    R: PolicyResolver + Sync + ?Sized,
{
    let outcomes = edges
        .par_iter()
        .map(|edge| check_edge(edge, root, resolver))
        .collect::<Result<Vec<_>, _>>()?;

    let mut import_violations = Vec::new();
    let mut export_violations = Vec::new();
    for outcome in outcomes {
        import_violations.extend(outcome.import);
        export_violations.extend(outcome.export);
    }

    let verdict = if import_violations.is_empty() && export_violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    let edges_checked =
        saturating_count(edges.iter().filter(|e| e.checked_module().is_some()).count());

    Ok(DomainReport {
        verdict,
        import_violations,
        export_violations,
        edges_checked,
    })
}
