//! The `check` use case: scan sources, evaluate policies and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use embargo_domain::report::DomainReport;
use embargo_repo::PolicyStore;
use embargo_types::{
    EmbargoData, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict, saturating_count,
};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Directory module names are resolved against. Must exist.
    pub app_root: &'a Utf8Path,
    /// Files or directories to check, relative to `app_root` (absolute paths also work).
    pub targets: &'a [String],
    /// Extra exclusion globs, matched against root-relative paths.
    pub excludes: &'a [String],
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ReportEnvelope,
}

/// Run the check use case: discover sources, extract imports, evaluate policies, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let app_root = input
        .app_root
        .canonicalize_utf8()
        .with_context(|| format!("app root does not exist: {}", input.app_root))?;
    if !app_root.is_dir() {
        anyhow::bail!("app root is not a directory: {}", app_root);
    }

    let files = embargo_repo::discover_sources(&app_root, input.targets, input.excludes)
        .context("discover source files")?;
    debug!(count = files.len(), "discovered source files");

    let edges = embargo_repo::build_edges(&app_root, &files).context("extract imports")?;

    let store = PolicyStore::new(app_root.clone());
    let DomainReport {
        verdict,
        import_violations,
        export_violations,
        edges_checked,
    } = embargo_domain::evaluate(&edges, &app_root, &store).context("evaluate policies")?;

    let data = EmbargoData {
        files_scanned: saturating_count(files.len()),
        edges_checked,
        policies_loaded: saturating_count(store.loaded_count()),
        import_violations: saturating_count(import_violations.len()),
        export_violations: saturating_count(export_violations.len()),
    };
    info!(
        files = data.files_scanned,
        edges = data.edges_checked,
        policies = data.policies_loaded,
        import_violations = data.import_violations,
        export_violations = data.export_violations,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "import-embargo".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        data,
        import_violations,
        export_violations,
    };

    Ok(CheckOutput { report })
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
