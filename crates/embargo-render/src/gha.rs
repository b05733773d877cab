use crate::violation_message;
use embargo_types::{Direction, ReportEnvelope, Violation};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={path},line={line}::{message}`
pub fn render_github_annotations(report: &ReportEnvelope) -> Vec<String> {
    report
        .import_violations
        .iter()
        .map(|v| annotation(Direction::Import, v))
        .chain(
            report
                .export_violations
                .iter()
                .map(|v| annotation(Direction::Export, v)),
        )
        .collect()
}

fn annotation(direction: Direction, v: &Violation) -> String {
    let mut meta = format!("file={}", escape_property(v.importing_file.as_str()));
    if let Some(line) = v.line {
        meta.push_str(&format!(",line={line}"));
    }

    let message = escape_data(&format!(
        "[{}:{}] {} (allowed {}: {:?}; policy {})",
        direction.check_id(),
        direction.code(),
        violation_message(v),
        direction.allowed_label(),
        v.allowed,
        v.policy_path
    ));

    format!("::error {meta}::{message}")
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
