use crate::violation_message;
use embargo_types::{Direction, ReportEnvelope, Verdict, Violation};

pub fn render_markdown(report: &ReportEnvelope) -> String {
    let mut out = String::new();

    out.push_str("# Import embargo report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files scanned: {}\n- Violations: {} import / {} export\n\n",
        verdict,
        report.data.files_scanned,
        report.data.import_violations,
        report.data.export_violations
    ));

    if report.violation_count() == 0 {
        out.push_str("No violations.\n");
        return out;
    }

    section(&mut out, Direction::Import, &report.import_violations);
    section(&mut out, Direction::Export, &report.export_violations);
    out
}

fn section(out: &mut String, direction: Direction, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }
    let title = match direction {
        Direction::Import => "## Import violations\n\n",
        Direction::Export => "## Export violations\n\n",
    };
    out.push_str(title);

    for v in violations {
        let location = match v.line {
            Some(line) => format!("`{}`:{}", v.importing_file, line),
            None => format!("`{}`", v.importing_file),
        };
        out.push_str(&format!(
            "- `{}` / `{}`: {} ({})\n",
            direction.check_id(),
            direction.code(),
            violation_message(v),
            location
        ));
        let allowed = if v.allowed.is_empty() {
            "(none)".to_string()
        } else {
            v.allowed
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!(
            "  - allowed {}: {}\n",
            direction.allowed_label(),
            allowed
        ));
        out.push_str(&format!("  - policy: `{}`\n", v.policy_path));
    }
    out.push('\n');
}
