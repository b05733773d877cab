use embargo_types::{Direction, ReportEnvelope, Violation};

/// Console rendering: one block per violation, grouped by direction.
///
/// ```text
///  ❌ Import violations detected
///
/// /app/pkg/worker.py: pkg.db
/// Allowed imports: ['pkg.api']
/// Config file: /app/__embargo__.json
///
/// ```
///
/// Returns an empty string for a clean report.
pub fn render_text(report: &ReportEnvelope) -> String {
    let mut out = String::new();
    render_section(&mut out, Direction::Import, &report.import_violations);
    render_section(&mut out, Direction::Export, &report.export_violations);
    out
}

fn render_section(out: &mut String, direction: Direction, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }
    let title = match direction {
        Direction::Import => "Import",
        Direction::Export => "Export",
    };
    out.push_str(&format!(" ❌ {title} violations detected\n\n"));

    for v in violations {
        out.push_str(&format!("{}: {}\n", v.importing_file, v.imported_module));
        out.push_str(&format!(
            "Allowed {}: {}\n",
            direction.allowed_label(),
            python_list(&v.allowed)
        ));
        out.push_str(&format!("Config file: {}\n\n", v.policy_path));
    }
}

/// `['a', 'b']`, the way Python prints a list of strings.
fn python_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| python_str(s)).collect();
    format!("[{}]", quoted.join(", "))
}

// Python prefers single quotes, switching to double quotes when that avoids escaping.
fn python_str(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\");
    if s.contains('\'') && !s.contains('"') {
        format!("\"{escaped}\"")
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
