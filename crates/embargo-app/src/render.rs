//! Output selection and report artifact writing.

use anyhow::Context;
use camino::Utf8Path;
use embargo_types::ReportEnvelope;

/// What the CLI prints for a finished check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Classic console blocks; nothing for a clean run.
    Text,
    /// The JSON report envelope.
    Json,
    Markdown,
    /// GitHub Actions workflow commands, one per violation.
    Github,
}

pub fn parse_output_format(s: &str) -> anyhow::Result<OutputFormat> {
    match s {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "github" => Ok(OutputFormat::Github),
        other => anyhow::bail!("unknown output format: {other} (expected text|json|markdown|github)"),
    }
}

/// Render `report` in the requested format. Line-oriented formats end with a newline when
/// non-empty.
pub fn render_report(report: &ReportEnvelope, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Text => embargo_render::render_text(report),
        OutputFormat::Json => {
            let mut bytes = serialize_report(report)?;
            bytes.push(b'\n');
            String::from_utf8(bytes).context("report json is not utf-8")?
        }
        OutputFormat::Markdown => embargo_render::render_markdown(report),
        OutputFormat::Github => embargo_render::render_github_annotations(report)
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
    };
    Ok(text)
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Write the JSON report to `path`, creating parent directories.
pub fn write_report(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("write {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use embargo_types::{
        Direction, EmbargoData, SCHEMA_REPORT_V1, ToolMeta, Verdict, Violation,
    };
    use time::OffsetDateTime;

    fn sample_report() -> ReportEnvelope {
        let now = OffsetDateTime::UNIX_EPOCH;
        ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "import-embargo".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: now,
            finished_at: now,
            verdict: Verdict::Fail,
            data: EmbargoData {
                files_scanned: 1,
                edges_checked: 1,
                policies_loaded: 1,
                import_violations: 1,
                export_violations: 0,
            },
            import_violations: vec![Violation {
                direction: Direction::Import,
                importing_file: Utf8PathBuf::from("/app/pkg/worker.py"),
                imported_module: "pkg.db".to_string(),
                importing_module: None,
                allowed: vec!["pkg.api".to_string()],
                policy_path: Utf8PathBuf::from("/app/__embargo__.json"),
                line: Some(1),
                fingerprint: Some("abc".to_string()),
            }],
            export_violations: Vec::new(),
        }
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!(parse_output_format("text").expect("text"), OutputFormat::Text);
        assert_eq!(parse_output_format("md").expect("md"), OutputFormat::Markdown);
        assert_eq!(parse_output_format("github").expect("github"), OutputFormat::Github);
        assert!(parse_output_format("xml").is_err());
    }

    #[test]
    fn json_output_round_trips_the_envelope() {
        let report = sample_report();
        let text = render_report(&report, OutputFormat::Json).expect("render");
        assert!(text.ends_with('\n'));
        let parsed: ReportEnvelope = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn github_output_is_one_line_per_violation() {
        let text = render_report(&sample_report(), OutputFormat::Github).expect("render");
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("::error file=/app/pkg/worker.py,line=1::"));
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let path = root.join("artifacts/embargo/report.json");

        write_report(&path, &sample_report()).expect("write report");

        let text = std::fs::read_to_string(&path).expect("read report");
        assert!(text.contains("\"schema\": \"import-embargo.report.v1\""));
    }
}
