use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ids;

/// Stable schema identifier for import-embargo reports.
pub const SCHEMA_REPORT_V1: &str = "import-embargo.report.v1";

/// Which side of an import edge a policy restricts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The importing file's policy does not allow the imported module.
    Import,
    /// The imported module's policy does not allow the importing module.
    Export,
}

impl Direction {
    pub fn check_id(self) -> &'static str {
        match self {
            Direction::Import => ids::CHECK_EMBARGO_IMPORT,
            Direction::Export => ids::CHECK_EMBARGO_EXPORT,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Direction::Import => ids::CODE_IMPORT_NOT_ALLOWED,
            Direction::Export => ids::CODE_EXPORT_NOT_ALLOWED,
        }
    }

    /// Label used in human-readable allow-list lines ("Allowed imports: ...").
    pub fn allowed_label(self) -> &'static str {
        match self {
            Direction::Import => "imports",
            Direction::Export => "exports",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub direction: Direction,
    pub importing_file: Utf8PathBuf,
    pub imported_module: String,

    /// Dotted module name of the importer, as matched against export/bypass lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importing_module: Option<String>,

    /// Allow-list of the governing policy, without the trailing separator.
    pub allowed: Vec<String>,
    pub policy_path: Utf8PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Stable identifier intended for dedup and trending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Report counter for `n` items, saturating at `u32::MAX`.
pub fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbargoData {
    pub files_scanned: u32,
    pub edges_checked: u32,
    pub policies_loaded: u32,
    pub import_violations: u32,
    pub export_violations: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub data: EmbargoData,
    pub import_violations: Vec<Violation>,
    pub export_violations: Vec<Violation>,
}

impl ReportEnvelope {
    pub fn violation_count(&self) -> usize {
        self.import_violations.len() + self.export_violations.len()
    }

    /// All violations, imports first.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.import_violations
            .iter()
            .chain(self.export_violations.iter())
    }
}
