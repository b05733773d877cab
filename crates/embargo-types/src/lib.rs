//! Stable DTOs and IDs used across the import-embargo workspace.
//!
//! This crate is intentionally boring:
//! - the import edges handed to the checker
//! - the violation records and report envelope it emits
//! - stable string IDs and codes

#![forbid(unsafe_code)]

pub mod edge;
pub mod ids;
pub mod report;

pub use edge::ImportEdge;
pub use report::{
    Direction, EmbargoData, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict, Violation,
    saturating_count,
};
