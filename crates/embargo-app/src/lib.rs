//! Use case orchestration for import-embargo.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use render::{OutputFormat, parse_output_format, render_report, serialize_report, write_report};
