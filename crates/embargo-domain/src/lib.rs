//! Pure policy evaluation (no IO).
//!
//! Input: import edges extracted elsewhere, plus a [`PolicyResolver`] that knows where
//! policy files live.
//! Output: import/export violations + verdict.

#![forbid(unsafe_code)]

pub mod checker;
pub mod fingerprint;
pub mod module_path;
pub mod policy;
pub mod prefix;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checker::{EdgeViolations, check_edge};
pub use engine::evaluate;
pub use policy::{Config, PolicyError, PolicyResolver, parse_policy_json};
pub use prefix::PrefixSet;
