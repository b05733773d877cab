//! Stable identifiers for checks and violation codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_EMBARGO_IMPORT: &str = "embargo.import";
pub const CHECK_EMBARGO_EXPORT: &str = "embargo.export";

// Codes: embargo.import
pub const CODE_IMPORT_NOT_ALLOWED: &str = "import_not_allowed";

// Codes: embargo.export
pub const CODE_EXPORT_NOT_ALLOWED: &str = "export_not_allowed";

/// Name of the per-directory policy file.
pub const POLICY_FILE_NAME: &str = "__embargo__.json";
