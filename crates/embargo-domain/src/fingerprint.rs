use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - check_id
/// - code
/// - importing file
/// - imported module
pub fn fingerprint_for_violation(
    check_id: &str,
    code: &str,
    importing_file: &str,
    imported_module: &str,
) -> String {
    let canonical = [check_id, code, importing_file, imported_module].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
