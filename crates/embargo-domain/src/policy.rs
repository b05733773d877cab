//! Policy files (`__embargo__.json`) and how they resolve.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::prefix::PrefixSet;

/// Effective rules of one policy file, governing its directory subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Policy file the rules were read from (diagnostics only).
    pub path: Utf8PathBuf,
    /// Modules files in this subtree may import.
    pub import_allow: PrefixSet,
    /// Importer modules allowed to import modules in this subtree.
    pub export_allow: PrefixSet,
    /// Importer modules that skip the export check entirely.
    pub bypass: PrefixSet,
}

/// Raw on-disk shape. Unknown keys are ignored; `null` is treated like an absent key.
#[derive(Debug, Default, Deserialize)]
struct PolicyFile {
    #[serde(default)]
    allowed_import_modules: Option<Vec<String>>,
    #[serde(default)]
    allowed_export_modules: Option<Vec<String>>,
    #[serde(default)]
    bypass_export_check_for_modules: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("read policy file {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse policy file {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("policy file {path} must contain a JSON object")]
    NotAnObject { path: Utf8PathBuf },
}

impl PolicyError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            PolicyError::Read { path, .. }
            | PolicyError::Parse { path, .. }
            | PolicyError::NotAnObject { path } => path,
        }
    }
}

/// Parse the contents of a policy file located at `path`.
pub fn parse_policy_json(path: &Utf8Path, text: &str) -> Result<Config, PolicyError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| PolicyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if !value.is_object() {
        return Err(PolicyError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    let file: PolicyFile = serde_json::from_value(value).map_err(|source| PolicyError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Config {
        path: path.to_path_buf(),
        import_allow: PrefixSet::allow_list(file.allowed_import_modules),
        export_allow: PrefixSet::allow_list(file.allowed_export_modules),
        bypass: PrefixSet::exemption_list(file.bypass_export_check_for_modules),
    })
}

/// Finds the policy governing a directory.
///
/// Implementations walk from `directory` up to the application root and return the nearest
/// policy, or `None` when no policy exists on that path. Resolution must be idempotent.
pub trait PolicyResolver {
    fn resolve(&self, directory: &Utf8Path) -> Result<Option<Arc<Config>>, PolicyError>;
}

impl<T: PolicyResolver + ?Sized> PolicyResolver for &T {
    fn resolve(&self, directory: &Utf8Path) -> Result<Option<Arc<Config>>, PolicyError> {
        (**self).resolve(directory)
    }
}
