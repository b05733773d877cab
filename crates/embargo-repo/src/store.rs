//! Filesystem-backed policy resolution with a run-scoped cache.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use camino::{Utf8Path, Utf8PathBuf};
use embargo_domain::{Config, PolicyError, PolicyResolver, parse_policy_json};
use embargo_types::ids::POLICY_FILE_NAME;
use tracing::debug;

/// Resolves the nearest `__embargo__.json` at or above a directory, up to `root`.
///
/// Parsed policies are cached by policy file path for the lifetime of the store and are never
/// invalidated. Safe to share across threads: the write lock covers "check again, else parse and
/// insert", so a policy file is parsed at most once.
#[derive(Debug)]
pub struct PolicyStore {
    root: Utf8PathBuf,
    cache: RwLock<BTreeMap<Utf8PathBuf, Arc<Config>>>,
}

impl PolicyStore {
    /// `root` should be absolute (the app layer canonicalizes it).
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Number of distinct policy files parsed so far.
    pub fn loaded_count(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn cached(&self, policy_path: &Utf8Path) -> Option<Arc<Config>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(policy_path)
            .cloned()
    }

    fn load(&self, policy_path: &Utf8Path) -> Result<Arc<Config>, PolicyError> {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(cfg) = cache.get(policy_path) {
            return Ok(Arc::clone(cfg));
        }

        let text = std::fs::read_to_string(policy_path).map_err(|source| PolicyError::Read {
            path: policy_path.to_path_buf(),
            source,
        })?;
        let cfg = Arc::new(parse_policy_json(policy_path, &text)?);
        debug!(policy = %policy_path, "loaded policy");

        cache.insert(policy_path.to_path_buf(), Arc::clone(&cfg));
        Ok(cfg)
    }
}

impl PolicyResolver for PolicyStore {
    fn resolve(&self, directory: &Utf8Path) -> Result<Option<Arc<Config>>, PolicyError> {
        let mut dir = directory;
        loop {
            if !dir.starts_with(&self.root) {
                return Ok(None);
            }

            let candidate = dir.join(POLICY_FILE_NAME);
            if let Some(cfg) = self.cached(&candidate) {
                return Ok(Some(cfg));
            }
            if candidate.is_file() {
                return self.load(&candidate).map(Some);
            }

            if dir == self.root {
                return Ok(None);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Ok(None),
            }
        }
    }
}
