use crate::policy::{Config, PolicyError, PolicyResolver, parse_policy_json};
use camino::{Utf8Path, Utf8PathBuf};
use embargo_types::ImportEdge;
use embargo_types::ids::POLICY_FILE_NAME;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const ROOT: &str = "/app";

enum Entry {
    Parsed(Arc<Config>),
    Broken,
}

/// In-memory resolver with the same nearest-ancestor semantics as the filesystem store.
#[derive(Default)]
pub struct MapResolver {
    policies: BTreeMap<Utf8PathBuf, Entry>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a policy for `dir` (relative to [`ROOT`], `""` for the root itself).
    pub fn with_policy(mut self, dir: &str, json: &str) -> Self {
        let dir = abs_dir(dir);
        let path = dir.join(POLICY_FILE_NAME);
        let cfg = parse_policy_json(&path, json).expect("test policy must parse");
        self.policies.insert(dir, Entry::Parsed(Arc::new(cfg)));
        self
    }

    pub fn with_broken_policy(mut self, dir: &str) -> Self {
        self.policies.insert(abs_dir(dir), Entry::Broken);
        self
    }
}

impl PolicyResolver for MapResolver {
    fn resolve(&self, directory: &Utf8Path) -> Result<Option<Arc<Config>>, PolicyError> {
        let root = Utf8Path::new(ROOT);
        let mut dir = directory;
        loop {
            match self.policies.get(dir) {
                Some(Entry::Parsed(cfg)) => return Ok(Some(Arc::clone(cfg))),
                Some(Entry::Broken) => {
                    return Err(PolicyError::NotAnObject {
                        path: dir.join(POLICY_FILE_NAME),
                    });
                }
                None => {}
            }
            if dir == root || !dir.starts_with(root) {
                return Ok(None);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Ok(None),
            }
        }
    }
}

fn abs_dir(dir: &str) -> Utf8PathBuf {
    if dir.is_empty() {
        Utf8PathBuf::from(ROOT)
    } else {
        Utf8Path::new(ROOT).join(dir)
    }
}

/// A local edge from `file` (relative to [`ROOT`]) to `module`.
pub fn edge(file: &str, module: &str) -> ImportEdge {
    ImportEdge::local(Utf8Path::new(ROOT).join(file), module)
}
