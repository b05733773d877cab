//! Segment-aligned dotted-prefix matching.

use std::collections::BTreeSet;

/// Separator between dotted module path segments.
pub const SEPARATOR: char = '.';

/// An immutable set of dotted module prefixes.
///
/// Every stored entry carries a trailing [`SEPARATOR`], and every query gets one appended
/// before lookup, so `"a.b"` matches `"a.b"` and `"a.b.c"` but never `"a.bc"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrefixSet {
    /// Matches everything. Only produced by [`PrefixSet::allow_list`] for an absent key.
    Unrestricted,
    /// Listed prefixes, each stored with a trailing [`SEPARATOR`] (`"a.b"` is kept as `"a.b."`).
    /// An empty set matches nothing.
    Prefixes(BTreeSet<String>),
}

impl PrefixSet {
    /// Allow-list semantics: an absent key means "no restriction".
    ///
    /// An explicit empty list is kept as an empty set and matches nothing.
    pub fn allow_list(entries: Option<Vec<String>>) -> Self {
        match entries {
            None => PrefixSet::Unrestricted,
            Some(entries) => PrefixSet::from_entries(entries),
        }
    }

    /// Exemption-list semantics: an absent key means "nothing is exempt".
    pub fn exemption_list(entries: Option<Vec<String>>) -> Self {
        PrefixSet::from_entries(entries.unwrap_or_default())
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PrefixSet::Prefixes(
            entries
                .into_iter()
                .map(|e| with_separator(e.as_ref()))
                .collect(),
        )
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, PrefixSet::Unrestricted)
    }

    /// True iff some stored prefix is equal to `candidate` or an ancestor of it.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            PrefixSet::Unrestricted => true,
            PrefixSet::Prefixes(stored) => contains_prefix_of(stored, candidate),
        }
    }

    /// Like [`PrefixSet::contains`], but an unrestricted set matches nothing.
    ///
    /// Used for exemption lists, where "no list" must never mean "everything is exempt".
    pub fn contains_listed(&self, candidate: &str) -> bool {
        match self {
            PrefixSet::Unrestricted => false,
            PrefixSet::Prefixes(stored) => contains_prefix_of(stored, candidate),
        }
    }

    /// Human-readable entries (trailing separator stripped), in sorted order.
    pub fn entries(&self) -> Vec<String> {
        match self {
            PrefixSet::Unrestricted => Vec::new(),
            PrefixSet::Prefixes(stored) => stored
                .iter()
                .map(|e| e.strip_suffix(SEPARATOR).unwrap_or(e).to_string())
                .collect(),
        }
    }
}

fn with_separator(entry: &str) -> String {
    let mut out = String::with_capacity(entry.len() + 1);
    out.push_str(entry);
    out.push(SEPARATOR);
    out
}

// Stored entries all end in the separator, so a stored entry is a prefix of the key exactly
// when it equals the key cut at one of the key's separators.
fn contains_prefix_of(stored: &BTreeSet<String>, candidate: &str) -> bool {
    if stored.is_empty() {
        return false;
    }
    let key = with_separator(candidate);
    key.match_indices(SEPARATOR)
        .any(|(idx, _)| stored.contains(&key[..=idx]))
}
