//! Fuzz target for segment-aligned prefix matching.
//!
//! Goal: `PrefixSet::contains` agrees with a naive per-entry check for any entries and
//! candidate.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_prefix_set
//! ```

#![no_main]

use arbitrary::Arbitrary;
use embargo_domain::PrefixSet;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PrefixInput {
    entries: Vec<String>,
    candidate: String,
}

fn naive_contains(entries: &[String], candidate: &str) -> bool {
    entries.iter().any(|p| {
        candidate == p
            || candidate
                .strip_prefix(p.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

fuzz_target!(|input: PrefixInput| {
    if input.entries.len() > 64 || input.candidate.len() > 512 {
        return;
    }

    let set = PrefixSet::from_entries(input.entries.iter().cloned());
    assert_eq!(
        set.contains(&input.candidate),
        naive_contains(&input.entries, &input.candidate),
        "entries={:?} candidate={:?}",
        input.entries,
        input.candidate
    );
});
