//! Fuzz target for top-level `from ... import` extraction.
//!
//! Goal: parsing should **never panic**, whatever the bytes (sources are read lossily).
//! Syntax errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_import_extractor
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = embargo_repo::fuzz::extract_imports(&text);
});
