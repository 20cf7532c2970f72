//! Fuzz target: YAML deserialization of puzzle metadata.
//!
//! Arbitrary bytes fed to the front-matter parser must never panic;
//! errors are expected and fine.

#![no_main]

use hunt_core::PuzzleMeta;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = serde_yaml_ng::from_str::<PuzzleMeta>(input);
    }
});
