//! Fuzz target: front-matter splitting on arbitrary input.
//!
//! Split errors are expected on most inputs; panics and out-of-bounds
//! slices are not.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok((front, body)) = hunt_core::front_matter::split(input) {
            // Both slices must come from the input, with the markers
            // accounting for the difference.
            assert!(front.len() + body.len() <= input.len());
            assert!(input.contains(front));
            assert!(input.ends_with(body));
        }
    }
});
