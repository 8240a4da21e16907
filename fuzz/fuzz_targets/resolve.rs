#![no_main]

use libfuzzer_sys::fuzz_target;
use ohmic_notation::{Quantity, abbreviate, decode_shorthand};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for quantity in Quantity::ALL {
            let Ok(value) = quantity.parse(s) else {
                continue;
            };
            // an overflowing digit run parses to inf, which abbreviates to "inf"
            if !value.is_finite() {
                continue;
            }
            let text = abbreviate(value);
            assert!(
                decode_shorthand(&text, &[]).is_ok(),
                "{quantity} value {value} abbreviated to undecodable '{text}'"
            );
        }
    }
});
