#![no_main]
use libfuzzer_sys::fuzz_target;

use strscan_core::ctype::is_space;
use strscan_core::scan::{range, seq};

fuzz_target!(|data: &[u8]| {
    // length never exceeds the slice and stops at the first NUL.
    let len = seq::length(data);
    assert!(len <= data.len());
    assert!(data[..len].iter().all(|&b| b != 0));

    // Forward/backward whitespace scans stay in bounds and classify
    // the byte they land on.
    let logical = &data[..len];
    let fwd = range::find_non_space(logical);
    assert!(fwd <= logical.len());
    if fwd < logical.len() {
        assert!(!is_space(logical[fwd]));
        assert!(logical[..fwd].iter().all(|&b| is_space(b)));
    }

    let back = range::rfind_non_space(logical);
    assert!(back == 0 || back < logical.len());
    if back + 1 < logical.len() {
        assert!(logical[back + 1..].iter().all(|&b| is_space(b)));
    }

    // find agrees with a manual scan for an arbitrary target byte.
    if let Some((&target, rest)) = data.split_first() {
        let expected = rest
            .iter()
            .position(|&b| b == target)
            .unwrap_or(rest.len());
        assert_eq!(range::find(rest, target), expected);
    }
});
