#![no_main]
use libfuzzer_sys::fuzz_target;

use strscan_core::ctype::is_alnum;
use strscan_core::scan::range;

fuzz_target!(|data: &[u8]| {
    // Plain copy round-trips.
    let mut dest = vec![0u8; data.len()];
    let end = range::copy(&mut dest, data);
    assert_eq!(end, data.len());
    assert_eq!(&dest[..end], data);

    // Filtered copies never grow the input, keep only predicate
    // survivors, and reverse traversal mirrors forward traversal.
    let mut fwd = vec![0u8; data.len()];
    let mut rev = vec![0u8; data.len()];
    let fwd_end = range::copy_if(&mut fwd, data, is_alnum);
    let rev_end = range::copy_if_rev(&mut rev, data, is_alnum);

    assert_eq!(fwd_end, rev_end);
    assert!(fwd_end <= data.len());
    assert!(fwd[..fwd_end].iter().all(|&b| is_alnum(b)));

    let mut mirrored = fwd[..fwd_end].to_vec();
    mirrored.reverse();
    assert_eq!(&rev[..rev_end], &mirrored[..]);
});
