#![no_main]

use libfuzzer_sys::fuzz_target;
use markup::{CleanupConfig, MAX_PASSES, normalize_with_report};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };
    let config = CleanupConfig {
        cleanup: flags & 1 != 0,
        xhtml: flags & 2 != 0,
        semantics: flags & 4 != 0,
    };

    let first = normalize_with_report(input, &config);
    assert!(first.passes <= MAX_PASSES);
    if first.converged {
        let second = normalize_with_report(&first.markup, &config);
        assert_eq!(second.markup, first.markup, "not idempotent for {input:?}");
    }
});
