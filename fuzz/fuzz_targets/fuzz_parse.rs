#![no_main]
use libfuzzer_sys::fuzz_target;
use initool::{Options, decode_from_str, parse};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let permissive = parse(s);
        let opts = Options {
            strict: true,
            ..Options::default()
        };
        // strict mode must agree with permissive mode whenever it succeeds
        if let Ok(strict) = decode_from_str(s, &opts) {
            assert_eq!(strict, permissive);
        }
    }
});
