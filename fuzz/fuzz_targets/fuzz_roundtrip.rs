#![no_main]
use libfuzzer_sys::fuzz_target;
use initool::{parse, stringify};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let first = parse(input);
        let encoded = stringify(&first);
        let second = parse(&encoded);
        if first != second {
            panic!(
                "INI roundtrip mismatch!\nInput: {:?}\nFirst parse: {:?}\nRe-encoded: {:?}\nSecond parse: {:?}",
                input, first, encoded, second
            );
        }
        // serialization is a fixed point after one pass
        assert_eq!(stringify(&second), encoded);
    }
});
