#![no_main]

use libfuzzer_sys::fuzz_target;

use linkint_core::BigInt;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match text.parse::<BigInt>() {
        Ok(n) => {
            let rendered = n.to_string();
            let trimmed = text.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            assert_eq!(rendered, expected);
            assert_eq!(n.digit_count(), rendered.len());
        }
        Err(_) => assert!(text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit())),
    }
});
