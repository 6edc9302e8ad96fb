#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use linkint_core::BigInt;

fn decimal(bytes: &[u8]) -> String {
    let text: String = bytes.iter().map(|b| char::from(b'0' + b % 10)).collect();
    if text.is_empty() {
        "0".to_string()
    } else {
        text
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte splits the rest into two operands, capped for speed.
    let split = usize::from(data[0]).min(data.len() - 1);
    let rest = &data[1..];
    let (a, b) = rest.split_at(split.min(rest.len()));
    let (a, b) = (decimal(&a[..a.len().min(200)]), decimal(&b[..b.len().min(200)]));

    let x: BigInt = a.parse().unwrap();
    let y: BigInt = b.parse().unwrap();
    let rx: BigUint = a.parse().unwrap();
    let ry: BigUint = b.parse().unwrap();

    assert_eq!((&x + &y).to_string(), (&rx + &ry).to_string(), "{a} + {b}");
    assert_eq!((&x * &y).to_string(), (&rx * &ry).to_string(), "{a} * {b}");
    assert_eq!(x.compare(&y), rx.cmp(&ry), "{a} cmp {b}");
    if rx >= ry {
        assert_eq!((&x - &y).to_string(), (&rx - &ry).to_string(), "{a} - {b}");
    } else {
        assert!((&x - &y).is_zero(), "{a} - {b} should saturate");
        assert!(x.checked_sub(&y).is_none());
    }
});
