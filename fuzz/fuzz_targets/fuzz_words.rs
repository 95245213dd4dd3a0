#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: [u8; 14]| {
    let lo = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let mid = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let hi = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
    let negative = data[12] & 1 == 1;
    let scale = u32::from(data[13]) % 29;

    let amount = Decimal::from_parts(lo, mid, hi, negative, scale);
    assert!(lekha::amount_in_words(amount).ends_with(lekha::CURRENCY_SUFFIX));
    let _ = lekha::format_inr(amount);
});
