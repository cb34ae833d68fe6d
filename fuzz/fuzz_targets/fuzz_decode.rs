#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic
    let _ = bmpedit::Document::from_bytes(data);

    // Neither must a bounded decode
    let limits = bmpedit::Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let _ = bmpedit::Document::from_bytes_with_limits(data, &limits);
});
