#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding and decoding again must reproduce the
    // document exactly (headers, padding, and pixels).
    let Ok(doc) = bmpedit::Document::from_bytes(data) else {
        return;
    };

    let reencoded = doc.to_bytes();
    let doc2 = bmpedit::Document::from_bytes(&reencoded)
        .expect("re-encoded data failed to decode");
    assert_eq!(doc, doc2, "roundtrip mismatch");
});
