#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpnm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce an identical raster
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    // Re-encode in the same format. Switching P6 -> P3 is not lossless:
    // plain pixmaps clamp samples above the max value on decode.
    let Ok(reencoded) = encode(&decoded, enough::Unstoppable) else {
        panic!("decoded raster failed to encode");
    };
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.size(), decoded2.size());
    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
});
