#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenpnm::ImageInfo::from_bytes(data);
    let Ok(mut raster) = zenpnm::decode(data, enough::Unstoppable) else {
        return;
    };

    // Transforms on whatever decoded must not panic either
    raster.invert();
    raster.flip();
    raster.flop();
    let _ = raster.rotate_90_cw();
    let _ = raster.to_graymap();
    let _ = raster.to_bitmap();
});
