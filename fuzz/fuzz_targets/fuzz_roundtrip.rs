#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, encoding without edits must reproduce the input
    let Ok(mut decoded) = Bitmap::decode(data.to_vec()) else {
        return;
    };
    assert_eq!(decoded.encode(), data, "unmodified roundtrip changed bytes");

    // A pixel array overlapping the header makes pixel edits rewrite
    // header fields; only check edits on files with a separate header
    if decoded.pixel_array_start() < 30 {
        return;
    }

    // Pixels written back must decode to the same pixels
    for px in decoded.pixels_mut() {
        px.r = px.r.wrapping_add(1);
    }
    let expected = decoded.pixels().to_vec();
    let Ok(decoded2) = Bitmap::decode(decoded.into_bytes()) else {
        panic!("re-encoded data failed to decode");
    };
    for (a, b) in expected.iter().zip(decoded2.pixels()) {
        assert_eq!((a.r, a.g, a.b), (b.r, b.g, b.b), "roundtrip pixel mismatch");
    }
});
