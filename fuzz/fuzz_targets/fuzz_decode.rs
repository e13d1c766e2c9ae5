#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header parse and full decode must never panic
    let _ = zenbmp::parse_header(data);

    let limits = zenbmp::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let _ = zenbmp::DecodeRequest::new(data.to_vec())
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
