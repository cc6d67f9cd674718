#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Probe must agree with the slice check and never move the stream
    let mut cursor = Cursor::new(data);
    assert_eq!(zenpfm::probe(&mut cursor), zenpfm::probe_bytes(data));
    assert_eq!(cursor.position(), 0);

    // Decode must never panic; cap allocations so huge headers fail fast
    let limits = zenpfm::Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    if let Ok(decoded) = zenpfm::DecodeRequest::new(cursor)
        .with_selector("r,g,b,a,y")
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    {
        let _ = decoded.image.to_rgba_f32();
    }
});
