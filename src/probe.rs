//! Magic-byte sniffing.

use std::io::{Read, Seek, SeekFrom};

/// Whether the first two bytes look like a PFM file (`P` then `F` or `f`).
pub fn probe_bytes(data: &[u8]) -> bool {
    matches!(data, [b'P', b'F' | b'f', ..])
}

/// Check whether `reader` holds a PFM file.
///
/// Reads at most two bytes and always seeks back to where the reader started,
/// so several probes can run against the same stream. Read and seek failures
/// count as "not PFM".
///
/// The reader is restored to its entry position, not rewound to offset 0, so a
/// reader that starts mid-stream is probed (and left) at that offset.
pub fn probe<R: Read + Seek + ?Sized>(reader: &mut R) -> bool {
    let Ok(start) = reader.stream_position() else {
        return false;
    };

    let mut magic = [0u8; 2];
    let result = read_up_to(reader, &mut magic) == magic.len() && probe_bytes(&magic);

    if let Err(e) = reader.seek(SeekFrom::Start(start)) {
        log::warn!("failed to rewind stream after PFM probe: {e}");
    }
    result
}

fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> usize {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(_) => break,
        }
    }
    filled
}
