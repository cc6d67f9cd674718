//! Test-only PFM writer. The crate itself never encodes.

#![allow(dead_code)]

/// Build a PFM file from top-down interleaved `pixels`.
///
/// Rows are written bottom-up as the format requires; `scale`'s sign picks
/// the byte order.
pub fn encode_pfm(magic: &str, width: usize, height: usize, scale: f32, pixels: &[f32]) -> Vec<u8> {
    let channels = match magic {
        "Pf" => 1,
        "PF" => 3,
        "PF4" => 4,
        other => panic!("unknown magic {other}"),
    };
    assert_eq!(pixels.len(), width * height * channels);

    let mut out = format!("{magic}\n{width} {height}\n{scale}\n").into_bytes();
    let row_len = width * channels;
    for row in pixels.chunks_exact(row_len).rev() {
        for &v in row {
            if scale < 0.0 {
                out.extend_from_slice(&v.to_le_bytes());
            } else {
                out.extend_from_slice(&v.to_be_bytes());
            }
        }
    }
    out
}

pub fn noise_floats(len: usize) -> Vec<f32> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 8) as f32 / (1u32 << 24) as f32 * 100.0 - 50.0
        })
        .collect()
}
