#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Gray 1x1, little-endian
    let mut gray = b"Pf\n1 1\n-1.0\n".to_vec();
    gray.extend_from_slice(&1.0f32.to_le_bytes());
    fs::write(format!("{dir}/gray_1x1.pfm"), gray).unwrap();

    // RGB 2x1, big-endian, scale 2
    let mut rgb = b"PF\n2 1\n2.0\n".to_vec();
    for v in [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0] {
        rgb.extend_from_slice(&v.to_be_bytes());
    }
    fs::write(format!("{dir}/rgb_2x1.pfm"), rgb).unwrap();

    // RGBA 1x2, CRLF header
    let mut rgba = b"PF4 1 2 -1\r\n".to_vec();
    for v in [0.0f32, 0.25, 0.5, 1.0, 1.0, 0.5, 0.25, 0.0] {
        rgba.extend_from_slice(&v.to_le_bytes());
    }
    fs::write(format!("{dir}/rgba_1x2.pfm"), rgba).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_pf.bin"), b"PF").unwrap();
    fs::write(format!("{dir}/no_newline.bin"), b"PF 1 1 1.0").unwrap();
    fs::write(format!("{dir}/zero_scale.bin"), b"Pf 1 1 0\n\0\0\0\0").unwrap();
    fs::write(format!("{dir}/zero_width.bin"), b"Pf 0 1 -1\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
