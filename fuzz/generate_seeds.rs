#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn farbfeld(width: u32, height: u32, samples: &[u16]) -> Vec<u8> {
    let mut out = b"farbfeld".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_be_bytes());
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 opaque red
    fs::write(format!("{dir}/red_1x1.ff"), farbfeld(1, 1, &[0xffff, 0, 0, 0xffff])).unwrap();

    // 2x2 mixed alpha
    let quad = [
        0xffff, 0, 0, 0xffff, //
        0, 0xffff, 0, 0x8000, //
        0, 0, 0xffff, 0, //
        0x8000, 0x8000, 0x8000, 0xffff,
    ];
    fs::write(format!("{dir}/quad_2x2.ff"), farbfeld(2, 2, &quad)).unwrap();

    // Zero-sized
    fs::write(format!("{dir}/empty_0x4.ff"), farbfeld(0, 4, &[])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"farbfeld").unwrap();
    fs::write(format!("{dir}/short_pixels.bin"), farbfeld(4, 4, &[1, 2, 3, 4, 5])).unwrap();
    fs::write(format!("{dir}/huge_dims.bin"), farbfeld(u32::MAX, u32::MAX, &[])).unwrap();
    fs::write(format!("{dir}/bad_magic.bin"), b"farbfelD\0\0\0\x01\0\0\0\x01").unwrap();

    println!("Generated seed corpus in {dir}/");
}
