//! Test corpus: decode generated images of various patterns and sizes and
//! check every pixel against an independent reference conversion.

use zenfarbfeld::*;

fn encode(width: u32, height: u32, samples: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(16 + samples.len() * 2);
    out.extend_from_slice(b"farbfeld");
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_be_bytes());
    }
    out
}

fn checkerboard(w: usize, h: usize) -> Vec<u16> {
    let mut samples = vec![0u16; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            let px: [u16; 4] = if (x + y) % 2 == 0 {
                [0xFFFF, 0xC000, 0x4000, 0xFFFF]
            } else {
                [0x0000, 0x1234, 0xFEDC, 0x8000]
            };
            samples[off..off + 4].copy_from_slice(&px);
        }
    }
    samples
}

fn noise_pattern(w: usize, h: usize) -> Vec<u16> {
    let mut samples = vec![0u16; w * h * 4];
    let mut state: u32 = 0xDEAD_BEEF;
    for s in samples.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *s = state as u16;
    }
    samples
}

fn gradient(w: usize, h: usize) -> Vec<u16> {
    let mut samples = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            let r = (x * 65535 / w.max(2).saturating_sub(1)).min(65535) as u16;
            let g = (y * 65535 / h.max(2).saturating_sub(1)).min(65535) as u16;
            samples.extend_from_slice(&[r, g, r ^ g, 0xFFFF]);
        }
    }
    samples
}

/// Reference ARGB conversion written against the format description,
/// using float math instead of the decoder's integer path.
fn reference(samples: &[u16], reduction: ChannelReduction) -> Vec<u32> {
    let reduce = |v: u16| -> u32 {
        match reduction {
            ChannelReduction::HighByte => u32::from(v) / 256,
            _ => (f64::from(v) * 255.0 / 65535.0).floor() as u32,
        }
    };
    samples
        .chunks_exact(4)
        .map(|c| reduce(c[3]) << 24 | reduce(c[0]) << 16 | reduce(c[1]) << 8 | reduce(c[2]))
        .collect()
}

fn check(w: usize, h: usize, samples: &[u16]) {
    let data = encode(w as u32, h as u32, samples);
    for reduction in [ChannelReduction::Linear, ChannelReduction::HighByte] {
        let img = FarbfeldDecoder::new()
            .with_reduction(reduction)
            .decode(&data[..])
            .unwrap();
        assert_eq!(img.width as usize, w);
        assert_eq!(img.height as usize, h);
        assert_eq!(img.as_bytes().len(), w * h * 4);
        let expected = reference(samples, reduction);
        for (i, (got, want)) in img.pixels().iter().zip(&expected).enumerate() {
            assert_eq!(
                got, want,
                "{reduction:?} mismatch at pixel {i} ({}x{}): {got:#010x} vs {want:#010x}",
                i % w,
                i / w
            );
        }
    }
}

// ── Patterns ─────────────────────────────────────────────────────────

#[test]
fn checkerboard_8x6() {
    check(8, 6, &checkerboard(8, 6));
}

#[test]
fn noise_16x12() {
    check(16, 12, &noise_pattern(16, 12));
}

#[test]
fn gradient_33x17() {
    check(33, 17, &gradient(33, 17));
}

// ── Shapes ───────────────────────────────────────────────────────────

#[test]
fn single_row_and_column() {
    check(257, 1, &noise_pattern(257, 1));
    check(1, 257, &noise_pattern(1, 257));
}

#[test]
fn larger_than_one_read_chunk() {
    // 4096 records per read; make sure a chunk boundary falls mid-row.
    check(100, 50, &noise_pattern(100, 50));
}

#[test]
fn zero_width_and_height() {
    check(0, 10, &[]);
    check(10, 0, &[]);
}

// ── Truncation sweep ─────────────────────────────────────────────────

#[test]
fn every_truncation_point_fails_cleanly() {
    let (w, h) = (3usize, 2usize);
    let data = encode(w as u32, h as u32, &noise_pattern(w, h));
    for len in 0..data.len() {
        let err = FarbfeldDecoder::new().decode(&data[..len]).unwrap_err();
        match len {
            0..=7 => assert!(matches!(err, FarbfeldError::InvalidMagic), "len {len}"),
            8..=15 => assert!(matches!(err, FarbfeldError::TruncatedHeader), "len {len}"),
            _ => {
                let whole = (len - HEADER_SIZE) / 8;
                match err {
                    FarbfeldError::TruncatedPixelData { remaining } => {
                        assert_eq!(remaining as usize, w * h - whole, "len {len}")
                    }
                    other => panic!("len {len}: expected TruncatedPixelData, got {other:?}"),
                }
            }
        }
    }
    assert!(FarbfeldDecoder::new().decode(&data[..]).is_ok());
}
