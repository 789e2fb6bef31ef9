#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfarbfeld::{ChannelReduction, FarbfeldDecoder, Limits};

fuzz_target!(|data: &[u8]| {
    // Keep allocations bounded; the header can declare up to 2^64 pixels.
    let limits = Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };

    // Must never panic, whatever the input.
    for reduction in [ChannelReduction::Linear, ChannelReduction::HighByte] {
        let decoded = FarbfeldDecoder::new()
            .with_reduction(reduction)
            .with_limits(limits.clone())
            .decode(data);
        if let Ok(image) = decoded {
            assert_eq!(
                image.pixels().len(),
                image.width as usize * image.height as usize
            );
        }
    }

    let _ = zenfarbfeld::probe(data);
    let _ = zenfarbfeld::is_farbfeld(data);
});
