//! # zenfarbfeld
//!
//! Farbfeld decoder producing packed ARGB8888 pixel buffers.
//!
//! Farbfeld is an 8-byte magic (`"farbfeld"`), width and height as u32
//! big-endian, then row-major pixels of four u16 big-endian channels
//! (R, G, B, A). Decoding reduces each channel to 8 bits and packs it as
//! `A<<24 | R<<16 | G<<8 | B`, the layout compositing libraries call
//! `a8r8g8b8`.
//!
//! ## Channel reduction
//!
//! - [`ChannelReduction::Linear`] (default): `floor(v * 255 / 65535)`.
//! - [`ChannelReduction::HighByte`]: `v >> 8`, for output matching loaders
//!   that keep only the most significant byte.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Streaming or partial decode
//! - Color management
//!
//! ## Credits
//!
//! Header handling follows [zune-farbfeld](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).
//!
//! ## Usage
//!
//! ```no_run
//! use zenfarbfeld::{FarbfeldDecoder, FarbfeldError, Limits};
//!
//! let file = std::fs::File::open("image.ff")?;
//! let decoder = FarbfeldDecoder::new().with_limits(Limits {
//!     max_pixels: Some(64 * 1024 * 1024),
//!     ..Default::default()
//! });
//!
//! match decoder.decode(std::io::BufReader::new(file)) {
//!     Ok(image) => println!("{}x{}, stride {}", image.width, image.height, image.stride()),
//!     Err(e) if e.is_recoverable() => println!("not a farbfeld file"),
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), FarbfeldError>(())
//! ```

#![forbid(unsafe_code)]

mod decoder;
mod error;
mod header;
mod image;
mod limits;
mod pixel;
mod reader;
mod reduce;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// Re-exports
pub use decoder::FarbfeldDecoder;
pub use enough::{Stop, Unstoppable};
pub use error::FarbfeldError;
pub use header::{FarbfeldHeader, HEADER_SIZE, MAGIC, is_farbfeld, probe};
pub use image::DecodedImage;
pub use limits::Limits;
pub use pixel::{PixelRecord, pack_argb, unpack_argb};
pub use reduce::{ChannelReduction, reduce_high_byte, reduce_linear};

/// Decode farbfeld bytes with linear channel reduction.
pub fn decode_farbfeld(data: &[u8], stop: impl Stop) -> Result<DecodedImage, FarbfeldError> {
    FarbfeldDecoder::new().decode_stoppable(data, stop)
}

/// Open and decode a farbfeld file with linear channel reduction.
pub fn decode_farbfeld_file(path: impl AsRef<Path>) -> Result<DecodedImage, FarbfeldError> {
    let file = File::open(path)?;
    FarbfeldDecoder::new().decode(BufReader::new(file))
}
