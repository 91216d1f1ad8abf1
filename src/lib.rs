//! # bmpforge
//!
//! Synthesizes BMP test images across the format's many historical
//! variants: 1/4/8/16/24/32 bits per pixel, indexed and direct color,
//! uncompressed and bitfield-masked channels, bottom-up and top-down row
//! order, v3/v4/v5 DIB headers.
//!
//! The engine turns a procedural continuous-color image (the built-in
//! [`TestCard`], or any [`ColorSource`]) plus a declarative [`BmpSpec`]
//! into a byte-exact BMP file: linear-light ordered dithering, per-depth
//! bit packing, palette construction, and all the offset/size bookkeeping
//! the format's headers require.
//!
//! Output is bit-for-bit reproducible for a fixed spec and source — these
//! files exist to be compared against decoder behavior. Some catalog
//! variants are *deliberately* malformed (oversize palette, out-of-range
//! indices): the engine lays out exactly what the spec describes and never
//! validates it.
//!
//! ## Non-Goals
//!
//! - BMP decoding
//! - RLE and embedded JPEG/PNG compression
//! - Color management beyond the fixed sRGB header tag
//!
//! ## Usage
//!
//! ```
//! use bmpforge::{BmpSpec, TestCard, encode_bmp};
//! use enough::Unstoppable;
//!
//! let spec = BmpSpec::rgb24();
//! let file = encode_bmp(&spec, &TestCard::opaque(), Unstoppable)?;
//! assert_eq!(&file[0..2], b"BM");
//! # Ok::<(), bmpforge::ForgeError>(())
//! ```
//!
//! The full bmpsuite-style variant list lives in [`catalog`]; the
//! `bmpforge` binary (feature `std`) writes it to `g/`, `q/`, `b/`
//! directories on disk.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod catalog;
mod color;
mod dither;
mod encode;
mod error;
mod header;
mod packer;
mod palette;
mod source;
mod spec;

// Re-exports
pub use color::{scale_to_int, srgb_to_linear};
pub use dither::{THRESHOLDS, dither_threshold, ordered_dither};
pub use encode::encode_bmp;
pub use enough::{Stop, Unstoppable};
pub use error::ForgeError;
pub use source::{ColorSource, TestCard};
pub use spec::{
    BitDepth, BmpSpec, ChannelMasks, ChannelWidths, Compression, HeaderVersion, Layout,
    MonoPalette,
};
