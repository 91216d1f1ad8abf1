//! Engine orchestration: one spec in, one complete BMP byte buffer out.

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::ForgeError;
use crate::source::ColorSource;
use crate::spec::{BmpSpec, Layout};
use crate::{header, packer, palette};

/// Encode the BMP file described by `spec`, sampling colors from `source`.
///
/// Pure given a fixed source: the same spec yields byte-identical output
/// on every run. The returned buffer is the complete file; persisting it
/// is the caller's business, and a failed write leaves it untouched.
pub fn encode_bmp(
    spec: &BmpSpec,
    source: &dyn ColorSource,
    stop: impl Stop,
) -> Result<Vec<u8>, ForgeError> {
    let layout = Layout::of(spec)?;
    let mut out = vec![0u8; layout.file_size];

    // File-section dependency order: mask block and palette sit between
    // the headers and the bits; the headers are filled in last.
    header::write_mask_block(spec, &layout, &mut out);
    palette::write_palette(spec, &layout, &mut out);
    packer::write_pixels(spec, &layout, source, &mut out, &stop)?;
    header::write_dib_header(spec, &layout, &mut out);
    header::write_file_header(&layout, &mut out);

    Ok(out)
}

impl BmpSpec {
    /// Convenience for [`encode_bmp`].
    pub fn encode(&self, source: &dyn ColorSource, stop: impl Stop) -> Result<Vec<u8>, ForgeError> {
        encode_bmp(self, source, stop)
    }
}
