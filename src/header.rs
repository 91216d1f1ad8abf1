//! File header, DIB header, and standalone mask block emission.
//!
//! Nothing here validates the spec: the layout was already resolved, and a
//! spec describing a malformed file gets exactly the headers it asked for.
//! Generating non-conformant files from the same code path as conformant
//! ones is an intended use of the engine.

use crate::spec::{BmpSpec, Compression, HeaderVersion, Layout};

/// bV4CSType value for "this is sRGB data".
const CSTYPE_SRGB: u32 = 0x7352_4742;
/// bV5Intent value for perceptual rendering.
const INTENT_PERCEPTUAL: u32 = 4;

fn put_u16(out: &mut [u8], offs: usize, v: u16) {
    out[offs..offs + 2].copy_from_slice(&v.to_le_bytes());
}

fn put_u32(out: &mut [u8], offs: usize, v: u32) {
    out[offs..offs + 4].copy_from_slice(&v.to_le_bytes());
}

fn put_i32(out: &mut [u8], offs: usize, v: i32) {
    out[offs..offs + 4].copy_from_slice(&v.to_le_bytes());
}

/// 14-byte file header: magic, total file size, pixel-data offset. The
/// reserved fields in between stay zero.
pub(crate) fn write_file_header(layout: &Layout, out: &mut [u8]) {
    out[0] = b'B';
    out[1] = b'M';
    put_i32(out, 2, layout.file_size as i32);
    put_i32(out, 10, layout.bits_offset as i32);
}

/// DIB header, starting at offset 14.
pub(crate) fn write_dib_header(spec: &BmpSpec, layout: &Layout, out: &mut [u8]) {
    put_i32(out, 14, layout.header_size as i32);
    put_i32(out, 18, spec.width as i32);
    let height = if spec.top_down {
        -(spec.height as i32)
    } else {
        spec.height as i32
    };
    put_i32(out, 22, height);
    put_u16(out, 26, 1); // planes
    put_u16(out, 28, spec.depth.bits() as u16);
    put_u32(out, 30, spec.compression.code());
    put_i32(out, 34, layout.bits_size as i32);
    put_i32(out, 38, spec.ppm_x as i32);
    put_i32(out, 42, spec.ppm_y as i32);
    put_u32(out, 46, spec.palette_entries); // colors used
    put_u32(out, 50, 0); // colors important

    if spec.version >= HeaderVersion::V4 {
        if spec.compression == Compression::Bitfields && spec.alpha {
            // Masks live in the header itself; no standalone block.
            put_u32(out, 14 + 40, spec.masks.r);
            put_u32(out, 14 + 44, spec.masks.g);
            put_u32(out, 14 + 48, spec.masks.b);
            put_u32(out, 14 + 52, spec.masks.a);
        }
        put_u32(out, 14 + 56, CSTYPE_SRGB);
    }
    if spec.version >= HeaderVersion::V5 {
        put_u32(out, 14 + 108, INTENT_PERCEPTUAL);
    }
}

/// Standalone r/g/b mask block after the DIB header. Only emitted for
/// BI_BITFIELDS with a v3 header; later header versions embed the masks.
pub(crate) fn write_mask_block(spec: &BmpSpec, layout: &Layout, out: &mut [u8]) {
    if layout.mask_block_size != 12 {
        return;
    }
    let offs = 14 + layout.header_size;
    put_u32(out, offs, spec.masks.r);
    put_u32(out, offs + 4, spec.masks.g);
    put_u32(out, offs + 8, spec.masks.b);
}
