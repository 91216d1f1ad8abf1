//! Color-table construction for indexed formats.

use crate::color::scale_to_int;
use crate::spec::{BitDepth, BmpSpec, Layout, MonoPalette};

/// Write the color table into `out` at its palette offset.
///
/// Entries are 4 bytes each in B,G,R,reserved order. The 8-bit table must
/// mirror the packer's R6G7B6 index ordering exactly; a decoder looking up
/// a packed index lands on the color the quantizer meant.
pub(crate) fn write_palette(spec: &BmpSpec, layout: &Layout, out: &mut [u8]) {
    let offs = 14 + layout.header_size + layout.mask_block_size;
    match spec.depth {
        BitDepth::Pal8 => {
            // Entry for a given (r, g, b) is r + g*6 + b*42. Requested
            // entries past index 255 keep their reserved file space but
            // are never written.
            for i in 0..spec.palette_entries.min(256) {
                let r = i % 6;
                let g = (i % 42) / 6;
                let b = i / 42;
                let e = offs + 4 * i as usize;
                out[e + 2] = scale_to_int(f64::from(r) / 5.0, 255) as u8;
                out[e + 1] = scale_to_int(f64::from(g) / 6.0, 255) as u8;
                out[e] = scale_to_int(f64::from(b) / 5.0, 255) as u8;
            }
        }
        BitDepth::Pal4 => {
            // Entry for a given (r, g, b) is r + g*2 + b*6.
            for i in 0..spec.palette_entries {
                let r = i % 2;
                let g = (i % 6) / 2;
                let b = i / 6;
                let e = offs + 4 * i as usize;
                out[e + 2] = scale_to_int(f64::from(r) / 1.0, 255) as u8;
                out[e + 1] = scale_to_int(f64::from(g) / 2.0, 255) as u8;
                out[e] = scale_to_int(f64::from(b) / 1.0, 255) as u8;
            }
        }
        BitDepth::Mono => write_mono(spec, offs, out),
        BitDepth::Rgb16 | BitDepth::Rgb24 | BitDepth::Rgb32 => {
            // "Suggested" palette for direct-color depths: a simple gray
            // progression. Purely advisory; decoders are free to ignore it.
            for i in 0..spec.palette_entries {
                let e = offs + 4 * i as usize;
                let v = i.wrapping_mul(15) as u8;
                out[e + 2] = v;
                out[e + 1] = v;
                out[e] = v;
            }
        }
    }
}

fn write_mono(spec: &BmpSpec, offs: usize, out: &mut [u8]) {
    if spec.palette_entries == 2 {
        match spec.mono_palette {
            MonoPalette::WhiteBlack => {
                out[offs..offs + 3].copy_from_slice(&[255, 255, 255]);
            }
            MonoPalette::BlueGreen => {
                out[offs..offs + 3].copy_from_slice(&[255, 64, 64]);
                out[offs + 4..offs + 7].copy_from_slice(&[64, 255, 64]);
            }
            _ => {
                out[offs + 4..offs + 7].copy_from_slice(&[255, 255, 255]);
            }
        }
    } else {
        // Single-entry variant: one blue-ish color.
        out[offs..offs + 3].copy_from_slice(&[255, 64, 64]);
    }
}
