//! Per-depth pixel quantization and bit packing.

use enough::Stop;
use rgb::Rgba;

use crate::color::{linear_luma, scale_to_int};
use crate::dither::{dither_threshold, ordered_dither};
use crate::error::ForgeError;
use crate::source::ColorSource;
use crate::spec::{BitDepth, BmpSpec, Compression, Layout, MonoPalette};

/// Quantize and pack every pixel into the bits section of `out`.
///
/// The source is sampled exactly once per pixel in row-major order,
/// whatever the storage orientation. `out` must start zeroed: the
/// sub-byte depths OR bits into place and never clear them.
pub(crate) fn write_pixels(
    spec: &BmpSpec,
    layout: &Layout,
    source: &dyn ColorSource,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), ForgeError> {
    for y in 0..spec.height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..spec.width {
            let c = source.sample(x, y);
            set_pixel(spec, layout, x, y, c, out);
        }
    }
    Ok(())
}

fn max_code(width: u32) -> u32 {
    (1u32 << width) - 1
}

fn set_pixel(spec: &BmpSpec, layout: &Layout, x: u32, y: u32, c: Rgba<f64>, out: &mut [u8]) {
    // The only place vertical orientation is decided.
    let row = if spec.top_down {
        y as usize * layout.row_stride
    } else {
        (spec.height - 1 - y) as usize * layout.row_stride
    };
    let base = layout.bits_offset + row;
    let w = spec.widths;

    match spec.depth {
        BitDepth::Rgb32 => {
            let offs = base + 4 * x as usize;
            if spec.compression == Compression::Bitfields && !spec.alpha {
                let r = scale_to_int(c.r, max_code(w.r));
                let g = scale_to_int(c.g, max_code(w.g));
                let b = scale_to_int(c.b, max_code(w.b));
                let u = (r << (w.g + w.b)) | (g << w.b) | b;
                out[offs..offs + 4].copy_from_slice(&u.to_le_bytes());
            } else {
                out[offs] = scale_to_int(c.b, 255) as u8;
                out[offs + 1] = scale_to_int(c.g, 255) as u8;
                out[offs + 2] = scale_to_int(c.r, 255) as u8;
                out[offs + 3] = if spec.alpha {
                    scale_to_int(c.a, 255) as u8
                } else {
                    0
                };
            }
        }
        BitDepth::Rgb24 => {
            let offs = base + 3 * x as usize;
            out[offs] = scale_to_int(c.b, 255) as u8;
            out[offs + 1] = scale_to_int(c.g, 255) as u8;
            out[offs + 2] = scale_to_int(c.r, 255) as u8;
        }
        BitDepth::Rgb16 => {
            let offs = base + 2 * x as usize;
            let (r, g, b) = if spec.dither {
                (
                    ordered_dither(c.r, max_code(w.r), x, y),
                    ordered_dither(c.g, max_code(w.g), x, y),
                    ordered_dither(c.b, max_code(w.b), x, y),
                )
            } else {
                (
                    scale_to_int(c.r, max_code(w.r)),
                    scale_to_int(c.g, max_code(w.g)),
                    scale_to_int(c.b, max_code(w.b)),
                )
            };
            let mut u = (r << (w.g + w.b)) | (g << w.b) | b;
            if spec.alpha {
                u |= scale_to_int(c.a, max_code(w.a)) << (w.r + w.g + w.b);
            }
            out[offs..offs + 2].copy_from_slice(&(u as u16).to_le_bytes());
        }
        BitDepth::Pal8 => {
            // R6G7B6 index; the palette builder mirrors this ordering.
            let offs = base + x as usize;
            let r = ordered_dither(c.r, 5, x, y);
            let g = ordered_dither(c.g, 6, x, y);
            let b = ordered_dither(c.b, 5, x, y);
            out[offs] = (r + g * 6 + b * 42) as u8;
        }
        BitDepth::Pal4 => {
            let offs = base + (x / 2) as usize;
            let r = ordered_dither(c.r, 1, x, y);
            let g = ordered_dither(c.g, 2, x, y);
            let b = ordered_dither(c.b, 1, x, y);
            let p = (r + g * 2 + b * 6) as u8;
            if x % 2 == 1 {
                out[offs] |= p;
            } else {
                out[offs] |= p << 4;
            }
        }
        BitDepth::Mono => {
            let offs = base + (x / 8) as usize;
            let luma = linear_luma(c.r, c.g, c.b);
            let mut bit = dither_threshold(luma, x, y);
            match spec.mono_palette {
                // Palette entry 0 is white, so bright pixels clear the bit.
                MonoPalette::WhiteBlack => bit = !bit,
                // Only index 0 exists.
                MonoPalette::SingleBlue => bit = false,
                _ => {}
            }
            if bit {
                out[offs] |= 1 << (7 - x % 8);
            }
        }
    }
}
