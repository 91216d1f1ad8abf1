//! sRGB transfer function and integer scaling, shared by the quantizer,
//! packer, and palette builder.
//!
//! `libm` is used instead of std float intrinsics so that std and no_std
//! builds produce bit-identical files.

/// Convert an sRGB-encoded sample in [0,1] to linear light.
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        libm::pow((v + 0.055) / 1.055, 2.4)
    }
}

/// Scale a continuous value in [0,1] to an integer code in [0, max_code].
///
/// Rounds to nearest; out-of-range inputs clamp to the endpoints.
pub fn scale_to_int(v: f64, max_code: u32) -> u32 {
    let s = (0.5 + v * f64::from(max_code)) as i64;
    s.clamp(0, i64::from(max_code)) as u32
}

/// Linear-light luma of an sRGB triple (Rec. 709 primaries).
pub(crate) fn linear_luma(r: f64, g: f64, b: f64) -> f64 {
    srgb_to_linear(r) * 0.212655 + srgb_to_linear(g) * 0.715158 + srgb_to_linear(b) * 0.072187
}
