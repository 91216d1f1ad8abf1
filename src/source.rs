//! Synthetic continuous-color test card.

use rgb::Rgba;

use crate::spec::BmpSpec;

/// A continuous-color image sampled per pixel by the encoder.
///
/// Implementations must be deterministic and side-effect-free for a fixed
/// (x, y): the encoder calls [`sample`](Self::sample) exactly once per
/// pixel, in row-major order (y outer, x inner), regardless of how rows
/// are stored in the output file. Dithering coherence depends on that
/// single-evaluation guarantee.
pub trait ColorSource {
    /// Color at (x, y), each component nominally in [0, 1].
    fn sample(&self, x: u32, y: u32) -> Rgba<f64>;
}

const LOGO_WIDTH: u32 = 78;
const LOGO_HEIGHT: u32 = 26;
const LOGO_X: u32 = 25;
const LOGO_Y: u32 = 19;

/// 78x26 "BMP" lettering. '1' is the outline, '2' the fill.
const LOGO: [&[u8; 78]; 26] = [
    b"11111111111111111111.......11....................11...11111111111111111111....",
    b"1111111111111111111111.....111..................111...1111111111111111111111..",
    b"11222222222222222222111....1111................1111...11222222222222222222111.",
    b"112222222222222222222111...11211..............11211...112222222222222222222111",
    b"112211111111111111122211...112211............112211...112211111111111111122211",
    b"112211111111111111112211...1122211..........1122211...112211111111111111112211",
    b"112211...........1112211...11222211........11222211...112211...........1112211",
    b"112211............112211...112212211......112212211...112211............112211",
    b"112211............112211...1122112211....1122112211...112211............112211",
    b"112211...........1112211...11221112211..11221112211...112211...........1112211",
    b"11221111111111111112211....112211112211112211112211...112211111111111111112211",
    b"1122111111111111112211.....112211.1122112211.112211...112211111111111111122211",
    b"112222222222222222211......112211..11222211..112211...112222222222222222222111",
    b"112222222222222222211......112211...112211...112211...11222222222222222222111.",
    b"1122111111111111112211.....112211....1111....112211...1122111111111111111111..",
    b"11221111111111111112211....112211.....11.....112211...11221111111111111111....",
    b"112211...........1112211...112211............112211...112211..................",
    b"112211............112211...112211............112211...112211..................",
    b"112211............112211...112211............112211...112211..................",
    b"112211...........1112211...112211............112211...112211..................",
    b"112211111111111111112211...112211............112211...112211..................",
    b"112211111111111111122211...112211............112211...112211..................",
    b"112222222222222222222111...112211............112211...112211..................",
    b"11222222222222222222111....112211............112211...112211..................",
    b"1111111111111111111111.....111111............111111...111111..................",
    b"11111111111111111111.......111111............111111...111111..................",
];

/// The standard test card: red, green, blue, and gray gradient bands with
/// a "BMP" logo overlay. Designed for the default 127x64 canvas; larger
/// canvases extend the gray band and clamp the ramps.
#[derive(Clone, Copy, Debug)]
pub struct TestCard {
    alpha: bool,
}

impl TestCard {
    /// Card for opaque targets: the logo fill is solid white.
    pub fn opaque() -> Self {
        Self { alpha: false }
    }

    /// Card for alpha targets: the logo fill exercises transparency — the
    /// top half is fully transparent green, the bottom half a red
    /// transparent-to-opaque gradient.
    pub fn with_alpha() -> Self {
        Self { alpha: true }
    }

    /// Card matching a spec's alpha flag.
    pub fn for_spec(spec: &BmpSpec) -> Self {
        Self { alpha: spec.alpha }
    }
}

impl ColorSource for TestCard {
    fn sample(&self, x: u32, y: u32) -> Rgba<f64> {
        if x >= LOGO_X && x < LOGO_X + LOGO_WIDTH && y >= LOGO_Y && y < LOGO_Y + LOGO_HEIGHT {
            match LOGO[(y - LOGO_Y) as usize][(x - LOGO_X) as usize] {
                b'1' => {
                    return Rgba {
                        r: 0.0,
                        g: 0.0,
                        b: 0.0,
                        a: 1.0,
                    };
                }
                b'2' => {
                    if self.alpha {
                        if y - LOGO_Y < LOGO_HEIGHT / 2 {
                            // Fully transparent green.
                            return Rgba {
                                r: 0.0,
                                g: 1.0,
                                b: 0.0,
                                a: 0.0,
                            };
                        }
                        // Red, fading in from transparent to opaque.
                        return Rgba {
                            r: 1.0,
                            g: 0.0,
                            b: 0.0,
                            a: 2.0 * f64::from(y - LOGO_Y) / f64::from(LOGO_HEIGHT) - 1.0,
                        };
                    }
                    return Rgba {
                        r: 1.0,
                        g: 1.0,
                        b: 1.0,
                        a: 1.0,
                    };
                }
                _ => {}
            }
        }

        // Gradient bands. Vertical ramps run bright-to-dark over the
        // 64-row canvas; the horizontal ramp repeats every 32 columns.
        let ramp = f64::from(x % 32) / 31.0;
        let (r, g, b) = if x < 32 {
            ((63.0 - f64::from(y)) / 63.0, ramp, ramp)
        } else if x < 64 {
            (ramp, (63.0 - f64::from(y)) / 63.0, ramp)
        } else if x < 96 {
            (ramp, ramp, (63.0 - f64::from(y)) / 63.0)
        } else {
            (
                (159.0 - f64::from(y)) / 255.0,
                (159.0 - f64::from(y)) / 255.0,
                (159.0 - f64::from(y) + f64::from(x % 32)) / 255.0,
            )
        };
        Rgba { r, g, b, a: 1.0 }
    }
}
