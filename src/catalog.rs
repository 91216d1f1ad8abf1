//! The standard variant catalog: every file the suite produces, with its
//! conformance class.

use alloc::vec::Vec;

use crate::spec::{BmpSpec, ChannelMasks, HeaderVersion, MonoPalette};

/// How conformant a variant is, and which output directory it lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conformance {
    /// Well-formed; every decoder should handle it.
    Good,
    /// Unusual but arguably legal; decoders may reasonably differ.
    Questionable,
    /// Deliberately malformed; decoders should fail gracefully.
    Bad,
}

impl Conformance {
    /// Output subdirectory for this class.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Good => "g",
            Self::Questionable => "q",
            Self::Bad => "b",
        }
    }
}

/// One catalog entry: a file name and the spec that produces it.
#[derive(Clone, Debug)]
pub struct Variant {
    pub name: &'static str,
    pub conformance: Conformance,
    pub spec: BmpSpec,
}

fn variant(name: &'static str, conformance: Conformance, spec: BmpSpec) -> Variant {
    Variant {
        name,
        conformance,
        spec,
    }
}

/// The full suite, in catalog order.
pub fn catalog() -> Vec<Variant> {
    use Conformance::{Bad, Good, Questionable};

    let mut v = Vec::new();

    // ── Indexed ─────────────────────────────────────────────────────────
    v.push(variant("pal8.bmp", Good, BmpSpec::pal8()));
    v.push(variant(
        "pal8oversizepal.bmp",
        Questionable,
        // Asks for more entries than 8 bits can address; the palette
        // space is reserved but entries past 255 stay unwritten.
        BmpSpec::pal8().with_palette_entries(300),
    ));
    v.push(variant(
        "pal8badindex.bmp",
        Bad,
        // Palette shorter than the indices the quantizer emits.
        BmpSpec::pal8().with_palette_entries(100),
    ));
    v.push(variant(
        "pal8topdown.bmp",
        Questionable,
        BmpSpec::pal8().with_top_down(),
    ));
    v.push(variant("pal4.bmp", Good, BmpSpec::pal4()));
    v.push(variant("pal1.bmp", Good, BmpSpec::mono()));
    v.push(variant(
        "pal1wb.bmp",
        Good,
        BmpSpec::mono().with_mono_palette(MonoPalette::WhiteBlack),
    ));
    v.push(variant(
        "pal1bg.bmp",
        Good,
        BmpSpec::mono().with_mono_palette(MonoPalette::BlueGreen),
    ));
    v.push(variant(
        "pal1p1.bmp",
        Questionable,
        BmpSpec::mono()
            .with_palette_entries(1)
            .with_mono_palette(MonoPalette::SingleBlue),
    ));

    // ── 16-bit ──────────────────────────────────────────────────────────
    v.push(variant("rgb16.bmp", Good, BmpSpec::rgb16()));
    v.push(variant(
        "rgb16-565.bmp",
        Good,
        BmpSpec::rgb16().with_bitfields(ChannelMasks {
            r: 0x0000_f800,
            g: 0x0000_07e0,
            b: 0x0000_001f,
            a: 0,
        }),
    ));
    v.push(variant(
        "rgba16-4444.bmp",
        Questionable,
        BmpSpec::rgb16()
            .with_version(HeaderVersion::V5)
            .with_alpha()
            .with_bitfields(ChannelMasks {
                r: 0x0000_0f00,
                g: 0x0000_00f0,
                b: 0x0000_000f,
                a: 0x0000_f000,
            }),
    ));
    v.push(variant(
        "rgb16-231.bmp",
        Questionable,
        // Absurdly narrow channels; dithering keeps the card recognizable.
        BmpSpec::rgb16()
            .with_dither()
            .with_bitfields(ChannelMasks {
                r: 0x0000_0030,
                g: 0x0000_000e,
                b: 0x0000_0001,
                a: 0,
            }),
    ));

    // ── 24/32-bit ───────────────────────────────────────────────────────
    v.push(variant("rgb24.bmp", Good, BmpSpec::rgb24()));
    v.push(variant(
        "rgb24pal.bmp",
        Good,
        // Suggested palette alongside direct color.
        BmpSpec::rgb24().with_palette_entries(17),
    ));
    v.push(variant("rgb32.bmp", Good, BmpSpec::rgb32()));
    v.push(variant(
        "rgb32-111110.bmp",
        Questionable,
        BmpSpec::rgb32().with_bitfields(ChannelMasks {
            r: 0xffe0_0000,
            g: 0x001f_fc00,
            b: 0x0000_03ff,
            a: 0,
        }),
    ));
    v.push(variant(
        "rgba32.bmp",
        Questionable,
        BmpSpec::rgb32()
            .with_version(HeaderVersion::V5)
            .with_alpha()
            .with_bitfields(ChannelMasks {
                r: 0x00ff_0000,
                g: 0x0000_ff00,
                b: 0x0000_00ff,
                a: 0xff00_0000,
            }),
    ));

    v
}
