//! Declarative description of one BMP variant, plus its derived layout.

use crate::error::ForgeError;

/// Bits per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    /// 1-bit, two-entry palette.
    Mono,
    /// 4-bit indexed, two pixels per byte.
    Pal4,
    /// 8-bit indexed.
    Pal8,
    /// 16-bit packed channels.
    Rgb16,
    /// 24-bit B8G8R8.
    Rgb24,
    /// 32-bit direct or masked channels.
    Rgb32,
}

impl BitDepth {
    /// Bits per pixel as stored in the DIB header.
    pub fn bits(self) -> u32 {
        match self {
            Self::Mono => 1,
            Self::Pal4 => 4,
            Self::Pal8 => 8,
            Self::Rgb16 => 16,
            Self::Rgb24 => 24,
            Self::Rgb32 => 32,
        }
    }

    /// Whether stored pixels are palette indices rather than channel values.
    pub fn indexed(self) -> bool {
        self.bits() <= 8
    }
}

/// DIB header revision. Selects the header length and which fields exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeaderVersion {
    /// 40-byte BITMAPINFOHEADER.
    V3,
    /// 108-byte BITMAPV4HEADER: embedded masks and color-space tag.
    V4,
    /// 124-byte BITMAPV5HEADER: adds rendering intent.
    V5,
}

impl HeaderVersion {
    /// DIB header length in bytes.
    pub fn dib_size(self) -> usize {
        match self {
            Self::V3 => 40,
            Self::V4 => 108,
            Self::V5 => 124,
        }
    }
}

/// Value of the DIB compression field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    /// BI_RGB: fixed channel layout per bit depth.
    Rgb,
    /// BI_BITFIELDS: channel positions given by explicit masks.
    Bitfields,
}

impl Compression {
    pub(crate) fn code(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Bitfields => 3,
        }
    }
}

/// Per-channel bit masks, as written to the file under BI_BITFIELDS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelMasks {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

/// Per-channel code widths in bits. Unused for indexed depths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelWidths {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl ChannelWidths {
    pub(crate) fn rgb(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b, a: 0 }
    }
}

/// Which flavor of 1-bit palette to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonoPalette {
    /// Entry 1 white, entry 0 left zeroed (black).
    #[default]
    Standard,
    /// Entry 0 white; pixel bits are inverted to compensate.
    WhiteBlack,
    /// Entry 0 blue-ish, entry 1 green-ish.
    BlueGreen,
    /// A single blue-ish entry; every pixel is forced to index 0.
    SingleBlue,
}

/// Complete description of one BMP file to synthesize.
///
/// Construct with one of the per-depth constructors, adjust with the
/// `with_*` methods, and hand to [`crate::encode_bmp`]. A value describes
/// exactly one file and nothing mutates it during encoding, so derived
/// offsets can never go stale between configurations.
///
/// `Default` is the canonical 8-bit test image: 127x64, 252-entry palette,
/// v3 header, uncompressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpSpec {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
    pub palette_entries: u32,
    pub version: HeaderVersion,
    pub compression: Compression,
    pub masks: ChannelMasks,
    pub widths: ChannelWidths,
    /// Carry an alpha channel (direct 32-bit or masked formats).
    pub alpha: bool,
    /// Ordered-dither the 16-bit channels. Sub-byte depths always dither.
    pub dither: bool,
    /// Store rows top-down and negate the header height field.
    pub top_down: bool,
    pub mono_palette: MonoPalette,
    /// Horizontal resolution, pixels per meter.
    pub ppm_x: u32,
    /// Vertical resolution, pixels per meter.
    pub ppm_y: u32,
}

impl Default for BmpSpec {
    fn default() -> Self {
        Self {
            width: 127,
            height: 64,
            depth: BitDepth::Pal8,
            palette_entries: 252,
            version: HeaderVersion::V3,
            compression: Compression::Rgb,
            masks: ChannelMasks::default(),
            widths: ChannelWidths::default(),
            alpha: false,
            dither: false,
            top_down: false,
            mono_palette: MonoPalette::default(),
            // about 72 dpi
            ppm_x: 2835,
            ppm_y: 2835,
        }
    }
}

impl BmpSpec {
    fn with_depth(depth: BitDepth, palette_entries: u32, widths: ChannelWidths) -> Self {
        Self {
            depth,
            palette_entries,
            widths,
            ..Self::default()
        }
    }

    /// 8-bit indexed with the full 252-entry R6G7B6 palette.
    pub fn pal8() -> Self {
        Self::default()
    }

    /// 4-bit indexed with a 12-entry palette.
    pub fn pal4() -> Self {
        Self::with_depth(BitDepth::Pal4, 12, ChannelWidths::default())
    }

    /// 1-bit with a two-entry palette.
    pub fn mono() -> Self {
        Self::with_depth(BitDepth::Mono, 2, ChannelWidths::default())
    }

    /// 16-bit X1R5G5B5, the fixed BI_RGB layout for this depth.
    pub fn rgb16() -> Self {
        Self::with_depth(BitDepth::Rgb16, 0, ChannelWidths::rgb(5, 5, 5))
    }

    /// 24-bit B8G8R8.
    pub fn rgb24() -> Self {
        Self::with_depth(BitDepth::Rgb24, 0, ChannelWidths::rgb(8, 8, 8))
    }

    /// 32-bit B8G8R8X8.
    pub fn rgb32() -> Self {
        Self::with_depth(BitDepth::Rgb32, 0, ChannelWidths::rgb(8, 8, 8))
    }

    /// Switch to BI_BITFIELDS with explicit channel masks.
    ///
    /// Channel code widths are derived from the mask popcounts. With a v3
    /// header the masks go into a standalone 12-byte block after the DIB
    /// header; v4+ embeds them in the header itself.
    pub fn with_bitfields(mut self, masks: ChannelMasks) -> Self {
        self.compression = Compression::Bitfields;
        self.masks = masks;
        self.widths = ChannelWidths {
            r: masks.r.count_ones(),
            g: masks.g.count_ones(),
            b: masks.b.count_ones(),
            a: masks.a.count_ones(),
        };
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Request a palette size other than the depth's default. Values past
    /// what the depth can address are honored in the layout (that is the
    /// point of the oversize-palette test files).
    pub fn with_palette_entries(mut self, n: u32) -> Self {
        self.palette_entries = n;
        self
    }

    pub fn with_version(mut self, version: HeaderVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    pub fn with_dither(mut self) -> Self {
        self.dither = true;
        self
    }

    pub fn with_top_down(mut self) -> Self {
        self.top_down = true;
        self
    }

    pub fn with_mono_palette(mut self, mono_palette: MonoPalette) -> Self {
        self.mono_palette = mono_palette;
        self
    }
}

/// Derived sizes and offsets, computed from a [`BmpSpec`] before encoding.
///
/// Later file sections depend on the sizes of earlier ones; everything is
/// resolved here once, with checked arithmetic. No semantic validation
/// happens — a spec describing a malformed file lays out exactly what it
/// asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// DIB header length.
    pub header_size: usize,
    /// 12 when a standalone r/g/b mask block follows the DIB header
    /// (BI_BITFIELDS with a v3 header), else 0.
    pub mask_block_size: usize,
    /// Color table length: 4 bytes per requested entry.
    pub palette_size: usize,
    /// Offset of the pixel data from the start of the file.
    pub bits_offset: usize,
    /// Padded per-row byte length, always a multiple of 4.
    pub row_stride: usize,
    /// Pixel data length: `row_stride * height`.
    pub bits_size: usize,
    /// Total file length: `bits_offset + bits_size`.
    pub file_size: usize,
}

impl Layout {
    /// Resolve every derived field of `spec`.
    pub fn of(spec: &BmpSpec) -> Result<Self, ForgeError> {
        let too_large = || ForgeError::DimensionsTooLarge {
            width: spec.width,
            height: spec.height,
        };

        let header_size = spec.version.dib_size();
        let mask_block_size = if spec.compression == Compression::Bitfields
            && spec.version == HeaderVersion::V3
        {
            12
        } else {
            0
        };
        let palette_size = (spec.palette_entries as usize)
            .checked_mul(4)
            .ok_or_else(too_large)?;

        let row_stride = (spec.width as usize)
            .checked_mul(spec.depth.bits() as usize)
            .and_then(|bits| bits.checked_add(31))
            .map(|bits| bits / 32 * 4)
            .ok_or_else(too_large)?;
        let bits_size = row_stride
            .checked_mul(spec.height as usize)
            .ok_or_else(too_large)?;

        let bits_offset = (14usize + header_size + mask_block_size)
            .checked_add(palette_size)
            .ok_or_else(too_large)?;
        let file_size = bits_offset.checked_add(bits_size).ok_or_else(too_large)?;

        Ok(Self {
            header_size,
            mask_block_size,
            palette_size,
            bits_offset,
            row_stride,
            bits_size,
            file_size,
        })
    }
}
