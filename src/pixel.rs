/// Byte layout of one source pixel inside a BMP row.
///
/// BMP stores channels blue first, never RGB.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceLayout {
    /// 24 bpp: B, G, R.
    Bgr8,
    /// 32 bpp: B, G, R, then an alpha (or padding) byte that is ignored.
    Bgra8,
}

impl SourceLayout {
    pub(crate) fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr8),
            32 => Some(Self::Bgra8),
            _ => None,
        }
    }

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
        }
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.bytes_per_pixel() as u16 * 8
    }
}

/// A packed 5-6-5 pixel: red in bits 15..11, green in 10..5, blue in 4..0.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Quantize 8-bit channels by truncating the low bits of each.
    ///
    /// Truncation (not rounding) keeps output reproducible against other
    /// tools feeding the same panel.
    #[inline]
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Wire order: low byte (`G_low3:B5`) first.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Expand back to 8-bit channels, replicating high bits into the low ones
    /// so that 0x1F maps to 0xFF.
    pub const fn to_rgb888(self) -> [u8; 3] {
        let r = self.red();
        let g = self.green();
        let b = self.blue();
        [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
    }
}

impl From<Rgb565> for u16 {
    fn from(p: Rgb565) -> u16 {
        p.0
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Rgb565 {
    fn from(p: rgb::RGB8) -> Self {
        Self::from_rgb888(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGR8> for Rgb565 {
    fn from(p: rgb::alt::BGR8) -> Self {
        Self::from_rgb888(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Rgb565> for rgb::RGB8 {
    fn from(p: Rgb565) -> Self {
        let [r, g, b] = p.to_rgb888();
        rgb::RGB8 { r, g, b }
    }
}
