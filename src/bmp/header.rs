//! BMP file header + DIB header parsing.
//!
//! Only the fields needed to locate and interpret 24/32 bpp pixel rows are
//! read; colour-space blocks, ICC profiles and DPI are skipped.

use crate::error::{ConvertError, FormatError};
use crate::pixel::SourceLayout;

/// `BITMAPFILEHEADER` length.
pub(crate) const FILE_HEADER_SIZE: u32 = 14;
/// `BITMAPINFOHEADER` length, the smallest DIB header accepted.
pub(crate) const INFO_HEADER_SIZE: u32 = 40;

const STANDARD_MASKS: [u32; 3] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF];

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the header parser validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Accept every header that passes the signature, DIB size, planes,
    /// depth and compression checks. BI_BITFIELDS masks are not read; the
    /// pixels are assumed to be plain BGR/BGRA.
    #[default]
    Standard,

    /// Additionally reject a pixel data offset that points into the headers,
    /// and BI_BITFIELDS images whose masks are not the standard
    /// `00FF0000 / 0000FF00 / 000000FF` layout.
    Strict,
}

// ── Compression ─────────────────────────────────────────────────────

/// Compression methods that carry uncompressed BGR(A) rows.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Compression {
    /// `BI_RGB` (0).
    Rgb,
    /// `BI_BITFIELDS` (3), converted as if the masks were standard.
    Bitfields,
}

impl Compression {
    fn from_u32(method: u32) -> Option<Self> {
        match method {
            0 => Some(Self::Rgb),
            3 => Some(Self::Bitfields),
            _ => None,
        }
    }
}

// ── Metadata ────────────────────────────────────────────────────────

/// Validated geometry and layout of a BMP's pixel array.
///
/// [`parse_header`] guarantees non-zero `width` and `height` and a
/// `bits_per_pixel` of 24 or 32. The fields are public, so metadata built by
/// hand is checked again by [`convert_into`](super::convert_into).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpMetadata {
    /// Byte offset of the first stored pixel row.
    pub pixel_data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Rows are stored top row first (negative height in the header).
    pub top_down: bool,
    pub compression: Compression,
    pub dib_header_size: u32,
}

impl BmpMetadata {
    pub fn layout(&self) -> SourceLayout {
        if self.bits_per_pixel == 32 {
            SourceLayout::Bgra8
        } else {
            SourceLayout::Bgr8
        }
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.layout().bytes_per_pixel()
    }

    /// Stored row length, padded to a multiple of four bytes.
    pub fn row_stride(&self) -> Result<usize, ConvertError> {
        (self.width as usize)
            .checked_mul(usize::from(self.bits_per_pixel))
            .map(|bits| bits.div_ceil(32) * 4)
            .ok_or(self.too_large())
    }

    /// One past the last byte of the pixel array:
    /// `pixel_data_offset + height * row_stride`.
    pub fn pixel_data_end(&self) -> Result<usize, ConvertError> {
        self.row_stride()?
            .checked_mul(self.height as usize)
            .and_then(|len| len.checked_add(self.pixel_data_offset as usize))
            .ok_or(self.too_large())
    }

    /// Maps a display row (0 = visual top) to the stored row index.
    #[inline]
    pub fn source_row(&self, display_row: usize) -> usize {
        if self.top_down {
            display_row
        } else {
            self.height as usize - 1 - display_row
        }
    }

    fn too_large(&self) -> ConvertError {
        ConvertError::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        }
    }
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], ConvertError> {
        let end = self.pos + N;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(ConvertError::TruncatedBuffer {
                needed: end,
                actual: self.data.len(),
            })?;
        self.pos = end;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    fn u16_le(&mut self) -> Result<u16, ConvertError> {
        self.take().map(u16::from_le_bytes)
    }

    fn u32_le(&mut self) -> Result<u32, ConvertError> {
        self.take().map(u32::from_le_bytes)
    }

    fn i32_le(&mut self) -> Result<i32, ConvertError> {
        self.take().map(i32::from_le_bytes)
    }
}

// ── Parsing ─────────────────────────────────────────────────────────

/// Parse and validate a BMP header with [`BmpPermissiveness::Standard`].
///
/// Checks run in a fixed order and the first failure is reported:
/// signature, DIB header size, planes, bit depth, compression, then
/// non-zero dimensions. A buffer that ends inside the header yields
/// [`ConvertError::TruncatedBuffer`].
pub fn parse_header(data: &[u8]) -> Result<BmpMetadata, ConvertError> {
    parse_header_with(data, BmpPermissiveness::Standard)
}

/// Parse a BMP header at the given strictness.
pub fn parse_header_with(
    data: &[u8],
    permissiveness: BmpPermissiveness,
) -> Result<BmpMetadata, ConvertError> {
    if !data.starts_with(b"BM") {
        return Err(FormatError::NotABitmap.into());
    }

    // File size (2..6) and the two reserved words (6..10) are not trusted.
    let mut bytes = Cursor::at(data, 10);
    let pixel_data_offset = bytes.u32_le()?;

    let dib_header_size = bytes.u32_le()?;
    if dib_header_size < INFO_HEADER_SIZE {
        return Err(FormatError::UnsupportedHeader {
            size: dib_header_size,
        }
        .into());
    }

    let raw_width = bytes.i32_le()?;
    let raw_height = bytes.i32_le()?;
    let top_down = raw_height < 0;

    let planes = bytes.u16_le()?;
    if planes != 1 {
        return Err(FormatError::UnsupportedPlanes { planes }.into());
    }

    let bits = bytes.u16_le()?;
    if SourceLayout::from_bits(bits).is_none() {
        return Err(FormatError::UnsupportedDepth { bits }.into());
    }

    let method = bytes.u32_le()?;
    let compression =
        Compression::from_u32(method).ok_or(FormatError::UnsupportedCompression { method })?;

    let width = raw_width.unsigned_abs();
    let height = raw_height.unsigned_abs();
    if width == 0 || height == 0 {
        return Err(FormatError::EmptyImage.into());
    }

    if permissiveness == BmpPermissiveness::Strict {
        let header_end = FILE_HEADER_SIZE.saturating_add(dib_header_size);
        if pixel_data_offset < header_end {
            return Err(FormatError::InvalidPixelOffset {
                offset: pixel_data_offset,
                header_end,
            }
            .into());
        }
        if compression == Compression::Bitfields {
            check_bitfield_masks(data)?;
        }
    }

    Ok(BmpMetadata {
        pixel_data_offset,
        width,
        height,
        bits_per_pixel: bits,
        top_down,
        compression,
        dib_header_size,
    })
}

/// R, G, B masks sit at offset 54, either inside a V2+ header or directly
/// after a 40-byte one.
fn check_bitfield_masks(data: &[u8]) -> Result<(), ConvertError> {
    let mut bytes = Cursor::at(data, 54);
    let masks = [bytes.u32_le()?, bytes.u32_le()?, bytes.u32_le()?];
    if masks != STANDARD_MASKS {
        return Err(FormatError::NonStandardBitfields.into());
    }
    Ok(())
}
