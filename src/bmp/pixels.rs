//! Row walk from stored BGR(A) rows to display-order RGB565.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::header::BmpMetadata;
use crate::error::{ConvertError, FormatError};
use crate::pixel::{Rgb565, SourceLayout};

/// Checks the expected resolution, then converts the whole pixel array.
pub fn convert_to_rgb565(
    data: &[u8],
    metadata: &BmpMetadata,
    expected_width: u32,
    expected_height: u32,
) -> Result<Vec<u8>, ConvertError> {
    check_dimensions(metadata, expected_width, expected_height)?;
    check_source_len(data, metadata)?;
    let mut out = vec![0u8; output_len(metadata)?];
    convert_into(data, metadata, &mut out, &enough::Unstoppable)?;
    Ok(out)
}

pub(crate) fn check_dimensions(
    metadata: &BmpMetadata,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), ConvertError> {
    if (metadata.width, metadata.height) != (expected_width, expected_height) {
        return Err(ConvertError::DimensionMismatch {
            expected_width,
            expected_height,
            width: metadata.width,
            height: metadata.height,
        });
    }
    Ok(())
}

pub(crate) fn output_len(metadata: &BmpMetadata) -> Result<usize, ConvertError> {
    (metadata.width as usize)
        .checked_mul(metadata.height as usize)
        .and_then(|px| px.checked_mul(2))
        .ok_or(ConvertError::DimensionsTooLarge {
            width: metadata.width,
            height: metadata.height,
        })
}

/// The pixel array claimed by the header must lie inside `data`. Checked
/// before any output is allocated.
pub(crate) fn check_source_len(data: &[u8], metadata: &BmpMetadata) -> Result<(), ConvertError> {
    let needed = metadata.pixel_data_end()?;
    if data.len() < needed {
        return Err(ConvertError::TruncatedBuffer {
            needed,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Convert into the first `width * height * 2` bytes of `out`.
///
/// Output row 0 is the visual top row whatever the storage order. Row
/// padding and the fourth byte of 32 bpp pixels are never read as colour.
pub fn convert_into(
    data: &[u8],
    metadata: &BmpMetadata,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), ConvertError> {
    // Metadata fields are public; re-check what parse_header guarantees.
    if metadata.width == 0 || metadata.height == 0 {
        return Err(FormatError::EmptyImage.into());
    }
    if SourceLayout::from_bits(metadata.bits_per_pixel).is_none() {
        return Err(FormatError::UnsupportedDepth {
            bits: metadata.bits_per_pixel,
        }
        .into());
    }

    let needed = output_len(metadata)?;
    if out.len() < needed {
        return Err(ConvertError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }
    let out = &mut out[..needed];

    check_source_len(data, metadata)?;

    let width = metadata.width as usize;
    let stride = metadata.row_stride()?;
    let bpp = metadata.bytes_per_pixel();
    let offset = metadata.pixel_data_offset as usize;

    for (y, dst_row) in out.chunks_exact_mut(width * 2).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let row_start = offset + metadata.source_row(y) * stride;
        let src_row = &data[row_start..row_start + width * bpp];
        for (src, dst) in src_row.chunks_exact(bpp).zip(dst_row.chunks_exact_mut(2)) {
            let (b, g, r) = (src[0], src[1], src[2]);
            dst.copy_from_slice(&Rgb565::from_rgb888(r, g, b).to_le_bytes());
        }
    }
    Ok(())
}
