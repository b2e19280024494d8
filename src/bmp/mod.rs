//! BMP header parsing and RGB565 pixel conversion.
//!
//! Use [`crate::ConvertRequest`] for limits and cancellation, or the free
//! functions re-exported at the crate root for the bare two-step path.

mod header;
mod pixels;

pub use header::{
    BmpMetadata, BmpPermissiveness, Compression, parse_header, parse_header_with,
};
pub use pixels::{convert_into, convert_to_rgb565};

use crate::convert::Rgb565Image;
use crate::error::ConvertError;
use crate::limits::Limits;
use alloc::vec;
use enough::Stop;

/// Parse, gate on size, limits and source length, then convert.
pub(crate) fn convert(
    data: &[u8],
    expected: Option<(u32, u32)>,
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Rgb565Image, ConvertError> {
    let metadata = parse_header_with(data, permissiveness)?;
    if let Some((width, height)) = expected {
        pixels::check_dimensions(&metadata, width, height)?;
    }
    let out_len = match limits {
        Some(limits) => limits.check_output(metadata.width, metadata.height)?,
        None => pixels::output_len(&metadata)?,
    };
    pixels::check_source_len(data, &metadata)?;
    stop.check()?;

    let mut out = vec![0u8; out_len];
    convert_into(data, &metadata, &mut out, stop)?;
    Ok(Rgb565Image::new(out, metadata))
}
