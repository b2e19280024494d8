//! # bmp565
//!
//! Converts uncompressed 24/32-bit BMP images into the raw RGB565 stream a
//! small SPI display controller (GC9A01 and friends) consumes directly.
//!
//! ## Output
//!
//! `width * height` pixels, top row first, left to right, two bytes each:
//! the low byte (`G_low3:B5`) then the high byte (`R5:G_high3`). No magic,
//! no dimensions, no padding. Channels are quantized by truncation:
//! `((R & 0xF8) << 8) | ((G & 0xFC) << 3) | (B >> 3)`.
//!
//! ## Supported input
//!
//! - `BITMAPINFOHEADER` (40 bytes) or any later DIB header
//! - `BI_RGB` or `BI_BITFIELDS`; bitfield masks are assumed to be the standard
//!   BGR(A) masks unless [`BmpPermissiveness::Strict`] is requested
//! - 24 bpp (BGR) and 32 bpp (BGRA, alpha ignored)
//! - bottom-up and top-down row order, 4-byte padded rows
//!
//! ## Non-Goals
//!
//! - RLE, JPEG or PNG payloads inside BMP
//! - Resizing: the image must already have the display's resolution
//! - Dithering or colour management
//!
//! ## Usage
//!
//! ```no_run
//! use bmp565::{ConvertRequest, Unstoppable, parse_header, convert_to_rgb565};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Two-step core path
//! let meta = parse_header(data)?;
//! let raw = convert_to_rgb565(data, &meta, 240, 240)?;
//! assert_eq!(raw.len(), 240 * 240 * 2);
//!
//! // Builder with limits and cancellation
//! let image = ConvertRequest::new(data)
//!     .with_expected_size(240, 240)
//!     .convert(Unstoppable)?;
//! # Ok::<(), bmp565::ConvertError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod error;
mod limits;
mod pixel;

pub mod bmp;

#[cfg(feature = "std")]
pub mod batch;

// Re-exports
pub use bmp::{
    BmpMetadata, BmpPermissiveness, Compression, convert_into, convert_to_rgb565, parse_header,
    parse_header_with,
};
pub use convert::{ConvertRequest, DEFAULT_HEIGHT, DEFAULT_WIDTH, Rgb565Image};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{ConvertError, FormatError};
pub use limits::Limits;
pub use pixel::{Rgb565, SourceLayout};
