use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::{BmpMetadata, BmpPermissiveness};
use crate::error::ConvertError;
use crate::limits::Limits;
use crate::pixel::Rgb565;

/// Native resolution of the round 240x240 panels this output targets.
pub const DEFAULT_WIDTH: u32 = 240;
pub const DEFAULT_HEIGHT: u32 = 240;

/// Builder for one BMP -> RGB565 conversion.
///
/// ```
/// use bmp565::{ConvertRequest, Unstoppable};
///
/// # fn run(bmp: &[u8]) -> Result<(), bmp565::ConvertError> {
/// let image = ConvertRequest::new(bmp)
///     .with_expected_size(240, 240)
///     .convert(Unstoppable)?;
/// assert_eq!(image.pixels().len(), 240 * 240 * 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConvertRequest<'a> {
    data: &'a [u8],
    expected: Option<(u32, u32)>,
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            expected: None,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
        }
    }

    /// Reject any image whose size differs from `width` x `height`.
    ///
    /// Without this, the image's own size is accepted.
    pub fn with_expected_size(mut self, width: u32, height: u32) -> Self {
        self.expected = Some((width, height));
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Parse the header only.
    pub fn metadata(&self) -> Result<BmpMetadata, ConvertError> {
        crate::bmp::parse_header_with(self.data, self.permissiveness)
    }

    pub fn convert(self, stop: impl Stop) -> Result<Rgb565Image, ConvertError> {
        crate::bmp::convert(
            self.data,
            self.expected,
            self.limits,
            self.permissiveness,
            &stop,
        )
    }
}

/// A converted image: `width * height` little-endian RGB565 pixels, top row
/// first, no header.
#[derive(Clone, Debug)]
pub struct Rgb565Image {
    pixels: Vec<u8>,
    source: BmpMetadata,
}

impl Rgb565Image {
    pub(crate) fn new(pixels: Vec<u8>, source: BmpMetadata) -> Self {
        Self { pixels, source }
    }

    pub fn width(&self) -> u32 {
        self.source.width
    }

    pub fn height(&self) -> u32 {
        self.source.height
    }

    /// Header of the source bitmap.
    pub fn source(&self) -> &BmpMetadata {
        &self.source
    }

    /// The raw stream, ready to write to a file or push to the display.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Pixel at `(x, y)`, with `y = 0` the visual top row.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width() as usize + x as usize) * 2;
        match self.pixels.get(i..i + 2)? {
            &[lo, hi] => Some(Rgb565::from_le_bytes([lo, hi])),
            _ => None,
        }
    }

    /// Pixels in row-major display order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb565> + '_ {
        self.pixels
            .chunks_exact(2)
            .map(|p| Rgb565::from_le_bytes([p[0], p[1]]))
    }

    /// Copy into an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<Rgb565> {
        imgref::ImgVec::new(
            self.iter().collect(),
            self.width() as usize,
            self.height() as usize,
        )
    }
}
