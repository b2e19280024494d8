use crate::error::ConvertError;

/// Resource ceilings checked before the RGB565 output is allocated.
///
/// All fields default to `None` (no ceiling). Output never exceeds the
/// pixel array present in the input; these cap it further.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the output stream in bytes (two per pixel).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that admit exactly one display resolution and nothing larger.
    pub fn for_display(width: u32, height: u32) -> Self {
        Self {
            max_width: Some(width),
            max_height: Some(height),
            max_pixels: Some(u64::from(width) * u64::from(height)),
            max_memory_bytes: Some(u64::from(width) * u64::from(height) * 2),
        }
    }

    /// Validates `width` x `height` and returns the output length in bytes.
    pub(crate) fn check_output(&self, width: u32, height: u32) -> Result<usize, ConvertError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            ConvertError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {max}"))
        };

        if let Some(max) = self.max_width.filter(|&max| width > max) {
            return Err(exceeded("width", width.into(), max.into()));
        }
        if let Some(max) = self.max_height.filter(|&max| height > max) {
            return Err(exceeded("height", height.into(), max.into()));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(exceeded("pixel count", pixels, max));
        }
        let bytes = pixels * 2;
        if let Some(max) = self.max_memory_bytes.filter(|&max| bytes > max) {
            return Err(exceeded("output size", bytes, max));
        }
        usize::try_from(bytes).map_err(|_| ConvertError::DimensionsTooLarge { width, height })
    }
}
