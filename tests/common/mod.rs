//! Hand-built BMP fixtures.

#![allow(dead_code)]

/// Display-order pixel source: `(x, y)` with `y = 0` the visual top row,
/// returning `(r, g, b)`.
pub type PixelFn = dyn Fn(usize, usize) -> (u8, u8, u8);

/// Knobs for [`build_bmp`].
pub struct Fixture {
    pub width: usize,
    pub height: usize,
    pub bits: u16,
    pub top_down: bool,
    /// Value written into every row padding byte.
    pub pad_byte: u8,
    /// Value written into the 4th byte of 32 bpp pixels.
    pub alpha: u8,
    pub compression: u32,
    /// BI_BITFIELDS R, G, B masks, written right after the 40-byte header.
    pub masks: Option<[u32; 3]>,
    /// Bytes between the 54-byte header and the pixel array.
    pub gap: usize,
}

impl Fixture {
    pub fn new(width: usize, height: usize, bits: u16) -> Self {
        Self {
            width,
            height,
            bits,
            top_down: false,
            pad_byte: 0,
            alpha: 0xFF,
            compression: 0,
            masks: None,
            gap: 0,
        }
    }

    pub fn top_down(mut self) -> Self {
        self.top_down = true;
        self
    }

    pub fn pad_byte(mut self, b: u8) -> Self {
        self.pad_byte = b;
        self
    }

    pub fn alpha(mut self, a: u8) -> Self {
        self.alpha = a;
        self
    }

    pub fn bitfields(mut self, masks: [u32; 3]) -> Self {
        self.compression = 3;
        self.gap = 12;
        self.masks = Some(masks);
        self
    }

    pub fn stride(&self) -> usize {
        (self.width * self.bits as usize).div_ceil(32) * 4
    }

    pub fn build(&self, pixel: &PixelFn) -> Vec<u8> {
        build_bmp(self, pixel)
    }
}

pub fn build_bmp(fixture: &Fixture, pixel: &PixelFn) -> Vec<u8> {
    let offset = 54 + fixture.gap;
    let stride = fixture.stride();
    let bpp = fixture.bits as usize / 8;
    let file_size = offset + stride * fixture.height;

    let mut bmp = vec![0u8; file_size];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(file_size as u32).to_le_bytes());
    bmp[10..14].copy_from_slice(&(offset as u32).to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&(fixture.width as i32).to_le_bytes());
    let height = if fixture.top_down {
        -(fixture.height as i32)
    } else {
        fixture.height as i32
    };
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&fixture.bits.to_le_bytes());
    bmp[30..34].copy_from_slice(&fixture.compression.to_le_bytes());
    if let Some(masks) = fixture.masks {
        for (i, m) in masks.iter().enumerate() {
            bmp[54 + i * 4..58 + i * 4].copy_from_slice(&m.to_le_bytes());
        }
    }

    for y in 0..fixture.height {
        let stored = if fixture.top_down { y } else { fixture.height - 1 - y };
        let row = &mut bmp[offset + stored * stride..offset + (stored + 1) * stride];
        row.fill(fixture.pad_byte);
        for x in 0..fixture.width {
            let (r, g, b) = pixel(x, y);
            let px = &mut row[x * bpp..(x + 1) * bpp];
            px[0] = b;
            px[1] = g;
            px[2] = r;
            if bpp == 4 {
                px[3] = fixture.alpha;
            }
        }
    }
    bmp
}

/// Single-colour image.
pub fn solid(width: usize, height: usize, bits: u16, rgb: (u8, u8, u8)) -> Vec<u8> {
    Fixture::new(width, height, bits).build(&move |_, _| rgb)
}

/// Deterministic per-pixel noise (xorshift on the coordinates).
pub fn noise(x: usize, y: usize) -> (u8, u8, u8) {
    let mut s = (x as u32).wrapping_mul(0x9E37_79B9) ^ (y as u32).wrapping_mul(0x85EB_CA6B) ^ 0xDEAD_BEEF;
    s ^= s << 13;
    s ^= s >> 17;
    s ^= s << 5;
    (s as u8, (s >> 8) as u8, (s >> 16) as u8)
}

/// Reference quantization, written independently of the crate.
pub fn rgb565_le(r: u8, g: u8, b: u8) -> [u8; 2] {
    let v = ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3);
    [v as u8, (v >> 8) as u8]
}
