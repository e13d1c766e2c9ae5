/// One decoded pixel: red, green, blue, alpha, 8 bits each.
///
/// 24-bit images carry no alpha on disk; their pixels hold `a == 0`
/// after decode and the alpha channel is ignored on encode.
pub type Pixel = rgb::RGBA8;

/// Bits per pixel of a supported BMP.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BmpDepth {
    /// 3 bytes per pixel, stored B,G,R.
    Bits24,
    /// 4 bytes per pixel, stored B,G,R,A.
    Bits32,
}

impl BmpDepth {
    /// Map a raw `biBitCount` header value to a supported depth.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bits24),
            32 => Some(Self::Bits32),
            _ => None,
        }
    }

    /// Bits per pixel (24 or 32).
    pub fn bits(&self) -> u16 {
        match self {
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }

    /// Bytes per pixel on disk (`bits / 8`).
    pub fn channels(&self) -> usize {
        usize::from(self.bits() / 8)
    }
}

/// Flat byte layout for exporting the pixel array.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB. Always a fresh copy.
    Rgb8,
    /// 4 channels, 8-bit RGBA. Borrows the pixel array directly.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}
