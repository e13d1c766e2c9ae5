use alloc::borrow::Cow;
use alloc::vec::Vec;

use enough::{Stop, Unstoppable};
use rgb::ComponentBytes as _;

use crate::bmp::BmpHeader;
use crate::bmp::decode::alloc_pixels;
use crate::bmp::encode::{blank_bmp, sync_all, sync_buffer_from_pixels};
use crate::bmp::layout::RowLayout;
use crate::decode::DecodeRequest;
use crate::error::BitmapError;
use crate::pixel::{BmpDepth, Pixel, PixelLayout};

/// A decoded 24-bit or 32-bit BMP.
///
/// Owns both the raw file bytes and the dense, row-major pixel array.
/// Pixels are edited through the accessors; the raw bytes only change when
/// [`encode`](Self::encode) copies the pixels back into them. Every header
/// byte of the original file is preserved.
///
/// Pixel `(x, y)` is the `x`-th pixel of the `y`-th row stored in the file.
/// BMP files with a positive height store rows bottom-up, so `y == 0` is the
/// visual bottom row; no flip is applied.
///
/// `Clone` produces a fully independent copy of both buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    header: BmpHeader,
    layout: RowLayout,
    data: Vec<u8>,
    pixels: Vec<Pixel>,
}

impl Bitmap {
    /// Decode a BMP buffer with no limits.
    pub fn decode(data: Vec<u8>) -> Result<Self, BitmapError> {
        DecodeRequest::new(data).decode(Unstoppable)
    }

    /// Create a blank (all zero) image with a fresh 54-byte header.
    pub fn new(width: u32, height: u32, depth: BmpDepth) -> Result<Self, BitmapError> {
        let data = blank_bmp(width, height, depth)?;
        let header = BmpHeader {
            pixel_array_start: crate::bmp::encode::HEADER_LEN as u32,
            width,
            height,
            depth,
        };
        let layout = RowLayout::new(&header, data.len())?;
        let pixels = alloc_pixels(layout.width * layout.height)?;
        Ok(Self::from_parts(data, header, layout, pixels))
    }

    pub(crate) fn from_parts(
        data: Vec<u8>,
        header: BmpHeader,
        layout: RowLayout,
        pixels: Vec<Pixel>,
    ) -> Self {
        Self {
            header,
            layout,
            data,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    pub fn depth(&self) -> BmpDepth {
        self.header.depth
    }

    /// The parsed header fields.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// Byte offset of the pixel array within [`as_bytes`](Self::as_bytes).
    pub fn pixel_array_start(&self) -> usize {
        self.layout.start
    }

    /// Bytes per stored row, including padding.
    pub fn row_size_bytes(&self) -> usize {
        self.layout.row_size
    }

    /// Padding bytes at the end of each stored row.
    pub fn padding_bytes(&self) -> usize {
        self.layout.padding
    }

    fn index(&self, x: i64, y: i64) -> Result<usize, BitmapError> {
        let (width, height) = (self.header.width, self.header.height);
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return Err(BitmapError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(y as usize * width as usize + x as usize)
    }

    /// Red, green and blue of pixel `(x, y)`.
    pub fn get_pixel_rgb(&self, x: i64, y: i64) -> Result<(u8, u8, u8), BitmapError> {
        let px = self.pixels[self.index(x, y)?];
        Ok((px.r, px.g, px.b))
    }

    /// Set red, green and blue of pixel `(x, y)`; alpha is unchanged.
    pub fn set_pixel_rgb(&mut self, x: i64, y: i64, r: u8, g: u8, b: u8) -> Result<(), BitmapError> {
        let idx = self.index(x, y)?;
        let px = &mut self.pixels[idx];
        px.r = r;
        px.g = g;
        px.b = b;
        Ok(())
    }

    /// All four channels of pixel `(x, y)`.
    pub fn pixel(&self, x: i64, y: i64) -> Result<Pixel, BitmapError> {
        Ok(self.pixels[self.index(x, y)?])
    }

    /// Replace pixel `(x, y)`. Alpha is only written to disk for 32-bit images.
    pub fn set_pixel(&mut self, x: i64, y: i64, px: Pixel) -> Result<(), BitmapError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = px;
        Ok(())
    }

    /// The dense pixel array, `width * height` entries, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// The pixel array as interleaved R,G,B,A bytes, without copying.
    pub fn as_rgba8_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// A fresh interleaved R,G,B copy of the pixel array.
    pub fn to_rgb8_bytes(&self) -> Result<Vec<u8>, BitmapError> {
        let bytes = self.pixels.len() * 3;
        let mut out = Vec::new();
        out.try_reserve_exact(bytes)
            .map_err(|_| BitmapError::AllocationFailure { bytes })?;
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        Ok(out)
    }

    /// Export the pixel array in `layout`.
    ///
    /// `Rgba8` borrows the pixel array; `Rgb8` is an owned copy.
    pub fn export(&self, layout: PixelLayout) -> Result<Cow<'_, [u8]>, BitmapError> {
        match layout {
            PixelLayout::Rgba8 => Ok(Cow::Borrowed(self.as_rgba8_bytes())),
            PixelLayout::Rgb8 => Ok(Cow::Owned(self.to_rgb8_bytes()?)),
        }
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(
            &self.pixels[..],
            self.header.width as usize,
            self.header.height as usize,
        )
    }

    /// Copy the pixel array back into the raw buffer and return it.
    ///
    /// Header and padding bytes are left unmodified. Calling this again
    /// without touching any pixel yields the same bytes.
    pub fn encode(&mut self) -> &[u8] {
        sync_all(&mut self.data, &self.layout, &self.pixels);
        &self.data
    }

    /// [`encode`](Self::encode) with a cancellation token.
    ///
    /// A cancelled sync may leave the raw buffer partially updated; the pixel
    /// array is unaffected and a later encode completes it.
    pub fn encode_with(&mut self, stop: impl Stop) -> Result<&[u8], BitmapError> {
        sync_buffer_from_pixels(&mut self.data, &self.layout, &self.pixels, &stop)?;
        Ok(&self.data)
    }

    /// The raw buffer as of the last decode or encode.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Encode and hand over the raw buffer.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.encode();
        self.data
    }

    /// Read and decode a BMP file.
    #[cfg(feature = "std")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, BitmapError> {
        Self::decode(crate::io::read_file(path)?)
    }

    /// Encode and write the whole buffer to `path`.
    ///
    /// On failure the image is left intact and the write may be retried.
    #[cfg(feature = "std")]
    pub fn write(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), BitmapError> {
        self.encode();
        crate::io::write_file(path, &self.data)
    }
}
