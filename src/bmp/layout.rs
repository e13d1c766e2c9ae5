//! On-disk pixel-array geometry: row stride, padding and per-pixel offsets.

use super::header::BmpHeader;
use crate::error::BitmapError;

/// Channel byte positions within one on-disk pixel.
pub(crate) const BLUE: usize = 0;
pub(crate) const GREEN: usize = 1;
pub(crate) const RED: usize = 2;
pub(crate) const ALPHA: usize = 3;

/// Row geometry of a BMP pixel array.
///
/// Rows are stored one after another starting at `start`, each padded to a
/// multiple of 4 bytes. Row `y` of the dense array is the `y`-th stored row;
/// no vertical flip is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowLayout {
    pub start: usize,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub row_size: usize,
    pub padding: usize,
}

impl RowLayout {
    /// Compute the layout and check that every row fits in `buffer_len` bytes.
    pub(crate) fn new(header: &BmpHeader, buffer_len: usize) -> Result<Self, BitmapError> {
        let (width, height) = (header.width, header.height);
        let too_large = BitmapError::DimensionsTooLarge { width, height };

        let w = width as usize;
        let h = height as usize;
        let channels = header.depth.channels();
        let row_size = row_size_bytes(header.depth.bits(), width).ok_or(too_large)?;
        let padding = row_size - w * channels;

        let start = header.pixel_array_start as usize;
        let end = row_size
            .checked_mul(h)
            .and_then(|size| size.checked_add(start))
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        if end > buffer_len {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "pixel array ends at byte {end}, buffer is {buffer_len} bytes"
            )));
        }

        Ok(Self {
            start,
            width: w,
            height: h,
            channels,
            row_size,
            padding,
        })
    }

    /// Byte offset of pixel `(x, y)` in the raw buffer.
    ///
    /// Equal to `start + index * channels + y * padding` with
    /// `index = y * width + x`.
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        self.start + y * self.row_size + x * self.channels
    }

    /// The raw bytes of stored row `y`, padding excluded.
    #[inline]
    pub(crate) fn row_range(&self, y: usize) -> core::ops::Range<usize> {
        let begin = self.offset(0, y);
        begin..begin + self.width * self.channels
    }
}

/// `floor((depth * width + 31) / 32) * 4`, or `None` on overflow.
pub(crate) fn row_size_bytes(depth_bits: u16, width: u32) -> Option<usize> {
    (depth_bits as usize)
        .checked_mul(width as usize)?
        .checked_add(31)
        .map(|bits| bits / 32)?
        .checked_mul(4)
}
