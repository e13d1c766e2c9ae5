//! Raw buffer → dense pixel array.

use alloc::vec::Vec;

use enough::Stop;

use super::layout::{ALPHA, BLUE, GREEN, RED, RowLayout};
use crate::error::BitmapError;
use crate::pixel::Pixel;

/// Allocate a zeroed pixel array, reporting allocation failure as an error.
pub(crate) fn alloc_pixels(count: usize) -> Result<Vec<Pixel>, BitmapError> {
    let bytes = count.saturating_mul(core::mem::size_of::<Pixel>());
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| BitmapError::AllocationFailure { bytes })?;
    pixels.resize(count, Pixel::new(0, 0, 0, 0));
    Ok(pixels)
}

/// Read every pixel of `data` into a new `width * height` array.
///
/// Channels are read B,G,R[,A] from each on-disk pixel. For 24-bit data
/// alpha stays 0.
pub(crate) fn populate_pixels(
    data: &[u8],
    layout: &RowLayout,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, BitmapError> {
    let mut pixels = alloc_pixels(layout.width * layout.height)?;

    for (y, row) in pixels.chunks_exact_mut(layout.width).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let src = &data[layout.row_range(y)];
        for (px, bytes) in row.iter_mut().zip(src.chunks_exact(layout.channels)) {
            px.b = bytes[BLUE];
            px.g = bytes[GREEN];
            px.r = bytes[RED];
            if layout.channels == 4 {
                px.a = bytes[ALPHA];
            }
        }
    }

    Ok(pixels)
}
