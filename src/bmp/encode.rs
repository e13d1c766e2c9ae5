//! Dense pixel array → raw buffer, and blank BMP synthesis.

use alloc::vec::Vec;

use enough::Stop;

use super::layout::{ALPHA, BLUE, GREEN, RED, RowLayout, row_size_bytes};
use crate::error::BitmapError;
use crate::pixel::{BmpDepth, Pixel};

/// Size of the file header plus BITMAPINFOHEADER written by [`blank_bmp`].
pub(crate) const HEADER_LEN: usize = 54;

/// Write every pixel back into its on-disk position in `data`.
///
/// Padding bytes and everything outside the pixel array are left as they are.
pub(crate) fn sync_buffer_from_pixels(
    data: &mut [u8],
    layout: &RowLayout,
    pixels: &[Pixel],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    for (y, row) in pixels.chunks_exact(layout.width).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        write_row(data, layout, y, row);
    }
    log::trace!(
        "synced {}x{} pixels into {} byte buffer",
        layout.width,
        layout.height,
        data.len()
    );
    Ok(())
}

/// [`sync_buffer_from_pixels`] without cancellation points.
pub(crate) fn sync_all(data: &mut [u8], layout: &RowLayout, pixels: &[Pixel]) {
    for (y, row) in pixels.chunks_exact(layout.width).enumerate() {
        write_row(data, layout, y, row);
    }
}

fn write_row(data: &mut [u8], layout: &RowLayout, y: usize, row: &[Pixel]) {
    let dst = &mut data[layout.row_range(y)];
    for (px, bytes) in row.iter().zip(dst.chunks_exact_mut(layout.channels)) {
        bytes[BLUE] = px.b;
        bytes[GREEN] = px.g;
        bytes[RED] = px.r;
        if layout.channels == 4 {
            bytes[ALPHA] = px.a;
        }
    }
}

/// Build a zero-filled, bottom-up, uncompressed BMP of the given geometry.
pub(crate) fn blank_bmp(width: u32, height: u32, depth: BmpDepth) -> Result<Vec<u8>, BitmapError> {
    let too_large = || BitmapError::DimensionsTooLarge { width, height };
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "cannot create a {width}x{height} BMP"
        )));
    }

    let row_stride = row_size_bytes(depth.bits(), width).ok_or_else(too_large)?;
    let pixel_data_size = row_stride
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(HEADER_LEN)
        .filter(|&size| u32::try_from(size).is_ok())
        .ok_or_else(too_large)?;

    let mut out = Vec::new();
    out.try_reserve_exact(file_size)
        .map_err(|_| BitmapError::AllocationFailure { bytes: file_size })?;
    write_bmp_header(&mut out, file_size, pixel_data_size, width, height, depth.bits());
    out.resize(file_size, 0);
    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
    bpp: u16,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
