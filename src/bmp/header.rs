//! BMP header field extraction.
//!
//! Only the four fields the pixel codec needs are read; everything else in
//! the file and info headers is carried through untouched in the raw buffer.

use crate::error::BitmapError;
use crate::pixel::BmpDepth;

// ── Fixed field offsets ─────────────────────────────────────────────

const SIGNATURE: &[u8; 2] = b"BM";

const PIXEL_ARRAY_START_OFFSET: usize = 10;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const DEPTH_OFFSET: usize = 28;

/// Bytes needed to reach the end of the depth field.
pub(crate) const MIN_HEADER_LEN: usize = DEPTH_OFFSET + 2;

// ── Parsed header ───────────────────────────────────────────────────

/// Geometry and depth read from a BMP header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Byte offset of the first pixel within the file buffer.
    pub pixel_array_start: u32,
    pub width: u32,
    pub height: u32,
    pub depth: BmpDepth,
}

/// Parse the BMP signature, pixel-array offset, dimensions and depth.
pub fn parse_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    match data.get(..2) {
        Some(sig) if sig == SIGNATURE => {}
        Some(_) => return Err(BitmapError::InvalidFormat),
        None => return Err(BitmapError::UnexpectedEof),
    }
    if data.len() < MIN_HEADER_LEN {
        return Err(BitmapError::UnexpectedEof);
    }

    let pixel_array_start = read_u32_le(data, PIXEL_ARRAY_START_OFFSET)?;
    let width = read_u32_le(data, WIDTH_OFFSET)? as i32;
    let height = read_u32_le(data, HEIGHT_OFFSET)? as i32;
    let bits = read_u16_le(data, DEPTH_OFFSET)?;

    let depth = BmpDepth::from_bits(bits).ok_or(BitmapError::UnsupportedDepth(bits))?;

    if width <= 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP width must be positive, got {width}"
        )));
    }
    if height <= 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP height must be positive, got {height}"
        )));
    }

    let header = BmpHeader {
        pixel_array_start,
        width: width as u32,
        height: height as u32,
        depth,
    };
    log::debug!(
        "bmp header: {}x{} {}-bit, pixels at {}",
        header.width,
        header.height,
        bits,
        header.pixel_array_start
    );
    Ok(header)
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, BitmapError> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or(BitmapError::UnexpectedEof)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_u16_le(data: &[u8], offset: usize) -> Result<u16, BitmapError> {
    let bytes = data
        .get(offset..offset + 2)
        .ok_or(BitmapError::UnexpectedEof)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}
