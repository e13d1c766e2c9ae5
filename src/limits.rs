/// Resource limits for [`crate::DecodeRequest`].
///
/// Checked right after the header is parsed, before the pixel array is
/// allocated, so an oversized file fails without touching its pixel data.
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum width in pixels, as read from the header.
    pub max_width: Option<u64>,
    /// Maximum height in pixels (number of stored rows).
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes held by a decoded [`crate::Bitmap`]: the raw file buffer
    /// plus 4 bytes per pixel for the dense array.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject header dimensions above `max_width`, `max_height` or `max_pixels`.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), crate::BitmapError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(crate::BitmapError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(crate::BitmapError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::BitmapError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Reject a decode whose buffer plus pixel array would exceed `max_memory_bytes`.
    pub(crate) fn check_memory(&self, bytes: u64) -> Result<(), crate::BitmapError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes > max_mem {
                return Err(crate::BitmapError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
