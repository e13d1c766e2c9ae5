use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::decode::populate_pixels;
use crate::bmp::layout::RowLayout;
use crate::bmp::parse_header;
use crate::error::BitmapError;
use crate::image::Bitmap;
use crate::limits::Limits;
use crate::pixel::Pixel;

/// Builder for decoding a BMP byte buffer into a [`Bitmap`].
///
/// The buffer is moved into the resulting `Bitmap` and kept as the template
/// that [`Bitmap::encode`] writes pixels back into.
#[derive(Debug)]
pub struct DecodeRequest<'a> {
    data: Vec<u8>,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before the pixel array is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse the header and populate the pixel array.
    ///
    /// On error the buffer is dropped and no `Bitmap` is produced.
    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, BitmapError> {
        let header = parse_header(&self.data)?;
        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
            let pixel_bytes = u64::from(header.width)
                * u64::from(header.height)
                * core::mem::size_of::<Pixel>() as u64;
            limits.check_memory(pixel_bytes.saturating_add(self.data.len() as u64))?;
        }
        let layout = RowLayout::new(&header, self.data.len())?;
        stop.check()?;
        let pixels = populate_pixels(&self.data, &layout, &stop)?;
        Ok(Bitmap::from_parts(self.data, header, layout, pixels))
    }
}
