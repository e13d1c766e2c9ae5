//! # zenbmp
//!
//! Read/modify/write access to uncompressed 24-bit and 32-bit BMP images.
//!
//! A [`Bitmap`] keeps the original file bytes next to a dense RGBA pixel
//! array. Decoding fills the pixel array from the file's padded BGR(A) rows;
//! encoding writes the pixels back into the same buffer, so every header byte
//! survives a round trip unchanged.
//!
//! ## Row order
//!
//! Pixel `(x, y)` is read from stored row `y`. BMP files with a positive
//! height are stored bottom-up, so `y == 0` is the bottom row of the picture.
//! Flip `y` yourself if you need top-down coordinates.
//!
//! ## Supported Formats
//!
//! - 24-bit BGR and 32-bit BGRA, uncompressed
//!
//! ## Non-Goals
//!
//! - RLE compression, palettes (1/4/8-bit), bitfield masks
//! - OS/2 headers, ICC profiles and other color metadata
//! - Scaling, rotation, or any conversion beyond RGB8/RGBA8 export
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{Bitmap, PixelLayout};
//!
//! let mut img = Bitmap::open("in.bmp")?;
//! let (r, g, b) = img.get_pixel_rgb(0, 0)?;
//! img.set_pixel_rgb(0, 0, 255 - r, 255 - g, 255 - b)?;
//!
//! let rgb = img.export(PixelLayout::Rgb8)?;
//! assert_eq!(rgb.len(), img.width() as usize * img.height() as usize * 3);
//!
//! img.write("out.bmp")?;
//! # Ok::<(), zenbmp::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod image;
mod limits;
mod pixel;

pub mod bmp;

#[cfg(feature = "std")]
pub mod io;

// Re-exports
pub use bmp::{BmpHeader, parse_header};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use image::Bitmap;
pub use limits::Limits;
pub use pixel::{BmpDepth, Pixel, PixelLayout};
