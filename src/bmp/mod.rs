//! BMP header parser and pixel-array codec (24-bit and 32-bit, uncompressed).
//!
//! Most callers want [`crate::Bitmap`]; this module exposes the header
//! parser for probing files without decoding them.

pub(crate) mod decode;
pub(crate) mod encode;
mod header;
pub(crate) mod layout;

pub use header::{BmpHeader, parse_header};
