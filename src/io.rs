//! Whole-file read and write.

use std::path::Path;

use crate::error::BitmapError;

/// Read the entire file at `path` into memory.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, BitmapError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Create or truncate the file at `path` and write `data` to it.
pub fn write_file(path: impl AsRef<Path>, data: &[u8]) -> Result<(), BitmapError> {
    let path = path.as_ref();
    std::fs::write(path, data)?;
    log::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
