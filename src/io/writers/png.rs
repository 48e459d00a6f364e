use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Write an RGBA strip as PNG, creating missing parent directories.
pub fn write_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let write_error = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(image::ImageError::IoError(e)))?;
    }

    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(write_error)
}
