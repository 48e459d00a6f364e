use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Open and decode a source spritesheet.
///
/// The format is sniffed from the file contents. Failing to open the file
/// maps to `Error::InputNotFound`. Once it is open, every decoder error,
/// including running out of bytes in a truncated file, maps to `Error::Decode`.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let not_found = |source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(not_found)?
        .with_guessed_format()
        .map_err(not_found)?;

    let image = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    info!("✓ Loaded image: {}x{}", image.width(), image.height());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }

    #[test]
    fn garbage_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"this is plain text wearing a .png extension").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err}");
    }

    #[test]
    fn truncated_png_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        RgbImage::from_fn(360, 160, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]))
            .save(&path)
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err}");
    }

    #[test]
    fn loads_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        RgbImage::from_pixel(10, 5, Rgb([1, 2, 3])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (10, 5));
    }
}
