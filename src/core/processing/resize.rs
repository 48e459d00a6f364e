use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::{RgbaImage, imageops};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BoundingBox, FrameSize, ResampleFilter};

/// Resize an RGBA buffer to `target`. Colour is weighted by alpha during
/// filtering so transparent edges do not bleed dark fringes.
pub fn resize_rgba_image(
    image: &RgbaImage,
    target: FrameSize,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    if target.width == 0 || target.height == 0 {
        return Err(Error::geometry(format!("target size {} is empty", target)));
    }
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(Error::geometry(format!(
            "cannot resize empty {}x{} image",
            src_width, src_height
        )));
    }

    // Already at the requested size
    if (src_width, src_height) == (target.width, target.height) {
        return Ok(image.clone());
    }

    let resize_options = ResizeOptions::new()
        .resize_alg(filter.into())
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target.width, target.height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target.width, target.height, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has unexpected length".to_string()))
}

/// Crop `frame` to `bbox` and resize the crop to `target`.
pub fn normalize_frame(
    frame: &RgbaImage,
    bbox: &BoundingBox,
    target: FrameSize,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (width, height) = frame.dimensions();
    if bbox.right > width || bbox.bottom > height || bbox.width() == 0 || bbox.height() == 0 {
        return Err(Error::geometry(format!(
            "crop box {} does not fit a {}x{} frame",
            bbox, width, height
        )));
    }

    let cropped =
        imageops::crop_imm(frame, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image();
    debug!(
        "Frame crop {}x{} -> {}",
        cropped.width(),
        cropped.height(),
        target
    );
    resize_rgba_image(&cropped, target, filter)
}
