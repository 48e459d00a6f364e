use image::{RgbaImage, imageops};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::FrameSize;

/// Lay `frames` out left to right on a transparent canvas of
/// `frame_size.width * frames.len()` by `frame_size.height`.
///
/// Frames replace the canvas pixels; nothing is blended.
pub fn assemble_strip(frames: &[RgbaImage], frame_size: FrameSize) -> Result<RgbaImage> {
    if frames.is_empty() {
        return Err(Error::geometry("no frames to assemble"));
    }
    if let Some((i, f)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (frame_size.width, frame_size.height))
    {
        return Err(Error::geometry(format!(
            "frame {} is {}x{}, expected {}",
            i,
            f.width(),
            f.height(),
            frame_size
        )));
    }

    let count = u32::try_from(frames.len())
        .map_err(|_| Error::geometry(format!("{} frames do not fit a strip", frames.len())))?;
    let strip_width = frame_size
        .width
        .checked_mul(count)
        .ok_or_else(|| Error::geometry("strip width overflows"))?;

    let mut canvas = RgbaImage::new(strip_width, frame_size.height);
    for (i, frame) in frames.iter().enumerate() {
        let x_offset = i as i64 * frame_size.width as i64;
        imageops::replace(&mut canvas, frame, x_offset, 0);
    }

    info!(
        "Composited {} frames into {}x{} strip",
        frames.len(),
        canvas.width(),
        canvas.height()
    );
    Ok(canvas)
}
