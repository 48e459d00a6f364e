use image::RgbaImage;
use tracing::debug;

use crate::types::BoundingBox;

/// Tight box around the pixels of `frame` with non-zero alpha, or `None`
/// when the frame is fully transparent.
pub fn content_bounds(frame: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;
    for (y, row) in frame.rows().enumerate() {
        let y = y as u32;
        let mut first = None;
        let mut last = 0u32;
        for (x, px) in row.enumerate() {
            if px[3] > 0 {
                if first.is_none() {
                    first = Some(x as u32);
                }
                last = x as u32;
            }
        }
        if let Some(first) = first {
            let row_box = BoundingBox::new(first, y, last + 1, y + 1);
            bounds = Some(match bounds {
                Some(b) => b.union(&row_box),
                None => row_box,
            });
        }
    }
    bounds
}

/// One crop box shared by every frame: the union of all content boxes,
/// padded and clamped to the frame canvas.
///
/// Transparent frames do not constrain the box. If no frame has content the
/// whole canvas is returned. `None` only for an empty frame list.
pub fn uniform_bounds(frames: &[RgbaImage], padding: u32) -> Option<BoundingBox> {
    let (width, height) = frames.first()?.dimensions();

    let union = frames
        .iter()
        .filter_map(content_bounds)
        .reduce(|acc, b| acc.union(&b));

    let bbox = match union {
        Some(b) => b.expand_clamped(padding, width, height),
        None => {
            debug!("All frames transparent; using full {}x{} canvas", width, height);
            BoundingBox::full(width, height)
        }
    };
    Some(bbox)
}

/// Crop box for a single frame from its own content.
pub fn frame_bounds(frame: &RgbaImage, padding: u32) -> BoundingBox {
    let (width, height) = frame.dimensions();
    match content_bounds(frame) {
        Some(b) => b.expand_clamped(padding, width, height),
        None => BoundingBox::full(width, height),
    }
}
