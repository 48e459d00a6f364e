use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// Copy `image` into RGBA and make near-black pixels transparent.
///
/// Sources without an alpha channel come out fully opaque before keying.
pub fn key_background(image: &DynamicImage, threshold: u8) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    key_background_in_place(&mut rgba, threshold);
    rgba
}

/// Zero the alpha of every pixel whose R, G and B are all below `threshold`.
/// Returns the number of pixels keyed out.
pub fn key_background_in_place(image: &mut RgbaImage, threshold: u8) -> usize {
    let mut keyed = 0usize;
    // Whole-buffer pass over packed RGBA quads
    for px in image.chunks_exact_mut(4) {
        if px[0] < threshold && px[1] < threshold && px[2] < threshold {
            px[3] = 0;
            keyed += 1;
        }
    }
    debug!(
        "Keyed {} of {} pixels (threshold {})",
        keyed,
        image.width() as usize * image.height() as usize,
        threshold
    );
    keyed
}
