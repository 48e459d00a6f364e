use image::{RgbaImage, imageops};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::GridShape;

/// Cut `image` into `grid.cols` x `grid.rows` equal frames in row-major order.
///
/// Frame size is the integer quotient of the image size by the grid; pixels
/// left over at the right and bottom edges are dropped. With `indices`, only
/// those frames are returned, stopping at the first index outside the grid.
pub fn slice_grid(
    image: &RgbaImage,
    grid: GridShape,
    indices: Option<&[usize]>,
) -> Result<Vec<RgbaImage>> {
    if grid.cols == 0 || grid.rows == 0 {
        return Err(Error::geometry(format!("grid {} has no cells", grid)));
    }

    let (width, height) = image.dimensions();
    let frame_width = width / grid.cols;
    let frame_height = height / grid.rows;

    if frame_width == 0 || frame_height == 0 {
        return Err(Error::geometry(format!(
            "image {}x{} is smaller than grid {}",
            width, height, grid
        )));
    }

    if width % grid.cols != 0 || height % grid.rows != 0 {
        warn!(
            "Image {}x{} does not divide evenly into grid {}; dropping {}px right, {}px bottom",
            width,
            height,
            grid,
            width % grid.cols,
            height % grid.rows
        );
    }

    debug!(
        "Slicing {}x{} into {} frames of {}x{}",
        width,
        height,
        grid.frame_count(),
        frame_width,
        frame_height
    );

    let total = grid.frame_count();
    let all: Vec<usize>;
    let indices = match indices {
        Some(idx) => idx,
        None => {
            all = (0..total).collect();
            all.as_slice()
        }
    };

    let mut frames = Vec::with_capacity(indices.len());
    for &idx in indices {
        if idx >= total {
            break;
        }
        let row = (idx / grid.cols as usize) as u32;
        let col = (idx % grid.cols as usize) as u32;
        let frame = imageops::crop_imm(
            image,
            col * frame_width,
            row * frame_height,
            frame_width,
            frame_height,
        )
        .to_image();
        frames.push(frame);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn labelled(width: u32, height: u32, grid: GridShape) -> RgbaImage {
        // Red channel carries the cell index so frames can be told apart
        let fw = width / grid.cols;
        let fh = height / grid.rows;
        RgbaImage::from_fn(width, height, |x, y| {
            let col = (x / fw).min(grid.cols);
            let row = (y / fh).min(grid.rows);
            Rgba([(row * grid.cols + col) as u8, (x % 256) as u8, (y % 256) as u8, 255])
        })
    }

    #[test]
    fn slices_row_major() {
        let grid = GridShape::new(5, 5);
        let img = labelled(360, 160, grid);

        let frames = slice_grid(&img, grid, None).unwrap();

        assert_eq!(frames.len(), 25);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.dimensions(), (72, 32));
            assert_eq!(frame.get_pixel(0, 0)[0], i as u8);
            assert_eq!(frame.get_pixel(71, 31)[0], i as u8);

            let ox = (i as u32 % 5) * 72;
            let oy = (i as u32 / 5) * 32;
            for (x, y, px) in frame.enumerate_pixels() {
                assert_eq!(px, img.get_pixel(ox + x, oy + y));
            }
        }
    }

    #[test]
    fn uneven_sizes_are_truncated() {
        let grid = GridShape::new(3, 2);
        let img = RgbaImage::new(10, 7);

        let frames = slice_grid(&img, grid, None).unwrap();

        assert_eq!(frames.len(), 6);
        assert!(frames.iter().all(|f| f.dimensions() == (3, 3)));
    }

    #[test]
    fn subset_stops_at_first_invalid_index() {
        let grid = GridShape::new(2, 2);
        let img = labelled(8, 8, grid);

        let frames = slice_grid(&img, grid, Some(&[3, 1, 4, 0])).unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].get_pixel(0, 0)[0], 3);
        assert_eq!(frames[1].get_pixel(0, 0)[0], 1);
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let img = RgbaImage::new(4, 4);
        assert!(matches!(
            slice_grid(&img, GridShape::new(0, 5), None),
            Err(Error::Geometry(_))
        ));
        assert!(matches!(
            slice_grid(&img, GridShape::new(5, 5), None),
            Err(Error::Geometry(_))
        ));
    }
}
