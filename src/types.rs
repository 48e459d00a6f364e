//! Shared types used across the pipeline.
//! Includes `FrameSize`, `GridShape`, `BoundingBox`, the processing `Stage`
//! machine, and the `AlignMode` / `ResampleFilter` selectors.
use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

/// Target size of one output frame, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Layout of frames inside a source spritesheet.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
}

impl GridShape {
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    pub fn frame_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Axis-aligned box in frame coordinates. `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box covering a whole `width` x `height` canvas.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Grow by `padding` on every side, clamped to a `width` x `height` canvas.
    pub fn expand_clamped(&self, padding: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width),
            bottom: self.bottom.saturating_add(padding).min(height),
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Pipeline states an asset moves through, in order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Stage {
    Pending,
    Loaded,
    Keyed,
    Sliced,
    Aligned,
    Resized,
    Composited,
    Written,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Pending => "PENDING",
            Stage::Loaded => "LOADED",
            Stage::Keyed => "KEYED",
            Stage::Sliced => "SLICED",
            Stage::Aligned => "ALIGNED",
            Stage::Resized => "RESIZED",
            Stage::Composited => "COMPOSITED",
            Stage::Written => "WRITTEN",
        };
        write!(f, "{}", s)
    }
}

/// How frames are cropped before resizing.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum AlignMode {
    /// One shared box for every frame; keeps the subject anchored.
    #[default]
    Uniform,
    /// Each frame cropped to its own content.
    PerFrame,
}

impl std::fmt::Display for AlignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignMode::Uniform => write!(f, "Uniform"),
            AlignMode::PerFrame => write!(f, "PerFrame"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for ResizeAlg {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_clamps_to_canvas() {
        let b = BoundingBox::new(3, 20, 60, 30).expand_clamped(10, 72, 32);
        assert_eq!(b, BoundingBox::new(0, 10, 70, 32));
    }

    #[test]
    fn union_covers_both() {
        let a = BoundingBox::new(5, 5, 10, 10);
        let b = BoundingBox::new(2, 7, 8, 20);
        assert_eq!(a.union(&b), BoundingBox::new(2, 5, 10, 20));
        assert_eq!(a.union(&b).width(), 8);
        assert_eq!(a.union(&b).height(), 15);
    }

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Pending < Stage::Loaded);
        assert!(Stage::Composited < Stage::Written);
        assert_eq!(Stage::Aligned.to_string(), "ALIGNED");
    }
}
