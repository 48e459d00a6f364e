use serde::{Deserialize, Serialize};

use crate::types::{AlignMode, ResampleFilter};

/// Processing parameters shared by every asset of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Pixels with R, G and B all below this value become transparent
    pub threshold: u8,
    /// Margin around the shared content box in `AlignMode::Uniform`
    pub uniform_padding: u32,
    /// Margin around each frame's own content box in `AlignMode::PerFrame`
    pub frame_padding: u32,
    pub filter: ResampleFilter,
    pub align: AlignMode,
    /// Also write a JSON sidecar next to each strip
    pub write_manifest: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            threshold: 30,
            uniform_padding: 10,
            frame_padding: 5,
            filter: ResampleFilter::Lanczos3,
            align: AlignMode::Uniform,
            write_manifest: false,
        }
    }
}
