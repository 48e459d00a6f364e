#![doc = r#"
spritestrip — turn grid spritesheets into aligned animation strips.

Each configured asset is a spritesheet drawn on a black background with its
animation frames laid out in a uniform grid. The pipeline keys the black
background out to transparency, slices the grid, computes one bounding box
shared by every frame (so the subject does not jitter during playback),
crops and resizes every frame to the asset's target size, and writes the
frames side by side into a single PNG strip.

It powers the `spritestrip` CLI and can be embedded directly.

Process one asset
-----------------
```rust,no_run
use spritestrip::{find_asset, process_asset, ProcessingParams};

fn main() {
    let asset = find_asset("clownfish").expect("configured asset");
    match process_asset(asset, &ProcessingParams::default()) {
        Ok(summary) => println!(
            "{} frames -> {}x{} at {}",
            summary.frame_count,
            summary.width,
            summary.height,
            summary.output.display()
        ),
        Err(failure) => eprintln!("{failure}"),
    }
}
```

Process your own table
----------------------
```rust,no_run
use spritestrip::{
    process_batch, AlignMode, AssetConfig, FrameSize, GridShape, ProcessingParams,
};

let assets = vec![AssetConfig::new(
    "crab",
    "art/crab_sheet.png",
    "build/crab.png",
    30,
    FrameSize::new(64, 48),
    GridShape::new(4, 4),
    "Crab - Small critter",
)];
let params = ProcessingParams {
    align: AlignMode::Uniform,
    write_manifest: true,
    ..ProcessingParams::default()
};

let report = process_batch(&assets, &params);
println!("{}/{} succeeded", report.succeeded(), report.total());
```

Error handling
--------------
Pipeline primitives return `spritestrip::Result<T>`. `process_asset` wraps
the underlying [`Error`] in an [`AssetFailure`] that also records the
[`Stage`] whose transition failed.

Useful modules
--------------
- [`api`] — `process_asset`, `process_batch` and the batch report types.
- [`catalog`] — the built-in asset table.
- [`core`] — keying, slicing, alignment, resizing and strip assembly.
- [`io`] — image loading and the PNG / JSON sidecar writers.
- [`types`] — geometry and selector types.
"#]

pub mod api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use catalog::{AssetConfig, asset_names, catalog, find_asset};
pub use crate::core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{AlignMode, BoundingBox, FrameSize, GridShape, ResampleFilter, Stage};

// Pipeline primitives
pub use crate::core::processing::bounds::{content_bounds, frame_bounds, uniform_bounds};
pub use crate::core::processing::keying::{key_background, key_background_in_place};
pub use crate::core::processing::resize::{normalize_frame, resize_rgba_image};
pub use crate::core::processing::slicing::slice_grid;
pub use crate::core::processing::strip::assemble_strip;

// High-level API re-exports
pub use api::{AssetFailure, AssetOutcome, BatchReport, StripSummary, process_asset, process_batch};
