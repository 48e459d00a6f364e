//! High-level library API: run one asset through the strip pipeline, or a
//! whole table of assets with per-asset failure isolation. Prefer these
//! entrypoints over the low-level processing modules.
use std::path::PathBuf;

use image::RgbaImage;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog::AssetConfig;
use crate::core::params::ProcessingParams;
use crate::core::processing::bounds::{frame_bounds, uniform_bounds};
use crate::core::processing::keying::key_background;
use crate::core::processing::resize::normalize_frame;
use crate::core::processing::slicing::slice_grid;
use crate::core::processing::strip::assemble_strip;
use crate::error::{Error, Result};
use crate::io::reader::load_image;
use crate::io::writers::manifest::{StripManifest, write_strip_manifest};
use crate::io::writers::png::write_png;
use crate::types::{AlignMode, BoundingBox, FrameSize, Stage};

/// An asset that did not reach `Stage::Written`.
#[derive(Debug, Error)]
#[error("{asset} failed at {stage}: {source}")]
pub struct AssetFailure {
    pub asset: String,
    /// The state the failed transition was heading for
    pub stage: Stage,
    #[source]
    pub source: Error,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripSummary {
    pub output: PathBuf,
    pub frame_count: usize,
    pub frame_size: FrameSize,
    pub width: u32,
    pub height: u32,
    /// Shared crop box; `None` in per-frame mode
    pub bbox: Option<BoundingBox>,
    pub manifest: Option<PathBuf>,
}

#[derive(Debug)]
pub struct AssetOutcome {
    pub name: String,
    pub description: String,
    pub result: std::result::Result<StripSummary, AssetFailure>,
}

impl AssetOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-asset outcomes of a batch, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Tracks the current pipeline state and tags errors with the transition
/// that produced them.
struct StageTracker<'a> {
    asset: &'a str,
    stage: Stage,
}

impl<'a> StageTracker<'a> {
    fn new(asset: &'a str) -> Self {
        Self {
            asset,
            stage: Stage::Pending,
        }
    }

    fn advance<T>(
        &mut self,
        next: Stage,
        step: Result<T>,
    ) -> std::result::Result<T, AssetFailure> {
        match step {
            Ok(value) => {
                debug!("{}: {} -> {}", self.asset, self.stage, next);
                self.stage = next;
                Ok(value)
            }
            Err(source) => Err(AssetFailure {
                asset: self.asset.to_string(),
                stage: next,
                source,
            }),
        }
    }
}

/// Crop boxes for every frame according to `params.align`. Also returns the
/// shared box in uniform mode.
fn alignment_boxes(
    frames: &[RgbaImage],
    params: &ProcessingParams,
) -> Result<(Vec<BoundingBox>, Option<BoundingBox>)> {
    match params.align {
        AlignMode::Uniform => {
            let bbox = uniform_bounds(frames, params.uniform_padding)
                .ok_or_else(|| Error::geometry("no frames to align"))?;
            info!("✓ Calculated uniform bounding box: {}", bbox);
            Ok((vec![bbox; frames.len()], Some(bbox)))
        }
        AlignMode::PerFrame => {
            if frames.is_empty() {
                return Err(Error::geometry("no frames to align"));
            }
            let boxes = frames
                .iter()
                .map(|f| frame_bounds(f, params.frame_padding))
                .collect::<Vec<_>>();
            info!("✓ Calculated per-frame content boxes");
            Ok((boxes, None))
        }
    }
}

/// Run one asset through every stage from `PENDING` to `WRITTEN`.
pub fn process_asset(
    config: &AssetConfig,
    params: &ProcessingParams,
) -> std::result::Result<StripSummary, AssetFailure> {
    let mut tracker = StageTracker::new(&config.name);

    let source = tracker.advance(Stage::Loaded, load_image(&config.input))?;

    let keyed = tracker.advance(Stage::Keyed, Ok(key_background(&source, params.threshold)))?;
    drop(source);
    info!("✓ Removed black background");

    let frames = tracker.advance(Stage::Sliced, slice_grid(&keyed, config.grid, None))?;
    drop(keyed);
    info!(
        "✓ Extracted {} frames from {} grid",
        frames.len(),
        config.grid
    );

    let (boxes, shared_bbox) = tracker.advance(Stage::Aligned, alignment_boxes(&frames, params))?;

    let normalized = tracker.advance(
        Stage::Resized,
        frames
            .iter()
            .zip(&boxes)
            .map(|(frame, bbox)| normalize_frame(frame, bbox, config.frame_size, params.filter))
            .collect::<Result<Vec<_>>>(),
    )?;
    info!(
        "✓ Processed {} frames to {} ({} alignment)",
        normalized.len(),
        config.frame_size,
        params.align
    );

    let strip = tracker.advance(
        Stage::Composited,
        assemble_strip(&normalized, config.frame_size),
    )?;

    let manifest = tracker.advance(
        Stage::Written,
        write_outputs(config, params, &strip, normalized.len()),
    )?;
    info!("✓ Saved spritesheet: {}", config.output.display());
    info!("✓ Final dimensions: {}x{}", strip.width(), strip.height());

    Ok(StripSummary {
        output: config.output.clone(),
        frame_count: normalized.len(),
        frame_size: config.frame_size,
        width: strip.width(),
        height: strip.height(),
        bbox: shared_bbox,
        manifest,
    })
}

fn write_outputs(
    config: &AssetConfig,
    params: &ProcessingParams,
    strip: &RgbaImage,
    frame_count: usize,
) -> Result<Option<PathBuf>> {
    write_png(&config.output, strip)?;
    if params.write_manifest {
        let manifest = StripManifest::for_asset(config, frame_count);
        let path = write_strip_manifest(&config.output, &manifest)?;
        info!("✓ Wrote manifest: {}", path.display());
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

/// Process every asset in order. A failing asset is logged and recorded; the
/// rest of the batch still runs.
pub fn process_batch(assets: &[AssetConfig], params: &ProcessingParams) -> BatchReport {
    let mut report = BatchReport::default();
    for config in assets {
        info!("{}", "=".repeat(60));
        info!("Processing: {}", config.description);
        info!("Input: {}", config.input.display());
        info!("Output: {}", config.output.display());
        info!("Target size: {}", config.frame_size);
        info!("{}", "=".repeat(60));

        let result = process_asset(config, params);
        if let Err(failure) = &result {
            error!(
                "✗ Error processing {} at {}: {}",
                config.description, failure.stage, failure.source
            );
        }
        report.outcomes.push(AssetOutcome {
            name: config.name.clone(),
            description: config.description.clone(),
            result,
        });
    }
    report
}
