use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::AssetConfig;
use crate::error::{Error, Result};
use crate::types::{FrameSize, GridShape};

/// Sidecar describing a written strip for the game's animation loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripManifest {
    pub name: String,
    pub type_id: u32,
    pub description: String,
    pub image: String,
    pub frame_size: FrameSize,
    pub frame_count: usize,
    pub source_grid: GridShape,
}

impl StripManifest {
    pub fn for_asset(config: &AssetConfig, frame_count: usize) -> Self {
        let image = config
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name: config.name.clone(),
            type_id: config.type_id,
            description: config.description.clone(),
            image,
            frame_size: config.frame_size,
            frame_count,
            source_grid: config.grid,
        }
    }
}

pub fn manifest_path(output_image: &Path) -> PathBuf {
    output_image.with_extension("json")
}

/// Write `manifest` as pretty JSON next to `output_image`; returns the sidecar path.
pub fn write_strip_manifest(output_image: &Path, manifest: &StripManifest) -> Result<PathBuf> {
    let path = manifest_path(output_image);
    let write_error = |e: std::io::Error| Error::Write {
        path: path.clone(),
        source: image::ImageError::IoError(e),
    };

    let mut writer = BufWriter::new(File::create(&path).map_err(write_error)?);
    serde_json::to_writer_pretty(&mut writer, manifest).map_err(|e| write_error(e.into()))?;
    writeln!(writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetConfig::new(
            "tetra",
            dir.path().join("in.png"),
            dir.path().join("fish-1.png"),
            1,
            FrameSize::new(72, 32),
            GridShape::new(5, 5),
            "Neon Tetra - Small fish",
        );
        let manifest = StripManifest::for_asset(&config, 25);

        let path = write_strip_manifest(&config.output, &manifest).unwrap();

        assert_eq!(path, dir.path().join("fish-1.json"));
        let text = std::fs::read_to_string(&path).unwrap();
        let back: StripManifest = serde_json::from_str(&text).unwrap();
        assert_eq!(back, manifest);
        assert_eq!(back.image, "fish-1.png");
        assert_eq!(back.frame_count, 25);
    }

    #[test]
    fn unwritable_sidecar_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing_dir").join("fish-1.png");
        let config = AssetConfig::new(
            "tetra",
            dir.path().join("in.png"),
            &output,
            1,
            FrameSize::new(72, 32),
            GridShape::new(5, 5),
            "Neon Tetra - Small fish",
        );

        let err = write_strip_manifest(&output, &StripManifest::for_asset(&config, 25)).unwrap_err();
        assert!(matches!(err, Error::Write { .. }), "got {err}");
    }
}
