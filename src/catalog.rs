//! The fixed asset table: one entry per spritesheet the pipeline knows about.
//! Built once on first access and never mutated afterwards.
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::{FrameSize, GridShape};

/// Descriptor of one spritesheet to convert into a strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub type_id: u32,
    pub frame_size: FrameSize,
    pub grid: GridShape,
    pub description: String,
}

impl AssetConfig {
    pub fn new(
        name: impl Into<String>,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        type_id: u32,
        frame_size: FrameSize,
        grid: GridShape,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output: output.into(),
            type_id,
            frame_size,
            grid,
            description: description.into(),
        }
    }
}

const FISH_GRID: GridShape = GridShape::new(5, 5);

fn fish(
    name: &str,
    input: &str,
    type_id: u32,
    frame_size: FrameSize,
    description: &str,
) -> AssetConfig {
    AssetConfig::new(
        name,
        format!("attached_assets/{input}"),
        format!("public/assets/spritesheets/fish/fish-{type_id}.png"),
        type_id,
        frame_size,
        FISH_GRID,
        description,
    )
}

static CATALOG: Lazy<Vec<AssetConfig>> = Lazy::new(|| {
    vec![
        fish(
            "clownfish",
            "IMG_0473_1763373451326.png",
            0,
            FrameSize::new(72, 32),
            "Clownfish - Small fish",
        ),
        fish(
            "tetra",
            "IMG_0470_1763373451326.png",
            1,
            FrameSize::new(72, 32),
            "Neon Tetra - Small fish",
        ),
        fish(
            "butterflyfish",
            "IMG_0471_1763373451326.png",
            2,
            FrameSize::new(80, 40),
            "Butterflyfish - Small fish",
        ),
        fish(
            "lionfish",
            "IMG_0472_1763373451326.png",
            6,
            FrameSize::new(128, 56),
            "Lionfish - Medium fish",
        ),
        fish(
            "triggerfish",
            "IMG_0474_1763373577665.png",
            9,
            FrameSize::new(120, 48),
            "Triggerfish - Medium fish",
        ),
        fish(
            "hammerhead",
            "IMG_0469_1763372445135.png",
            12,
            FrameSize::new(160, 40),
            "Hammerhead Shark - Large boss",
        ),
        fish(
            "manta_ray",
            "IMG_0468_1763373281234.png",
            14,
            FrameSize::new(224, 96),
            "Manta Ray - Large boss",
        ),
        fish(
            "rainbow_fish",
            "IMG_0467_1763373281234.png",
            21,
            FrameSize::new(112, 48),
            "Rainbow Wave Rider - Bonus fish",
        ),
    ]
});

/// All configured assets, in processing order.
pub fn catalog() -> &'static [AssetConfig] {
    &CATALOG
}

pub fn find_asset(name: &str) -> Option<&'static AssetConfig> {
    catalog().iter().find(|a| a.name == name)
}

pub fn asset_names() -> Vec<&'static str> {
    catalog().iter().map(|a| a.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_order_and_size() {
        assert_eq!(
            asset_names(),
            vec![
                "clownfish",
                "tetra",
                "butterflyfish",
                "lionfish",
                "triggerfish",
                "hammerhead",
                "manta_ray",
                "rainbow_fish",
            ]
        );
    }

    #[test]
    fn names_and_outputs_are_unique() {
        let names: HashSet<_> = catalog().iter().map(|a| &a.name).collect();
        let outputs: HashSet<_> = catalog().iter().map(|a| &a.output).collect();
        assert_eq!(names.len(), catalog().len());
        assert_eq!(outputs.len(), catalog().len());
    }

    #[test]
    fn lookup_by_key() {
        let manta = find_asset("manta_ray").unwrap();
        assert_eq!(manta.type_id, 14);
        assert_eq!(manta.frame_size, FrameSize::new(224, 96));
        assert_eq!(
            manta.output,
            PathBuf::from("public/assets/spritesheets/fish/fish-14.png")
        );
        assert!(find_asset("goldfish").is_none());
    }
}
