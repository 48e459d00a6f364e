use clap::Parser;

use spritestrip::{AlignMode, ResampleFilter};

#[derive(Parser)]
#[command(
    name = "spritestrip",
    version,
    about = "Convert black-background spritesheet grids into horizontal animation strips"
)]
pub struct CliArgs {
    /// Asset key to process; all configured assets when omitted
    pub asset: Option<String>,

    /// List configured assets and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Frame alignment (uniform keeps the subject anchored across frames)
    #[arg(long, value_enum, default_value_t = AlignMode::Uniform)]
    pub align: AlignMode,

    /// Resampling filter used when resizing frames
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Also write a JSON sidecar describing each strip
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_asset_is_optional() {
        let args = CliArgs::parse_from(["spritestrip"]);
        assert!(args.asset.is_none());
        assert_eq!(args.align, AlignMode::Uniform);
        assert_eq!(args.filter, ResampleFilter::Lanczos3);

        let args = CliArgs::parse_from(["spritestrip", "tetra", "--align", "per-frame", "--manifest"]);
        assert_eq!(args.asset.as_deref(), Some("tetra"));
        assert_eq!(args.align, AlignMode::PerFrame);
        assert!(args.manifest);
    }

    #[test]
    fn filter_is_selectable() {
        let args = CliArgs::parse_from(["spritestrip", "--filter", "catmull-rom"]);
        assert_eq!(args.filter, ResampleFilter::CatmullRom);
        assert!(CliArgs::try_parse_from(["spritestrip", "--filter", "cubic"]).is_err());
    }
}
