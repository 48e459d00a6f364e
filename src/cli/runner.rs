use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use spritestrip::{AssetConfig, BatchReport, ProcessingParams, catalog, process_batch};

use super::args::CliArgs;
use super::errors::AppError;
use super::report::{render_asset_list, render_banner, render_summary, render_unknown_asset};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Plain progress lines unless debugging
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(verbose)
        .with_level(verbose)
        .try_init();
}

/// Narrow `table` to the requested asset, or keep all of it.
pub fn select_assets<'a>(
    table: &'a [AssetConfig],
    key: Option<&str>,
) -> Result<&'a [AssetConfig], AppError> {
    match key {
        None => Ok(table),
        Some(name) => table
            .iter()
            .find(|a| a.name == name)
            .map(std::slice::from_ref)
            .ok_or_else(|| AppError::UnknownAsset {
                name: name.to_string(),
                available: table.iter().map(|a| a.name.clone()).collect(),
            }),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    run_with_table(&args, catalog());
    Ok(())
}

/// Execute `args` against `table`. Returns the batch report, or `None` when
/// the invocation processed nothing (`--list` or an unknown asset key).
pub fn run_with_table(args: &CliArgs, table: &[AssetConfig]) -> Option<BatchReport> {
    if args.list {
        print!("{}", render_asset_list(table));
        return None;
    }

    print!("{}", render_banner());

    let assets = match select_assets(table, args.asset.as_deref()) {
        Ok(assets) => assets,
        Err(AppError::UnknownAsset { name, available }) => {
            print!("{}", render_unknown_asset(&name, &available));
            return None;
        }
    };

    let params = ProcessingParams {
        align: args.align,
        filter: args.filter,
        write_manifest: args.manifest,
        ..ProcessingParams::default()
    };
    debug!("Processing parameters: {:?}", params);
    info!("Processing {} asset(s)", assets.len());

    let report = process_batch(assets, &params);

    print!("{}", render_summary(&report));
    Some(report)
}
