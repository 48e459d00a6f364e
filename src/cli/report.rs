use spritestrip::{AssetConfig, BatchReport};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn render_banner() -> String {
    format!(
        "\n{rule}\nSPRITESHEET STRIP PROCESSOR\n{rule}\n\n\
         This run will:\n  \
         1. Remove black backgrounds -> transparent\n  \
         2. Extract every frame of each grid\n  \
         3. Crop all frames to one shared content box\n  \
         4. Resize to target dimensions\n  \
         5. Export as horizontal sprite strips\n",
        rule = rule()
    )
}

pub fn render_asset_list(assets: &[AssetConfig]) -> String {
    assets
        .iter()
        .map(|asset| {
            format!(
                "{:<20} {:>9} grid {:<5} {}\n",
                asset.name,
                asset.frame_size.to_string(),
                asset.grid.to_string(),
                asset.description
            )
        })
        .collect()
}

pub fn render_unknown_asset(name: &str, available: &[String]) -> String {
    format!(
        "\nError: Unknown asset '{}'\nAvailable assets: {}\n",
        name,
        available.join(", ")
    )
}

pub fn render_summary(report: &BatchReport) -> String {
    let mut out = format!("\n{rule}\nPROCESSING SUMMARY\n{rule}\n", rule = rule());

    for outcome in &report.outcomes {
        let status = if outcome.succeeded() { "✓" } else { "✗" };
        out.push_str(&format!(
            "{} {:<20} - {}\n",
            status, outcome.name, outcome.description
        ));
    }

    out.push_str(&format!(
        "\nCompleted: {}/{} assets processed successfully\n",
        report.succeeded(),
        report.total()
    ));

    if report.all_succeeded() {
        out.push_str(
            "\nAll spritesheets processed successfully!\n\n\
             Next steps:\n  \
             1. Check the output directories for the new strips\n  \
             2. Run the game to test animations\n  \
             3. Adjust frame extraction if timing feels off\n",
        );
    } else {
        out.push_str("\nFailed assets:\n");
        for outcome in report.failures() {
            if let Err(failure) = &outcome.result {
                out.push_str(&format!(
                    "  {} ({}): {}\n",
                    outcome.name, failure.stage, failure.source
                ));
            }
        }
        out.push_str("\nSome assets failed to process. Check errors above.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use spritestrip::{AssetFailure, AssetOutcome, Error, FrameSize, Stage, StripSummary};
    use std::path::PathBuf;

    fn ok(name: &str) -> AssetOutcome {
        AssetOutcome {
            name: name.to_string(),
            description: format!("{name} desc"),
            result: Ok(StripSummary {
                output: PathBuf::from(format!("{name}.png")),
                frame_count: 25,
                frame_size: FrameSize::new(72, 32),
                width: 1800,
                height: 32,
                bbox: None,
                manifest: None,
            }),
        }
    }

    fn failed(name: &str) -> AssetOutcome {
        AssetOutcome {
            name: name.to_string(),
            description: format!("{name} desc"),
            result: Err(AssetFailure {
                asset: name.to_string(),
                stage: Stage::Loaded,
                source: Error::InputNotFound {
                    path: PathBuf::from("missing.png"),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                },
            }),
        }
    }

    #[test]
    fn summary_counts_and_names_failures() {
        let mut outcomes: Vec<_> = (0..7).map(|i| ok(&format!("fish{i}"))).collect();
        outcomes.insert(3, failed("lionfish"));
        let report = BatchReport { outcomes };

        let text = render_summary(&report);

        assert!(text.contains("Completed: 7/8 assets processed successfully"));
        assert!(text.contains("✗ lionfish"));
        assert!(text.contains("✓ fish0"));
        assert!(text.contains("lionfish (LOADED)"));
        assert!(!text.contains("Next steps"));
    }

    #[test]
    fn full_success_prints_next_steps() {
        let report = BatchReport {
            outcomes: vec![ok("a"), ok("b")],
        };
        let text = render_summary(&report);
        assert!(text.contains("Completed: 2/2"));
        assert!(text.contains("Next steps"));
    }

    #[test]
    fn unknown_asset_lists_every_key() {
        let available = vec!["clownfish".to_string(), "tetra".to_string()];
        let text = render_unknown_asset("goldfish", &available);
        assert!(text.contains("Unknown asset 'goldfish'"));
        assert!(text.contains("Available assets: clownfish, tetra"));
    }

    #[test]
    fn banner_and_list_layout() {
        let banner = render_banner();
        assert!(banner.contains("SPRITESHEET STRIP PROCESSOR"));
        assert!(banner.contains("\n  1. Remove black backgrounds"));
        assert!(banner.contains("\n  5. Export as horizontal sprite strips\n"));

        let list = render_asset_list(spritestrip::catalog());
        assert_eq!(list.lines().count(), 8);
        assert!(list.lines().next().unwrap().starts_with("clownfish"));
    }
}
