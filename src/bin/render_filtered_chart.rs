use std::fs;
use std::path::PathBuf;

use filter_chart::api::{FilterChart, FilterChartConfig, ToggleOutcome};
use filter_chart::core::{DatasetStore, sample_dataset};
use filter_chart::render::SvgRenderer;
use filter_chart::telemetry::init_default_tracing;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct CliArgs {
    data_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    toggles: Vec<String>,
    snapshot: bool,
    out_path: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let output = execute(&args)?;

    match &args.out_path {
        Some(path) => {
            fs::write(path, output)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            info!(path = %path.display(), "chart written");
        }
        None => print!("{output}"),
    }
    Ok(())
}

/// Loads inputs, applies the toggles in order and returns the text to emit.
fn execute(args: &CliArgs) -> Result<String, String> {
    let store = match &args.data_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            DatasetStore::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => sample_dataset().map_err(|err| err.to_string())?,
    };
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            serde_json::from_str::<FilterChartConfig>(&raw)
                .map_err(|err| format!("invalid config json: {err}"))?
        }
        None => FilterChartConfig::default(),
    };

    let mut chart =
        FilterChart::new(SvgRenderer::new(), config, store).map_err(|err| err.to_string())?;
    chart.render().map_err(|err| err.to_string())?;

    for id in &args.toggles {
        if chart.toggle(id) == ToggleOutcome::UnknownId {
            warn!(id = id.as_str(), "no item with this id");
        }
        // A later successful redraw clears the stored error.
        if let Some(err) = chart.last_render_error() {
            return Err(format!("redraw after toggling `{id}` failed: {err}"));
        }
    }

    if args.snapshot {
        let mut json = chart
            .snapshot()
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(chart.with_renderer(|renderer| renderer.document().to_owned()))
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path = None;
    let mut config_path = None;
    let mut toggles = Vec::new();
    let mut snapshot = false;
    let mut out_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--toggle" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --toggle".to_owned())?;
                toggles.push(value);
            }
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out".to_owned())?;
                out_path = Some(PathBuf::from(value));
            }
            "--snapshot" => snapshot = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin render_filtered_chart -- [--data <items.json>] [--config <config.json>] [--toggle <id>]... [--snapshot] [--out <path>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        data_path,
        config_path,
        toggles,
        snapshot,
        out_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_chart::api::SelectionSnapshot;

    fn snapshot_of(output: &str) -> SelectionSnapshot {
        SelectionSnapshot::from_json_compat_str(output).expect("snapshot json")
    }

    #[test]
    fn unknown_toggle_is_skipped_and_known_ones_apply() {
        let args = CliArgs {
            toggles: vec!["d2".to_owned(), "zz".to_owned()],
            snapshot: true,
            ..CliArgs::default()
        };
        let output = execute(&args).expect("execute");
        let snapshot = snapshot_of(&output);
        assert_eq!(snapshot.visible_ids, vec!["d1", "d3", "d4"]);
        assert_eq!(snapshot.excluded_ids, vec!["d2"]);
    }

    #[test]
    fn snapshot_output_is_a_versioned_contract() {
        let args = CliArgs {
            snapshot: true,
            ..CliArgs::default()
        };
        let output = execute(&args).expect("execute");
        assert!(output.contains("\"schema_version\": 1"));
        assert!(output.ends_with('\n'));
        assert!(snapshot_of(&output).excluded_ids.is_empty());
    }

    #[test]
    fn default_output_is_the_svg_document() {
        let args = CliArgs {
            toggles: vec!["d1".to_owned()],
            ..CliArgs::default()
        };
        let output = execute(&args).expect("execute");
        assert!(output.starts_with("<svg"));
        assert!(!output.contains("data-id=\"d1\""));
        assert!(output.contains("data-id=\"d2\""));
    }

    #[test]
    fn unreadable_data_file_is_reported() {
        let args = CliArgs {
            data_path: Some(std::env::temp_dir().join("filter-chart-missing-items.json")),
            ..CliArgs::default()
        };
        let err = execute(&args).expect_err("missing file must fail");
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn malformed_data_file_is_reported() {
        let path = std::env::temp_dir().join(format!(
            "filter-chart-bad-items-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"[{"id":"d1","value":"ten","region":"USA"}]"#).expect("write fixture");
        let args = CliArgs {
            data_path: Some(path.clone()),
            ..CliArgs::default()
        };
        let result = execute(&args);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }
}
