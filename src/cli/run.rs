//! Handler for the `run` command.

use rand::thread_rng;
use serde_json::json;
use tracing::info;

use crate::app::{self, FileOutcome, RunSummary};
use crate::cli::{output, prompt, RunArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the run command.
pub fn execute(args: &RunArgs) -> Result<()> {
    // An explicitly chosen config file must exist; the default location
    // is optional.
    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::load_or_default(Config::DEFAULT_PATH)?,
    };

    // Apply CLI overrides
    if let Some(ref input_dir) = args.input_dir {
        config.scan.input_dir = input_dir.clone();
    }
    if let Some(ref output_dir) = args.output_dir {
        config.scan.output_dir = output_dir.clone();
    }
    if let Some(window) = args.window {
        config.scan.window = window;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.validate()?;

    output::set_json(args.json);
    config.init_logging();

    // The limit must be known before any file is touched: a malformed
    // value aborts the whole run with nothing processed.
    let max_files = match args.max_files {
        Some(ref raw) => prompt::parse_max_files(raw)?,
        None => {
            output::note(format!(
                "Scanning each exchange folder under {} for price outliers",
                config.scan.input_dir.display()
            ));
            prompt::max_files()?
        }
    };

    info!(max_files, window = config.scan.window, "starting scan");

    let summary = app::run(&config, max_files, &mut thread_rng())?;
    report(&summary);

    Ok(())
}

fn report(summary: &RunSummary) {
    if output::is_json() {
        output::json_payload(json!({
            "output_root": &summary.output_root,
            "processed": summary.processed(),
            "skipped": summary.skipped(),
            "without_outliers": summary.without_outliers(),
            "files": summary
                .outcomes
                .iter()
                .map(|outcome| match outcome {
                    FileOutcome::Processed { path, outliers } => json!({
                        "path": path,
                        "status": "processed",
                        "outliers": outliers,
                    }),
                    FileOutcome::Skipped { path, reason } => json!({
                        "path": path,
                        "status": "skipped",
                        "reason": reason,
                    }),
                })
                .collect::<Vec<_>>(),
            "exchanges_without_files": &summary.exchanges_without_files,
        }));
        return;
    }

    output::section("Results");
    for outcome in &summary.outcomes {
        match outcome {
            FileOutcome::Processed { path, outliers: 0 } => output::note(format!(
                "{}: sample produced no outliers (output file still created)",
                path.display()
            )),
            FileOutcome::Processed { path, outliers } => {
                output::success(format!("{}: {outliers} outlier row(s)", path.display()));
            }
            FileOutcome::Skipped { path, reason } => {
                output::warning(format!("skipped {}: {reason}", path.display()));
            }
        }
    }
    for exchange in &summary.exchanges_without_files {
        output::warning(format!(
            "{} contains no valid price files",
            exchange.display()
        ));
    }
    output::note(format!(
        "results written to {}",
        summary.output_root.display()
    ));
}
