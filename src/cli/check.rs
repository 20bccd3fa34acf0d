//! Handlers for the `check` subcommands.

use crate::cli::{output, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;

/// Validate a configuration file and report the outcome.
pub fn config(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::success(format!(
        "{} is valid: input root {}, window {}",
        args.config.display(),
        config.scan.input_dir.display(),
        config.scan.window
    ));

    Ok(())
}
