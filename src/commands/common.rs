use anyhow::Result;

use crate::cli::CliArgs;
use crate::config::{self, OutputFormat, ResolvedConfig};
use crate::error::{AppError, ErrorKind};
use crate::output;

pub fn load_config(args: &CliArgs) -> Result<ResolvedConfig> {
    config::load_from_system(&args.overrides)
        .map_err(|err| AppError::new(ErrorKind::Config, format!("{:#}", err)).into())
}

pub fn output_format(args: &CliArgs) -> OutputFormat {
    output::select_format(&args.output)
}

/// Print a rendered body unless `--quiet` was given.
pub fn emit(args: &CliArgs, body: &str) {
    if !args.quiet {
        println!("{}", body);
    }
}
