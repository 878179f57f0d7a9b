use std::io;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap_complete::{Shell, generate};

use crate::cli::{CliArgs, CompletionsArgs, build_cli};

pub fn run(_args: &CliArgs, cmd: &CompletionsArgs) -> Result<()> {
    let name = cmd
        .shell
        .as_deref()
        .ok_or_else(|| anyhow!("--shell is required"))?;
    // The argument parser already limits the choices to shells clap_complete knows.
    let shell = Shell::from_str(name).map_err(|err| anyhow!("Unsupported shell {}: {}", name, err))?;

    let mut cli = build_cli();
    let bin_name = cli.get_name().to_string();
    generate(shell, &mut cli, bin_name, &mut io::stdout());
    Ok(())
}
