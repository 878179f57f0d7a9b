mod common;
mod completions;
mod config;
mod connect;
mod dsn;
mod instances;
mod targets;

use anyhow::Result;

use crate::cli::{CliArgs, CommandKind};

pub fn dispatch(args: &CliArgs) -> Result<()> {
    match &args.command {
        CommandKind::Targets(cmd) => targets::run(args, cmd),
        CommandKind::Dsn(cmd) => dsn::run(args, cmd),
        CommandKind::Instances(cmd) => instances::run(args, cmd),
        CommandKind::Connect(cmd) => connect::run(args, cmd),
        CommandKind::Config(_) => config::run(args),
        CommandKind::Completions(cmd) => completions::run(args, cmd),
    }
}
