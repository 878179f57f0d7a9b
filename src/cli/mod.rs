mod args;

pub use args::{
    CliArgs, CommandKind, CompletionsArgs, ConfigArgs, ConnectArgs, DsnArgs, InstancesArgs,
    OutputFlags, TargetsArgs, build_cli, parse_matches,
};
