use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

use crate::config::ParsedOverrides;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct OutputFlags {
    pub json: bool,
    pub markdown: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub overrides: ParsedOverrides,
    pub output: OutputFlags,
    pub verbose: u8,
    pub quiet: bool,
    pub command: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Targets(TargetsArgs),
    Dsn(DsnArgs),
    Instances(InstancesArgs),
    Connect(ConnectArgs),
    Config(ConfigArgs),
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetsArgs;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DsnArgs {
    pub base: bool,
    pub show_password: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstancesArgs;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectArgs {
    pub show_password: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionsArgs {
    pub shell: Option<String>,
}

pub fn build_cli() -> Command {
    let cmd = Command::new("schemactl")
        .about("Resolve database connection targets for schema directories")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand_value_name("COMMAND");

    add_global_args(cmd)
        .subcommand(command_targets())
        .subcommand(command_dsn())
        .subcommand(command_instances())
        .subcommand(command_connect())
        .subcommand(command_config())
        .subcommand(command_completions())
}

fn add_global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("dir")
            .long("dir")
            .value_name("PATH")
            .value_hint(ValueHint::DirPath)
            .global(true)
            .help("Directory tree to read option files from (default: current directory)"),
    )
    .arg(
        Arg::new("host")
            .long("host")
            .value_name("HOST")
            .global(true)
            .help("Database host, optionally with :PORT (default: 127.0.0.1)"),
    )
    .arg(
        Arg::new("port")
            .long("port")
            .value_name("PORT")
            .value_parser(clap::value_parser!(u16))
            .global(true)
            .help("Database port (default: 3306)"),
    )
    .arg(
        Arg::new("user")
            .long("user")
            .value_name("USER")
            .global(true)
            .help("Database user (default: root)"),
    )
    .arg(
        Arg::new("password")
            .long("password")
            .value_name("PASS")
            .global(true)
            .help("Database password"),
    )
    .arg(
        Arg::new("schema")
            .long("schema")
            .value_name("NAME")
            .global(true)
            .help("Schema name, replacing the one from option files"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Output as JSON"),
    )
    .arg(
        Arg::new("markdown")
            .long("markdown")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force markdown table output"),
    )
    .arg(
        Arg::new("pretty")
            .long("pretty")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force pretty-printed table output"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Enable debug logging"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Suppress non-error output"),
    )
}

fn show_password_arg() -> Arg {
    Arg::new("show-password")
        .long("show-password")
        .action(ArgAction::SetTrue)
        .help("Print passwords instead of masking them")
}

fn command_targets() -> Command {
    Command::new("targets")
        .about("List resolved targets")
        .visible_alias("ls")
}

fn command_dsn() -> Command {
    Command::new("dsn")
        .about("Print the connection string of every target")
        .arg(
            Arg::new("base")
                .long("base")
                .action(ArgAction::SetTrue)
                .help("Print each distinct base DSN once, without schema"),
        )
        .arg(show_password_arg())
}

fn command_instances() -> Command {
    Command::new("instances").about("Group targets by shared database instance")
}

fn command_connect() -> Command {
    Command::new("connect")
        .about("Resolve a connection handle for every target")
        .arg(show_password_arg())
}

fn command_config() -> Command {
    Command::new("config").about("Show option files and command-line overrides")
}

fn command_completions() -> Command {
    Command::new("completions")
        .about("Generate shell completion script")
        .arg(
            Arg::new("shell")
                .long("shell")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                .help("Shell to generate completions for"),
        )
}

pub fn parse_matches(matches: &ArgMatches) -> Result<CliArgs, AppError> {
    let overrides = ParsedOverrides::from_matches(matches)?;
    let output = OutputFlags {
        json: matches.get_flag("json"),
        markdown: matches.get_flag("markdown"),
        pretty: matches.get_flag("pretty"),
    };
    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let command = match matches.subcommand() {
        Some(("dsn", sub_m)) => CommandKind::Dsn(DsnArgs {
            base: sub_m.get_flag("base"),
            show_password: sub_m.get_flag("show-password"),
        }),
        Some(("instances", _)) => CommandKind::Instances(InstancesArgs),
        Some(("connect", sub_m)) => CommandKind::Connect(ConnectArgs {
            show_password: sub_m.get_flag("show-password"),
        }),
        Some(("config", _)) => CommandKind::Config(ConfigArgs),
        Some(("completions", sub_m)) => CommandKind::Completions(CompletionsArgs {
            shell: sub_m.get_one::<String>("shell").cloned(),
        }),
        _ => CommandKind::Targets(TargetsArgs),
    };

    Ok(CliArgs {
        overrides,
        output,
        verbose,
        quiet,
        command,
    })
}
