use clap::ArgMatches;

use crate::error::AppError;

/// Connection values supplied on the command line.
///
/// Every field holds its type's zero value (`""` or `0`) when the option was
/// not given; the merge step treats zero values as "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOverrides {
    pub path: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub schema: String,
}

impl ParsedOverrides {
    /// Read the `dir`, `host`, `port`, `user`, `password` and `schema` options
    /// out of a parsed argument set.
    ///
    /// # Errors
    ///
    /// Fails on the first option that is undefined or holds a value of the
    /// wrong type, naming that option.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, AppError> {
        Ok(Self {
            path: string_option(matches, "dir")?,
            host: string_option(matches, "host")?,
            port: port_option(matches, "port")?,
            user: string_option(matches, "user")?,
            password: string_option(matches, "password")?,
            schema: string_option(matches, "schema")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn string_option(matches: &ArgMatches, name: &str) -> Result<String, AppError> {
    matches
        .try_get_one::<String>(name)
        .map(|value| value.cloned().unwrap_or_default())
        .map_err(|err| {
            tracing::debug!(option = name, error = %err, "failed to read option");
            AppError::invalid_flag(name)
        })
}

fn port_option(matches: &ArgMatches, name: &str) -> Result<u16, AppError> {
    matches
        .try_get_one::<u16>(name)
        .map(|value| value.copied().unwrap_or_default())
        .map_err(|err| {
            tracing::debug!(option = name, error = %err, "failed to read option");
            AppError::invalid_flag(name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use clap::{Arg, Command};

    fn command() -> Command {
        Command::new("test")
            .arg(Arg::new("dir").long("dir"))
            .arg(Arg::new("host").long("host"))
            .arg(
                Arg::new("port")
                    .long("port")
                    .value_parser(clap::value_parser!(u16)),
            )
            .arg(Arg::new("user").long("user"))
            .arg(Arg::new("password").long("password"))
            .arg(Arg::new("schema").long("schema"))
    }

    #[test]
    fn reads_all_supplied_options() {
        let matches = command().get_matches_from([
            "test",
            "--dir",
            "schemas",
            "--host",
            "db1",
            "--port",
            "3307",
            "--user",
            "app",
            "--password",
            "secret",
            "--schema",
            "shop",
        ]);
        let parsed = ParsedOverrides::from_matches(&matches).expect("parse");
        assert_eq!(
            parsed,
            ParsedOverrides {
                path: "schemas".to_string(),
                host: "db1".to_string(),
                port: 3307,
                user: "app".to_string(),
                password: "secret".to_string(),
                schema: "shop".to_string(),
            }
        );
    }

    #[test]
    fn missing_options_are_zero_values() {
        let matches = command().get_matches_from(["test"]);
        let parsed = ParsedOverrides::from_matches(&matches).expect("parse");
        assert!(parsed.is_empty());
    }

    #[test]
    fn wrong_type_names_the_option() {
        let cmd = Command::new("test")
            .arg(Arg::new("dir").long("dir"))
            .arg(Arg::new("host").long("host"))
            .arg(Arg::new("port").long("port"));
        let matches = cmd.get_matches_from(["test", "--port", "3307"]);
        let err = ParsedOverrides::from_matches(&matches).expect_err("type mismatch");
        assert_eq!(err.kind, ErrorKind::Flag);
        assert_eq!(err.message, "Invalid value for --port option");
    }

    #[test]
    fn undefined_option_fails() {
        let cmd = Command::new("test").arg(Arg::new("dir").long("dir"));
        let matches = cmd.get_matches_from(["test"]);
        let err = ParsedOverrides::from_matches(&matches).expect_err("undefined");
        assert_eq!(err.message, "Invalid value for --host option");
    }
}
