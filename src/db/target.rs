use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Result;

use super::instance::{DbHandle, Instance};
use crate::config::ParsedOverrides;

pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DRIVER: &str = "mysql";

/// One logical (host, schema) pair to operate on.
#[derive(Debug, Clone, Default)]
pub struct Target {
    pub host: String,
    /// Zero until resolved by [`Target::merge_overrides`].
    pub port: u16,
    pub user: String,
    pub password: String,
    pub schema: String,
    pub driver: String,
    /// Directory the target was defined in, if it came from an option file.
    pub dir: Option<PathBuf>,
    instance: OnceLock<Arc<Instance>>,
}

/// Outcome of looking for a `host:port` suffix in a host value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddedPort {
    /// No colon in the host.
    Absent,
    Parsed(u16),
    /// A colon was present but the remainder is not a usable port. Treated
    /// the same as `Absent` when defaulting.
    Invalid(String),
}

/// Split `host` on its first colon.
pub fn split_host_port(host: &str) -> (&str, EmbeddedPort) {
    match host.split_once(':') {
        None => (host, EmbeddedPort::Absent),
        Some((host_part, port_part)) => match port_part.parse::<u16>() {
            Ok(port) => (host_part, EmbeddedPort::Parsed(port)),
            Err(_) => (host_part, EmbeddedPort::Invalid(port_part.to_string())),
        },
    }
}

impl Target {
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            ..Self::default()
        }
    }

    /// Apply command-line overrides, then fill in anything still unresolved.
    ///
    /// Non-empty override values replace file values; empty strings and a
    /// zero port are ignored. Defaulting runs even when `overrides` is `None`.
    pub fn merge_overrides(&mut self, overrides: Option<&ParsedOverrides>) {
        if let Some(cli) = overrides {
            if !cli.host.is_empty() {
                self.host = cli.host.clone();
            }
            if cli.port != 0 {
                self.port = cli.port;
            }
            if !cli.user.is_empty() {
                self.user = cli.user.clone();
            }
            if !cli.password.is_empty() {
                self.password = cli.password.clone();
            }
            if !cli.schema.is_empty() {
                self.schema = cli.schema.clone();
            }
        }

        if self.user.is_empty() {
            self.user = DEFAULT_USER.to_string();
        }
        if self.host.is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            self.resolve_embedded_port();
            if self.port == 0 {
                self.port = DEFAULT_PORT;
            }
        }
    }

    fn resolve_embedded_port(&mut self) {
        let (host, port) = split_host_port(&self.host);
        let host = host.to_string();
        match port {
            EmbeddedPort::Absent => return,
            EmbeddedPort::Parsed(port) => self.port = port,
            EmbeddedPort::Invalid(raw) => {
                tracing::debug!(host = %host, port = %raw, "ignoring unparseable port in host");
            }
        }
        self.host = if host.is_empty() {
            DEFAULT_HOST.to_string()
        } else {
            host
        };
    }

    /// DSN without a trailing schema name.
    pub fn base_dsn(&self) -> String {
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!("{}@tcp({}:{})/", credentials, self.host, self.port)
    }

    pub fn dsn(&self) -> String {
        self.base_dsn() + &self.schema
    }

    pub fn host_and_optional_port(&self) -> String {
        if self.port == DEFAULT_PORT {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// The target's instance, created on first access if bulk hydration has
    /// not assigned a shared one.
    pub fn instance(&self) -> &Arc<Instance> {
        self.instance
            .get_or_init(|| Arc::new(Instance::new(&self.driver, &self.base_dsn())))
    }

    pub fn has_instance(&self) -> bool {
        self.instance.get().is_some()
    }

    pub(crate) fn set_instance(&mut self, instance: Arc<Instance>) {
        self.instance = OnceLock::from(instance);
    }

    pub fn db(&self) -> Result<Arc<DbHandle>> {
        self.instance().connect(&self.schema)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schema.is_empty() {
            write!(f, "{}", self.host_and_optional_port())
        } else {
            write!(f, "{} {}", self.host_and_optional_port(), self.schema)
        }
    }
}
