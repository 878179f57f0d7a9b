use serde::Deserialize;

/// Contents of one `.schemactl.{yaml,yml,json}` option file.
///
/// Every field is optional; unset fields are inherited from the parent
/// directory (or the global file).
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub password_env: Option<String>,
    pub schema: Option<String>,
    pub driver: Option<String>,
}

impl OptionFile {
    /// Layer `child` over `self`; fields set in `child` win.
    pub fn overlay(&self, child: &OptionFile) -> OptionFile {
        // An explicit password in a parent must not shadow a child's passwordEnv.
        let (password, password_env) = if child.password.is_some() || child.password_env.is_some()
        {
            (child.password.clone(), child.password_env.clone())
        } else {
            (self.password.clone(), self.password_env.clone())
        };
        OptionFile {
            host: child.host.clone().or_else(|| self.host.clone()),
            port: child.port.or(self.port),
            user: child.user.clone().or_else(|| self.user.clone()),
            password,
            password_env,
            schema: child.schema.clone().or_else(|| self.schema.clone()),
            driver: child.driver.clone().or_else(|| self.driver.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Markdown,
    Json,
}
