use std::collections::HashMap;
use std::path::Path;

/// Snapshot of the process environment, used to resolve `passwordEnv`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Capture the environment after loading `<root>/.env`, falling back to
    /// the usual `.env` lookup from the working directory. Variables already
    /// set in the process are never overwritten.
    pub fn from_system(root: &Path) -> Self {
        let local = root.join(".env");
        let loaded = if local.is_file() {
            dotenvy::from_path(&local).map(|_| local)
        } else {
            dotenvy::dotenv()
        };
        if let Ok(path) = loaded {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}
