use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use serde::Serialize;

use crate::error::{AppError, ErrorKind};

pub const SUPPORTED_DRIVERS: &[&str] = &["mysql"];

/// One physical database server, identified by its base DSN.
///
/// Handles for individual schemas are created on demand and cached, so every
/// target pointing at the same server and schema ends up with the same handle.
#[derive(Debug)]
pub struct Instance {
    driver: String,
    base_dsn: String,
    handles: Mutex<HashMap<String, Arc<DbHandle>>>,
}

/// Connection description for one schema on an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbHandle {
    pub driver: String,
    pub dsn: String,
    pub schema: String,
}

impl Instance {
    pub fn new(driver: &str, base_dsn: &str) -> Self {
        tracing::debug!(driver, "creating instance");
        Self {
            driver: driver.to_string(),
            base_dsn: base_dsn.to_string(),
            handles: Mutex::new(HashMap::new()),
        }
    }

    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn base_dsn(&self) -> &str {
        &self.base_dsn
    }

    /// Handle for `schema` on this instance. An empty schema addresses the
    /// server without selecting a default database.
    ///
    /// # Errors
    ///
    /// Returns a connection error if the driver is not supported.
    pub fn connect(&self, schema: &str) -> Result<Arc<DbHandle>> {
        if !SUPPORTED_DRIVERS.contains(&self.driver.as_str()) {
            return Err(AppError::new(
                ErrorKind::Connection,
                format!("Unsupported driver: {}", self.driver),
            )
            .into());
        }

        let mut handles = self
            .handles
            .lock()
            .map_err(|_| AppError::new(ErrorKind::Internal, "instance handle cache poisoned"))?;
        let handle = handles.entry(schema.to_string()).or_insert_with(|| {
            Arc::new(DbHandle {
                driver: self.driver.clone(),
                dsn: format!("{}{}", self.base_dsn, schema),
                schema: schema.to_string(),
            })
        });
        Ok(Arc::clone(handle))
    }

    /// Number of distinct schema handles created so far.
    pub fn handle_count(&self) -> usize {
        self.handles.lock().map(|handles| handles.len()).unwrap_or(0)
    }
}
