use serde::Serialize;
use serde_json::json;

use crate::config::ResolvedConfig;
use crate::db::Target;

pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    emit_json(value, pretty)
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

/// JSON view of a merged target. Pass a redacted target to hide the password.
pub fn target_to_json(target: &Target) -> serde_json::Value {
    json!({
        "dir": target.dir.as_ref().map(|p| p.display().to_string()),
        "host": target.host,
        "port": target.port,
        "hostAndPort": target.host_and_optional_port(),
        "user": target.user,
        "hasPassword": !target.password.is_empty(),
        "schema": target.schema,
        "driver": target.driver,
        "baseDsn": target.base_dsn(),
        "dsn": target.dsn(),
    })
}

pub fn config_to_json(resolved: &ResolvedConfig) -> serde_json::Value {
    let overrides = &resolved.overrides;
    json!({
        "root": resolved.root.display().to_string(),
        "files": resolved
            .files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "overrides": {
            "dir": non_empty(&overrides.path),
            "host": non_empty(&overrides.host),
            "port": (overrides.port != 0).then_some(overrides.port),
            "user": non_empty(&overrides.user),
            "password": (!overrides.password.is_empty()).then_some(super::MASKED_PASSWORD),
            "schema": non_empty(&overrides.schema),
        },
        "targetCount": resolved.targets.len(),
    })
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
