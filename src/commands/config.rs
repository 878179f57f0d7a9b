use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{self, TableOptions, json, table};

pub fn run(args: &CliArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args);

    if matches!(format, OutputFormat::Json) {
        let body = json::emit_json_value(&json::config_to_json(&resolved), true)?;
        common::emit(args, &body);
        return Ok(());
    }

    let overrides = &resolved.overrides;
    let files = if resolved.files.is_empty() {
        "(none)".to_string()
    } else {
        resolved
            .files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };
    let password = if overrides.password.is_empty() {
        String::new()
    } else {
        output::MASKED_PASSWORD.to_string()
    };
    let port = if overrides.port == 0 {
        String::new()
    } else {
        overrides.port.to_string()
    };
    let rows = vec![
        ("root".to_string(), resolved.root.display().to_string()),
        ("files".to_string(), files),
        ("--host".to_string(), overrides.host.clone()),
        ("--port".to_string(), port),
        ("--user".to_string(), overrides.user.clone()),
        ("--password".to_string(), password),
        ("--schema".to_string(), overrides.schema.clone()),
        ("targets".to_string(), resolved.targets.len().to_string()),
    ];

    let rendered =
        table::render_key_value_table("Config", &rows, format, &TableOptions::default());
    common::emit(args, &rendered);
    Ok(())
}
