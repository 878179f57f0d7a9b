use anyhow::Result;

use crate::cli::{CliArgs, TargetsArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{self, TableOptions, json, table};

pub fn run(args: &CliArgs, _cmd: &TargetsArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args);

    if matches!(format, OutputFormat::Json) {
        let payload = resolved
            .targets
            .iter()
            .map(|target| json::target_to_json(&output::redacted(target)))
            .collect::<Vec<_>>();
        let body = json::emit_json(&payload, true)?;
        common::emit(args, &body);
        return Ok(());
    }

    let rows = resolved
        .targets
        .iter()
        .map(|target| {
            vec![
                target
                    .dir
                    .as_ref()
                    .and_then(|dir| dir.strip_prefix(&resolved.root).ok())
                    .map(|dir| {
                        let shown = dir.display().to_string();
                        if shown.is_empty() { ".".to_string() } else { shown }
                    })
                    .unwrap_or_default(),
                target.host_and_optional_port(),
                target.user.clone(),
                target.schema.clone(),
                target.driver.clone(),
            ]
        })
        .collect::<Vec<_>>();

    let rendered = table::render_table(
        &["Dir", "Host", "User", "Schema", "Driver"],
        &rows,
        format,
        &TableOptions::default(),
    );
    common::emit(args, &rendered);
    Ok(())
}
