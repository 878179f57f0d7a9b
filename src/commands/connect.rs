use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, ConnectArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{self, TableOptions, json as json_out, table};

pub fn run(args: &CliArgs, cmd: &ConnectArgs) -> Result<()> {
    let mut resolved = common::load_config(args)?;
    let format = common::output_format(args);

    let registry = resolved.targets.set_instances();

    let mut rows = Vec::with_capacity(resolved.targets.len());
    for target in &resolved.targets {
        let handle = target.db()?;
        tracing::info!(name = %target, "resolved connection handle");
        let dsn = if cmd.show_password {
            handle.dsn.clone()
        } else {
            output::redacted(target).dsn()
        };
        rows.push((target.to_string(), handle.driver.clone(), dsn));
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "instances": registry.len(),
            "connections": rows
                .iter()
                .map(|(target, driver, dsn)| json!({
                    "target": target,
                    "driver": driver,
                    "dsn": dsn,
                }))
                .collect::<Vec<_>>(),
        });
        let body = json_out::emit_json_value(&payload, true)?;
        common::emit(args, &body);
        return Ok(());
    }

    let table_rows = rows
        .into_iter()
        .map(|(target, driver, dsn)| vec![target, driver, dsn])
        .collect::<Vec<_>>();
    let rendered = table::render_table(
        &["Target", "Driver", "DSN"],
        &table_rows,
        format,
        &TableOptions::default(),
    );
    common::emit(args, &rendered);
    common::emit(
        args,
        &format!(
            "{} target(s) on {} instance(s)",
            resolved.targets.len(),
            registry.len()
        ),
    );
    Ok(())
}
