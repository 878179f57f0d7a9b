use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, InstancesArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{self, TableOptions, json as json_out, table};

pub fn run(args: &CliArgs, _cmd: &InstancesArgs) -> Result<()> {
    let mut resolved = common::load_config(args)?;
    let format = common::output_format(args);

    let registry = resolved.targets.set_instances();
    let groups = resolved.targets.group_by_instance(&registry);

    let mut entries = Vec::with_capacity(groups.len());
    for (instance, members) in registry.instances().iter().zip(&groups) {
        // Every member shares the instance, so the first describes it.
        let Some(&first) = members.first() else {
            continue;
        };
        let shown = output::redacted(&resolved.targets[first]);
        let schemas = members
            .iter()
            .map(|&idx| resolved.targets[idx].schema.clone())
            .collect::<Vec<_>>();
        entries.push((instance.driver().to_string(), shown, schemas));
    }

    if matches!(format, OutputFormat::Json) {
        let payload = entries
            .iter()
            .map(|(driver, shown, schemas)| {
                json!({
                    "driver": driver,
                    "host": shown.host_and_optional_port(),
                    "user": shown.user,
                    "baseDsn": shown.base_dsn(),
                    "schemas": schemas,
                })
            })
            .collect::<Vec<_>>();
        let body = json_out::emit_json_value(&json!(payload), true)?;
        common::emit(args, &body);
        return Ok(());
    }

    let rows = entries
        .iter()
        .map(|(driver, shown, schemas)| {
            vec![
                shown.base_dsn(),
                driver.clone(),
                schemas.len().to_string(),
                schemas.join(", "),
            ]
        })
        .collect::<Vec<_>>();
    let rendered = table::render_table(
        &["Instance", "Driver", "Targets", "Schemas"],
        &rows,
        format,
        &TableOptions::default(),
    );
    common::emit(args, &rendered);
    Ok(())
}
