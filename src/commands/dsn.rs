use std::collections::HashSet;

use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, DsnArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{self, json as json_out};

pub fn run(args: &CliArgs, cmd: &DsnArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args);

    let mut seen = HashSet::new();
    let mut lines = Vec::new();
    for target in &resolved.targets {
        let shown = if cmd.show_password {
            target.clone()
        } else {
            output::redacted(target)
        };
        if cmd.base {
            // Dedup on the real DSN so masking never merges distinct servers.
            if seen.insert(target.base_dsn()) {
                lines.push(shown.base_dsn());
            }
        } else {
            lines.push(shown.dsn());
        }
    }

    if matches!(format, OutputFormat::Json) {
        let body = json_out::emit_json_value(&json!(lines), true)?;
        common::emit(args, &body);
    } else {
        common::emit(args, &lines.join("\n"));
    }
    Ok(())
}
