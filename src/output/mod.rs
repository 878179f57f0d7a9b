pub mod json;
pub mod table;

use std::io::IsTerminal;

use crate::cli::OutputFlags;
use crate::config::OutputFormat;
use crate::db::Target;

pub use table::TableOptions;

pub const MASKED_PASSWORD: &str = "***";

pub fn select_format(flags: &OutputFlags) -> OutputFormat {
    if flags.json {
        return OutputFormat::Json;
    }
    if flags.markdown {
        return OutputFormat::Markdown;
    }
    if flags.pretty {
        return OutputFormat::Pretty;
    }

    if std::io::stdout().is_terminal() {
        OutputFormat::Pretty
    } else {
        OutputFormat::Markdown
    }
}

/// Copy of `target` whose password, if any, is replaced by a mask so its DSNs
/// can be printed.
pub fn redacted(target: &Target) -> Target {
    let mut target = target.clone();
    if !target.password.is_empty() {
        target.password = MASKED_PASSWORD.to_string();
    }
    target
}
