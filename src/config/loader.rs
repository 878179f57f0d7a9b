use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::env::Env;
use super::overrides::ParsedOverrides;
use super::schema::OptionFile;
use crate::db::{DEFAULT_DRIVER, Target, TargetList};

const OPTION_FILE_NAMES: [&str; 3] = [".schemactl.yaml", ".schemactl.yml", ".schemactl.json"];

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub overrides: ParsedOverrides,
    pub cwd: PathBuf,
    pub xdg_config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    /// Option files that contributed, global file first.
    pub files: Vec<PathBuf>,
    pub overrides: ParsedOverrides,
    /// Targets with overrides merged and defaults applied.
    pub targets: TargetList,
}

pub fn load_config(options: &LoadOptions, env: &Env) -> Result<ResolvedConfig> {
    let root = resolve_root(options)?;
    let mut files = Vec::new();

    let global = match find_global_config(options.xdg_config_dir.as_deref()) {
        Some(path) => {
            let file = load_option_file(&path)?;
            files.push(path);
            file
        }
        None => OptionFile::default(),
    };

    let mut targets = Vec::new();
    let root_options = walk(&root, &global, env, &mut files, &mut targets)?;

    if targets.is_empty() {
        tracing::debug!(root = %root.display(), "no schema directories, using root options");
        targets.push(target_from_options(&root_options, env, &root));
    }

    let mut targets = TargetList::new(targets);
    targets.merge_overrides(Some(&options.overrides));
    tracing::info!(
        root = %root.display(),
        targets = targets.len(),
        files = files.len(),
        "resolved targets"
    );

    Ok(ResolvedConfig {
        root,
        files,
        overrides: options.overrides.clone(),
        targets,
    })
}

fn resolve_root(options: &LoadOptions) -> Result<PathBuf> {
    let root = if options.overrides.path.is_empty() {
        options.cwd.clone()
    } else {
        options.cwd.join(&options.overrides.path)
    };
    if !root.is_dir() {
        return Err(anyhow!("Directory not found: {}", root.display()));
    }
    Ok(root)
}

/// Resolve `dir` over `inherited`, collect a target if the directory names its
/// own schema, then descend into subdirectories. Returns the options resolved
/// for `dir` itself.
fn walk(
    dir: &Path,
    inherited: &OptionFile,
    env: &Env,
    files: &mut Vec<PathBuf>,
    targets: &mut Vec<Target>,
) -> Result<OptionFile> {
    let resolved = match find_option_file(dir) {
        Some(path) => {
            let own = load_option_file(&path)?;
            files.push(path);
            let resolved = inherited.overlay(&own);
            if own.schema.as_deref().is_some_and(|s| !s.is_empty()) {
                targets.push(target_from_options(&resolved, env, dir));
            }
            resolved
        }
        None => inherited.clone(),
    };

    for child in subdirectories(dir)? {
        walk(&child, &resolved, env, files, targets)?;
    }

    Ok(resolved)
}

fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn find_option_file(dir: &Path) -> Option<PathBuf> {
    OPTION_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn find_global_config(xdg_config: Option<&Path>) -> Option<PathBuf> {
    let base = xdg_config?;
    let candidates = [
        "schemactl/config.yaml",
        "schemactl/config.yml",
        "schemactl/config.json",
    ];

    for candidate in &candidates {
        let path = base.join(candidate);
        if path.is_file() {
            return Some(path);
        }
    }

    None
}

fn load_option_file(path: &Path) -> Result<OptionFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read option file: {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => {
            // An empty YAML document deserializes as unit, not a map.
            if content.trim().is_empty() {
                return Ok(OptionFile::default());
            }
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML option file: {}", path.display()))
        }
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON option file: {}", path.display())),
        _ => Err(anyhow!(
            "Unsupported option file extension: {}",
            path.display()
        )),
    }
}

fn target_from_options(options: &OptionFile, env: &Env, dir: &Path) -> Target {
    let password = match (&options.password, &options.password_env) {
        (Some(password), _) => password.clone(),
        (None, Some(key)) => env.get(key).map(str::to_string).unwrap_or_else(|| {
            tracing::warn!(variable = %key, dir = %dir.display(), "passwordEnv variable is not set");
            String::new()
        }),
        (None, None) => String::new(),
    };

    let mut target = Target::new(options.driver.as_deref().unwrap_or(DEFAULT_DRIVER));
    target.host = options.host.clone().unwrap_or_default();
    target.port = options.port.unwrap_or_default();
    target.user = options.user.clone().unwrap_or_default();
    target.password = password;
    target.schema = options.schema.clone().unwrap_or_default();
    target.dir = Some(dir.to_path_buf());
    target
}
