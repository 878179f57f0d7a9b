mod env;
mod loader;
mod overrides;
mod schema;

pub use env::Env;
pub use loader::{LoadOptions, ResolvedConfig, load_config};
pub use overrides::ParsedOverrides;
pub use schema::{OptionFile, OutputFormat};

pub fn load_from_system(overrides: &ParsedOverrides) -> anyhow::Result<ResolvedConfig> {
    let cwd = std::env::current_dir()?;
    let options = LoadOptions {
        overrides: overrides.clone(),
        cwd,
        xdg_config_dir: dirs::config_dir(),
    };
    let root = options.cwd.join(&overrides.path);
    let env = Env::from_system(&root);
    load_config(&options, &env)
}
