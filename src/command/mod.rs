pub mod config;
pub mod create;
pub mod get;

use std::path::{Path, PathBuf};

use super::cli::GlobalArgs;
use super::Result;
use crate::config::HasteConfig;

const CONFIG_FILE_NAME: &str = "haste-client.json";

/// Loads the config file and layers flag/env overrides on top.
fn load_configuration(globals: &GlobalArgs) -> Result<HasteConfig> {
    let mut config = HasteConfig::load_from(&config_file_path(globals))?;
    config.apply_overrides(globals);

    Ok(config)
}

fn config_file_path(globals: &GlobalArgs) -> PathBuf {
    globals
        .config_file
        .clone()
        .unwrap_or_else(default_config_file_path)
}

fn default_config_file_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|path| path.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| Path::new("/").join(CONFIG_FILE_NAME))
}
