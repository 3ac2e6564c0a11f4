//! Init command implementation

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::info;

/// Write a default configuration file, returning its path
pub fn cmd_init(base_dir: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config = Config::with_base_dir(base_dir);

    if config.paths.config_file.exists() && !force {
        return Err(Error::AlreadyInitialized(
            config.paths.base_dir.display().to_string(),
        ));
    }

    config.validate()?;
    config.save()?;
    info!("Created config at {:?}", config.paths.config_file);

    Ok(config.paths.config_file)
}
