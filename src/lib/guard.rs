use std::fs;

use log::info;

use crate::config::Config;
use crate::error::{ReconError, Result};

/// Creates the output directory when absent, then makes sure every input
/// exists. Nothing is opened for reading here.
pub fn check_directories(config: &Config) -> Result<()> {
    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
        info!("created output directory {}", config.output_dir.display());
    }
    if !config.data_dir.exists() {
        return Err(ReconError::MissingDataDir(config.data_dir.clone()));
    }
    for input in [config.member_path(), config.payment_path()] {
        if !input.exists() {
            return Err(ReconError::MissingInputFile(input));
        }
    }
    Ok(())
}
