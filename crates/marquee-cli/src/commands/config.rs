use std::path::Path;

use anyhow::Result;
use tracing::info;

use marquee_core::AppConfig;

pub fn run(config: &AppConfig, write: bool, path: Option<&Path>) -> Result<()> {
    print!("{}", config.to_toml()?);

    if write {
        match path {
            Some(path) => {
                config.save_to(path)?;
                info!("Wrote configuration to {}", path.display());
            }
            None => {
                config.save()?;
                info!("Wrote configuration to {}", AppConfig::config_path().display());
            }
        }
    }

    Ok(())
}
