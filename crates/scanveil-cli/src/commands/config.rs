use std::path::Path;

use anyhow::{bail, Result};

use scanveil_core::AppConfig;

/// Print the config file location
pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

/// Print the effective configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Write the default configuration, refusing to clobber an existing file
pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    init_at(&path, force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    tracing::info!(path = %path.display(), "Default config written");
    Ok(())
}
