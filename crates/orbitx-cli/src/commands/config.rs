use std::path::Path;

use anyhow::{bail, Result};

use orbitx_core::AppConfig;

pub fn show(path: &Path) -> Result<()> {
    let config = AppConfig::load_from(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = std::env::temp_dir().join(format!("orbitx-cli-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        init(&path, false).unwrap();
        assert!(path.exists());
        assert!(init(&path, false).is_err());
        init(&path, true).unwrap();
        show(&path).unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
