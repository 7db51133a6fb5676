use crate::config::EngineConfig;
use crate::io;
use anyhow::Result;
use std::path::Path;

const HEADER: &str = "# HealthPredict Configuration\n\
# Built-in scoring tables. Edit values to experiment; delete a section to\n\
# fall back to its defaults.\n\n";

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = toml::to_string_pretty(&EngineConfig::default())?;
    io::write_file(path, &format!("{HEADER}{body}"))?;
    println!("Created {} configuration file", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_path;
    use tempfile::TempDir;

    #[test]
    fn test_written_config_loads_back_as_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        init_config(&path, false).unwrap();
        assert_eq!(load_config_from_path(&path).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(init_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[tiers]"));
    }
}
