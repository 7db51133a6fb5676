use crate::config::{validation::collect_config_errors, EngineConfig};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Report every problem in a config file. Fails when there is at least one.
pub fn check_config(path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: EngineConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let issues = collect_config_errors(&config);
    if issues.is_empty() {
        println!("{} {} is valid", "✓".green(), path.display());
        return Ok(());
    }

    println!("{} {}:", "✗".red(), path.display());
    for issue in &issues {
        println!("  - {issue}");
    }
    anyhow::bail!("{} configuration issue(s) found", issues.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_is_valid() {
        let file = NamedTempFile::new().unwrap();
        assert!(check_config(file.path()).is_ok());
    }

    #[test]
    fn test_reports_issues() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            indoc! {"
                [tiers]
                medium = 0.8
                high = 0.5
            "},
        )
        .unwrap();
        let err = check_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("issue(s) found"));
    }
}
