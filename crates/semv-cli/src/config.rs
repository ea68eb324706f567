use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "semv.toml";

/// The semv configuration file structure (semv.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemvConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Sort configuration
    pub sort: SortConfig,
}

/// Output configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use ANSI colors
    pub color: bool,

    /// Output format for every command
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Sort configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Sort in descending order by default
    pub reverse: bool,
}

impl SemvConfig {
    /// Load configuration from semv.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Loading configuration from {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: SemvConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                log::debug!("No {} found above {}", CONFIG_FILE, start_dir.display());
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: SemvConfig = toml::from_str("").unwrap();
        assert!(config.output.color);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(!config.sort.reverse);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
color = false
format = "json"

[sort]
reverse = true
"#;
        let config: SemvConfig = toml::from_str(toml).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.sort.reverse);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: SemvConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert!(config.output.color);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(toml::from_str::<SemvConfig>("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[sort]\nreverse = true\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = SemvConfig::load(&nested).unwrap().unwrap();
        assert!(config.sort.reverse);
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[sort]\nreverse = \"yes\"\n").unwrap();

        let err = SemvConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
