//! Configuration loading and parsing

use anyhow::{Context, Result};
use candump_compare::CompareConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterConfig {
    pub sources: Option<Vec<String>>,
    pub ids: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

impl AppConfig {
    /// Comparison settings for the library
    pub fn compare_config(&self) -> CompareConfig {
        let mut config = CompareConfig::new();
        if let Some(sources) = &self.filter.sources {
            config = config.with_source_filter(sources.iter().cloned());
        }
        if let Some(ids) = &self.filter.ids {
            config = config.with_id_filter(ids.clone());
        }
        config
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [filter]
            sources = ["vcan0", "vcan1"]
            ids = [0x7B, 256]

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));

        let compare = config.compare_config();
        assert!(compare.should_process("vcan1", 0x100));
        assert!(!compare.should_process("vcan2", 0x7B));
        assert!(!compare.should_process("vcan0", 0x7C));
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, None);
        assert_eq!(config.compare_config(), CompareConfig::new());
    }
}
