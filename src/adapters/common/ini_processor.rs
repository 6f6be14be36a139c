use config::{Config, File, FileFormat};
use std::collections::HashMap;

use crate::core::domain::settings::{ProjectConfig, SettingsRegistry};
use crate::core::errors::settings::{SettingsError, SettingsResult};

/// Common INI processing utilities for both HTTP and file system adapters
/// BR: Configuration processing logic is centralized to ensure consistent behavior across adapters
pub struct IniProcessor;

impl IniProcessor {
    /// Parse INI content from string
    pub fn parse_ini_from_content(
        content: &str,
        source_name: &str,
    ) -> SettingsResult<HashMap<String, serde_json::Value>> {
        let config = Config::builder()
            .add_source(File::from_str(content, FileFormat::Ini))
            .build()
            .map_err(|e| {
                SettingsError::ParseError(format!(
                    "Failed to parse INI content from '{source_name}': {e}"
                ))
            })?;

        let raw_data: HashMap<String, serde_json::Value> =
            config.try_deserialize().map_err(|e| {
                SettingsError::ParseError(format!(
                    "Failed to deserialize INI content from '{source_name}': {e}"
                ))
            })?;

        Ok(raw_data)
    }

    /// Parse INI content from file path
    pub fn parse_ini_from_file(
        file_path: &str,
    ) -> SettingsResult<HashMap<String, serde_json::Value>> {
        let config = Config::builder()
            .add_source(File::with_name(file_path).format(FileFormat::Ini))
            .build()
            .map_err(|e| {
                SettingsError::ParseError(format!("Failed to parse INI file '{file_path}': {e}"))
            })?;

        let raw_data: HashMap<String, serde_json::Value> =
            config.try_deserialize().map_err(|e| {
                SettingsError::ParseError(format!(
                    "Failed to deserialize INI file '{file_path}': {e}"
                ))
            })?;

        Ok(raw_data)
    }

    /// Extract DEFAULT section from raw INI data
    pub fn extract_default_section(
        raw_data: &HashMap<String, serde_json::Value>,
    ) -> HashMap<String, String> {
        raw_data
            .get("DEFAULT")
            .and_then(|v| v.as_object())
            .map(|default_map| {
                default_map
                    .iter()
                    .map(|(k, v)| (k.clone(), v.as_str().unwrap_or("").to_string()))
                    .collect::<HashMap<String, String>>()
            })
            .unwrap_or_default()
    }

    /// Convert raw INI data to project configurations
    pub fn convert_to_project_configs(
        raw_data: &HashMap<String, serde_json::Value>,
    ) -> HashMap<String, ProjectConfig> {
        let mut projects = HashMap::new();

        for (section, value) in raw_data.iter() {
            if section == "DEFAULT" {
                continue;
            }

            let mut section_map = HashMap::new();

            if let Some(inner_map) = value.as_object() {
                for (key, inner_value) in inner_map {
                    section_map.insert(key.clone(), inner_value.as_str().unwrap_or("").to_string());
                }
            }

            // BR: Project configurations are case-insensitive and stored in lowercase for consistent lookup
            projects.insert(section.to_lowercase(), ProjectConfig::new(section_map));
        }

        projects
    }

    /// Create SettingsRegistry from raw INI data
    pub fn create_settings_registry(
        raw_data: &HashMap<String, serde_json::Value>,
    ) -> SettingsRegistry {
        let default_config = Self::extract_default_section(raw_data);
        let projects = Self::convert_to_project_configs(raw_data);
        SettingsRegistry::new(projects, default_config)
    }

    /// Flatten INI sections into a single key-value configuration map
    pub fn flatten_config_sections(
        raw_data: &HashMap<String, serde_json::Value>,
    ) -> HashMap<String, String> {
        let mut config_map = HashMap::new();

        for (section, value) in raw_data.iter() {
            if let Some(inner_map) = value.as_object() {
                for (key, inner_value) in inner_map {
                    let full_key = if section == "DEFAULT" {
                        key.clone()
                    } else {
                        format!("{section}.{key}")
                    };
                    config_map.insert(full_key, inner_value.as_str().unwrap_or("").to_string());
                }
            }
        }

        config_map
    }
}
