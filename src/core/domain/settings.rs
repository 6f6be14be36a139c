use std::collections::HashMap;

use crate::core::errors::settings::{SettingsError, SettingsResult};

/// Top-level configuration values (spec.md §4.C `DEFAULT` section).
#[derive(Debug, Clone)]
pub struct ArkConfig {
    pub resolver_host: String,
    pub naan: String,
    pub top_level_object_url: String,
    pub local_server_host: String,
    pub local_server_port: u16,
}

impl ArkConfig {
    pub fn new(
        resolver_host: String,
        naan: String,
        top_level_object_url: String,
        local_server_host: String,
        local_server_port: u16,
    ) -> Self {
        Self {
            resolver_host,
            naan,
            top_level_object_url,
            local_server_host,
            local_server_port,
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.resolver_host.is_empty() {
            return Err(SettingsError::MissingKey("ArkResolverHost".to_string()));
        }
        if self.naan.is_empty() {
            return Err(SettingsError::MissingKey("ArkNaan".to_string()));
        }
        if self.top_level_object_url.is_empty() {
            return Err(SettingsError::MissingKey("TopLevelObjectUrl".to_string()));
        }
        if self.local_server_host.is_empty() {
            return Err(SettingsError::MissingKey("LocalServerHost".to_string()));
        }
        if self.local_server_port == 0 {
            return Err(SettingsError::InvalidValue {
                key: "LocalServerPort".to_string(),
                value: "0".to_string(),
                expected: "a nonzero port number".to_string(),
            });
        }
        Ok(())
    }
}

/// Project-specific configuration: `Host`, `UsePhp`, and the redirect/IRI
/// templates named in spec.md §4.C, stored verbatim as read from the INI
/// section and merged with `DEFAULT`.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config: HashMap<String, String>,
}

impl ProjectConfig {
    pub fn new(config: HashMap<String, String>) -> Self {
        Self { config }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.config.get(key)
    }

    pub fn get_required(&self, key: &str) -> SettingsResult<&String> {
        self.config
            .get(key)
            .ok_or_else(|| SettingsError::MissingKey(key.to_string()))
    }

    pub fn get_boolean(&self, key: &str) -> SettingsResult<bool> {
        match self.config.get(key) {
            Some(value) => match value.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(SettingsError::InvalidValue {
                    key: key.to_string(),
                    value: other.to_string(),
                    expected: "true/false or 1/0".to_string(),
                }),
            },
            None => Ok(false),
        }
    }

    pub fn merge_with_defaults(&self, defaults: &HashMap<String, String>) -> Self {
        let mut merged = defaults.clone();
        for (key, value) in &self.config {
            merged.insert(key.clone(), value.clone());
        }
        Self::new(merged)
    }
}

/// Registry of all project configurations, keyed case-insensitively by
/// `ProjectId` (spec.md §4.C).
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    pub projects: HashMap<String, ProjectConfig>,
    pub default_config: HashMap<String, String>,
}

impl SettingsRegistry {
    pub fn new(
        projects: HashMap<String, ProjectConfig>,
        default_config: HashMap<String, String>,
    ) -> Self {
        Self {
            projects,
            default_config,
        }
    }

    /// Looks up a project's configuration merged with `DEFAULT`. Absence is
    /// the **UnknownProject** error named in spec.md §7.
    pub fn get_project_config(&self, project_id: &str) -> SettingsResult<ProjectConfig> {
        self.projects
            .get(&project_id.to_lowercase())
            .map(|config| config.merge_with_defaults(&self.default_config))
            .ok_or_else(|| SettingsError::UnknownProject(project_id.to_string()))
    }

    pub fn get_default_config(&self, key: &str) -> Option<String> {
        self.default_config.get(key).cloned()
    }
}

/// The complete, read-only configuration for one process (spec.md §4.C, §5).
#[derive(Debug, Clone)]
pub struct Settings {
    pub ark_config: ArkConfig,
    pub registry: SettingsRegistry,
    pub dsp_ark_version: u8,
}

impl Settings {
    pub fn new(ark_config: ArkConfig, registry: SettingsRegistry, dsp_ark_version: u8) -> Self {
        Self {
            ark_config,
            registry,
            dsp_ark_version,
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.ark_config.validate()?;

        if self.dsp_ark_version == 0 {
            return Err(SettingsError::InvalidValue {
                key: "DspArkVersion".to_string(),
                value: "0".to_string(),
                expected: "a positive URL version".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_ark_config() -> ArkConfig {
        ArkConfig::new(
            "ark.dasch.swiss".to_string(),
            "72163".to_string(),
            "http://dasch.swiss".to_string(),
            "0.0.0.0".to_string(),
            3336,
        )
    }

    #[test]
    fn test_ark_config_validation() {
        assert!(valid_ark_config().validate().is_ok());

        let mut missing_host = valid_ark_config();
        missing_host.resolver_host = String::new();
        assert!(missing_host.validate().is_err());

        let mut zero_port = valid_ark_config();
        zero_port.local_server_port = 0;
        assert!(zero_port.validate().is_err());
    }

    #[test]
    fn test_project_config_boolean_parsing() {
        let mut config_map = HashMap::new();
        config_map.insert("UsePhp".to_string(), "true".to_string());
        config_map.insert("BoolZero".to_string(), "0".to_string());
        config_map.insert("BoolInvalid".to_string(), "maybe".to_string());

        let config = ProjectConfig::new(config_map);

        assert_eq!(config.get_boolean("UsePhp"), Ok(true));
        assert_eq!(config.get_boolean("BoolZero"), Ok(false));
        assert_eq!(config.get_boolean("NonExistent"), Ok(false));
        assert!(config.get_boolean("BoolInvalid").is_err());
    }

    #[test]
    fn test_project_config_merge_with_defaults() {
        let mut defaults = HashMap::new();
        defaults.insert("Host".to_string(), "default.example.org".to_string());

        let mut project_config = HashMap::new();
        project_config.insert("Host".to_string(), "project.example.org".to_string());

        let config = ProjectConfig::new(project_config);
        let merged = config.merge_with_defaults(&defaults);

        assert_eq!(
            merged.get("Host"),
            Some(&"project.example.org".to_string())
        );
    }

    #[test]
    fn test_settings_registry_case_insensitive_lookup() {
        let mut project_config = HashMap::new();
        project_config.insert("Host".to_string(), "0.0.0.0:3333".to_string());

        let mut projects = HashMap::new();
        projects.insert("0001".to_string(), ProjectConfig::new(project_config));

        let registry = SettingsRegistry::new(projects, HashMap::new());

        assert!(registry.get_project_config("0001").is_ok());
        assert!(registry.get_project_config("0ABC").is_err());

        match registry.get_project_config("9999") {
            Err(SettingsError::UnknownProject(project_id)) => assert_eq!(project_id, "9999"),
            other => panic!("expected UnknownProject, got {other:?}"),
        }
    }

    #[test]
    fn test_settings_validation() {
        let registry = SettingsRegistry::new(HashMap::new(), HashMap::new());

        let valid_settings = Settings::new(valid_ark_config(), registry.clone(), 1);
        assert!(valid_settings.validate().is_ok());

        let invalid_version = Settings::new(valid_ark_config(), registry, 0);
        assert!(invalid_version.validate().is_err());
    }
}
