//! Loads [`Settings`] from an INI configuration file, with a narrow set of
//! `ARK_`-prefixed environment overrides for top-level values (SPEC_FULL.md
//! §Settings). Grounded in the teacher's `ark_url_settings::new_impl`, minus
//! the PyO3 plumbing.

use std::env;

use tracing::info;

use crate::adapters::common::IniProcessor;
use crate::core::domain::settings::{ArkConfig, Settings};
use crate::core::errors::settings::{SettingsError, SettingsResult};

/// Default config path when `--config` is not given (spec.md §4.H).
pub const DEFAULT_CONFIG_PATH: &str = "ark-config.ini";

/// The single `UrlVersion` this resolver accepts (spec.md §3).
const DSP_ARK_VERSION: u8 = 1;

/// Reads `DEFAULT[key]`, falling back to the given environment variable,
/// mirroring the teacher's "INI is authoritative, env var is a fallback"
/// precedence.
fn resolve(defaults: &std::collections::HashMap<String, String>, ini_key: &str, env_key: &str) -> Option<String> {
    defaults
        .get(ini_key)
        .cloned()
        .or_else(|| env::var(env_key).ok())
}

/// Loads and validates `Settings` from the INI file at `config_path`
/// (spec.md §4.H `--config`, default [`DEFAULT_CONFIG_PATH`]).
pub fn load_settings(config_path: &str) -> SettingsResult<Settings> {
    let raw_data = IniProcessor::parse_ini_from_file(config_path)?;
    let registry = IniProcessor::create_settings_registry(&raw_data);
    let defaults = registry.default_config.clone();

    let resolver_host = resolve(&defaults, "ArkResolverHost", "ARK_EXTERNAL_HOST")
        .ok_or_else(|| SettingsError::MissingKey("ArkResolverHost".to_string()))?;
    let naan =
        resolve(&defaults, "ArkNaan", "ARK_NAAN").ok_or_else(|| SettingsError::MissingKey("ArkNaan".to_string()))?;
    let top_level_object_url = defaults
        .get("TopLevelObjectUrl")
        .cloned()
        .ok_or_else(|| SettingsError::MissingKey("TopLevelObjectUrl".to_string()))?;
    let local_server_host =
        resolve(&defaults, "LocalServerHost", "ARK_INTERNAL_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let local_server_port_raw =
        resolve(&defaults, "LocalServerPort", "ARK_INTERNAL_PORT").unwrap_or_else(|| "3336".to_string());
    let local_server_port: u16 = local_server_port_raw
        .parse()
        .map_err(|_| SettingsError::InvalidValue {
            key: "LocalServerPort".to_string(),
            value: local_server_port_raw.clone(),
            expected: "a 16-bit port number".to_string(),
        })?;

    let ark_config = ArkConfig::new(
        resolver_host,
        naan,
        top_level_object_url,
        local_server_host,
        local_server_port,
    );

    let project_count = registry.projects.len();
    let settings = Settings::new(ark_config, registry, DSP_ARK_VERSION);
    settings.validate()?;

    info!(
        config_path,
        project_count, "loaded ark resolver configuration"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const STOCK_INI: &str = r#"
[DEFAULT]
ArkResolverHost = ark.dasch.swiss
ArkNaan = 72163
TopLevelObjectUrl = http://dasch.swiss
LocalServerHost = 0.0.0.0
LocalServerPort = 3336

[0001]
Host = 0.0.0.0:3333
UsePhp = false
KnoraProjectIri = http://rdfh.ch/projects/$project_id
KnoraResourceIri = http://rdfh.ch/$project_id/$resource_id
KnoraProjectRedirectUrl = http://$host/admin/projects/$project_iri
KnoraResourceRedirectUrl = http://$host/v2/resources/$resource_iri
KnoraResourceVersionRedirectUrl = http://$host/v2/resources/$resource_iri?version=$timestamp

[0803]
Host = data.dasch.swiss
UsePhp = true
PhpResourceRedirectUrl = http://$host/resources/$resource_int_id
PhpResourceVersionRedirectUrl = http://$host/resources/$resource_int_id?citdate=$timestamp
"#;

    #[test]
    fn test_load_settings_from_stock_config() {
        let file = write_config(STOCK_INI);
        let settings = load_settings(file.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.ark_config.resolver_host, "ark.dasch.swiss");
        assert_eq!(settings.ark_config.naan, "72163");
        assert_eq!(settings.ark_config.top_level_object_url, "http://dasch.swiss");
        assert_eq!(settings.ark_config.local_server_port, 3336);
        assert_eq!(settings.registry.projects.len(), 2);
    }

    #[test]
    fn test_load_settings_missing_naan_is_fatal() {
        let file = write_config(
            r#"
[DEFAULT]
ArkResolverHost = ark.dasch.swiss
TopLevelObjectUrl = http://dasch.swiss
"#,
        );
        let result = load_settings(file.path().to_str().unwrap());
        assert!(matches!(result, Err(SettingsError::MissingKey(_))));
    }

    #[test]
    fn test_load_settings_default_port_applies() {
        let file = write_config(
            r#"
[DEFAULT]
ArkResolverHost = ark.dasch.swiss
ArkNaan = 72163
TopLevelObjectUrl = http://dasch.swiss
"#,
        );
        let settings = load_settings(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.ark_config.local_server_port, 3336);
        assert_eq!(settings.ark_config.local_server_host, "0.0.0.0");
    }
}
