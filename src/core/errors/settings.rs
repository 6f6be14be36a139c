use thiserror::Error;

/// Settings-specific error types for configuration loading and validation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
    #[error("Configuration parsing failed: {0}")]
    ParseError(String),
    #[error("Environment variable access failed: {0}")]
    EnvironmentError(String),
    #[error("Required configuration key missing: {0}")]
    MissingKey(String),
    #[error("Invalid value '{value}' for key '{key}', expected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
    #[error("Regex compilation failed: {0}")]
    RegexError(String),
    #[error("File system access failed: {0}")]
    FileSystemError(String),
    #[error("Unknown project: {0}")]
    UnknownProject(String),
}

impl From<regex::Error> for SettingsError {
    fn from(err: regex::Error) -> Self {
        SettingsError::RegexError(err.to_string())
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::FileSystemError(err.to_string())
    }
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::ParseError(err.to_string())
    }
}

impl From<std::env::VarError> for SettingsError {
    fn from(err: std::env::VarError) -> Self {
        SettingsError::EnvironmentError(err.to_string())
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let validation_error = SettingsError::ValidationError("Invalid config".to_string());
        assert_eq!(
            validation_error.to_string(),
            "Configuration validation failed: Invalid config"
        );

        let missing_key = SettingsError::MissingKey("ArkNaan".to_string());
        assert_eq!(
            missing_key.to_string(),
            "Required configuration key missing: ArkNaan"
        );

        let invalid_value = SettingsError::InvalidValue {
            key: "LocalServerPort".to_string(),
            value: "abc".to_string(),
            expected: "integer".to_string(),
        };
        assert_eq!(
            invalid_value.to_string(),
            "Invalid value 'abc' for key 'LocalServerPort', expected: integer"
        );

        let unknown_project = SettingsError::UnknownProject("9999".to_string());
        assert_eq!(unknown_project.to_string(), "Unknown project: 9999");
    }

    #[test]
    fn test_settings_error_equality() {
        let error1 = SettingsError::ValidationError("test".to_string());
        let error2 = SettingsError::ValidationError("test".to_string());
        let error3 = SettingsError::ValidationError("different".to_string());

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_settings_error_from_regex_error() {
        let regex_err = regex::Error::Syntax("Invalid regex".to_string());
        let settings_err = SettingsError::from(regex_err);

        match settings_err {
            SettingsError::RegexError(msg) => assert!(msg.contains("Invalid regex")),
            _ => panic!("Expected RegexError"),
        }
    }

    #[test]
    fn test_settings_error_from_env_error() {
        let env_err = std::env::VarError::NotPresent;
        let settings_err = SettingsError::from(env_err);

        match settings_err {
            SettingsError::EnvironmentError(_) => (),
            _ => panic!("Expected EnvironmentError"),
        }
    }
}
