use thiserror::Error;

use crate::core::errors::check_digit::CheckDigitError;
use crate::core::errors::settings::SettingsError;

/// Errors raised while parsing or rendering an ARK URL, and while redirecting
/// a parsed URL through project templates.
///
/// Every variant here collapses to one of the three public HTTP/CLI failure
/// modes named in spec.md §7: `MalformedUrl`, `BadCheckDigit`, `UnknownProject`
/// (plus `TemplateError`, which is only reachable through operator
/// misconfiguration, never through a client-supplied URL).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArkGrammarError {
    #[error("Malformed ARK URL: {0}")]
    MalformedUrl(String),
    #[error("Unsupported ARK URL version in: {0}")]
    UnsupportedVersion(String),
    #[error("Invalid check digit in: {0}")]
    BadCheckDigit(String),
    #[error("Unknown project: {0}")]
    UnknownProject(String),
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl From<CheckDigitError> for ArkGrammarError {
    fn from(_err: CheckDigitError) -> Self {
        ArkGrammarError::BadCheckDigit("check digit validation failed".to_string())
    }
}

impl From<SettingsError> for ArkGrammarError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::UnknownProject(project_id) => {
                ArkGrammarError::UnknownProject(project_id)
            }
            other => ArkGrammarError::TemplateError(other.to_string()),
        }
    }
}

pub type ArkGrammarResult<T> = Result<T, ArkGrammarError>;
