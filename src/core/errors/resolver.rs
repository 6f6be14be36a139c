use thiserror::Error;

use crate::core::errors::grammar::ArkGrammarError;
use crate::core::errors::settings::SettingsError;

/// The single error type exposed at the CLI and HTTP-server boundary,
/// collapsing the leaf error enums the way the teacher keeps per-concern
/// `thiserror` types and folds them at the adapter edge (SPEC_FULL.md
/// "Ambient stack — Error handling").
#[derive(Error, Debug)]
pub enum ArkResolverError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Grammar(#[from] ArkGrammarError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Server(#[source] std::io::Error),
}

pub type ArkResolverResult<T> = Result<T, ArkResolverError>;
