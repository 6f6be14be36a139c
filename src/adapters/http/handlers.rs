use std::sync::Arc;

use axum::extract::{OriginalUri, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use super::AppState;
use crate::core::errors::grammar::ArkGrammarError;
use crate::core::use_cases::redirector;

pub async fn health_check_handler() -> &'static str {
    "OK"
}

/// The sole catch-all route (spec.md §4.G): parses the reconstructed ARK
/// URL, redirects it through the project templates, and emits 302/400.
pub async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let requested_url = format!(
        "http://{}{}",
        state.settings.ark_config.resolver_host,
        uri.path()
    );

    let outcome = state
        .grammar
        .parse(&requested_url, state.settings.dsp_ark_version)
        .map_err(ArkGrammarError::from)
        .and_then(|url_info| redirector::redirect(&state.settings, &url_info));

    match outcome {
        Ok(target) => {
            info!(path = %uri.path(), "resolved ark url");
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
        Err(err) => {
            // TemplateError means operator misconfiguration, not a bad
            // request (spec.md §4.F edge cases) — everything else collapses
            // to 400 per spec.md §7.
            let status = match err {
                ArkGrammarError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            };
            warn!(path = %uri.path(), reason = %err, %status, "rejected ark url");
            (status, err.to_string()).into_response()
        }
    }
}
