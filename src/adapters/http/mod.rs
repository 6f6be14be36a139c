mod handlers;
mod router;
mod run;

pub use run::run;

use crate::core::domain::grammar::ArkGrammar;
use crate::core::domain::settings::Settings;

/// Shared state handed to every axum handler, grounded in the
/// `Arc<AppState>` pattern of the pack's `time-machine-project-ark-service`.
pub struct AppState {
    pub settings: Settings,
    pub grammar: ArkGrammar,
}
