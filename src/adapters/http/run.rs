use std::sync::Arc;

use tokio::signal;
use tracing::info;

use super::router::create_router;
use super::AppState;
use crate::core::domain::grammar::ArkGrammar;
use crate::core::domain::settings::Settings;
use crate::core::errors::resolver::{ArkResolverError, ArkResolverResult};

/// Waits for SIGINT or (on unix) SIGTERM so the server can stop accepting
/// new connections cleanly (SPEC_FULL.md §HttpServer "Graceful shutdown").
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Builds the grammar from `Settings` and serves the ARK resolver until
/// shutdown, binding `LocalServerHost:LocalServerPort` (spec.md §4.C, §4.G).
pub async fn run(settings: Settings) -> ArkResolverResult<()> {
    let grammar = ArkGrammar::new(&settings.ark_config.resolver_host, &settings.ark_config.naan)?;

    let bind_addr = format!(
        "{}:{}",
        settings.ark_config.local_server_host, settings.ark_config.local_server_port
    );

    let state = Arc::new(AppState { settings, grammar });
    let app = create_router(state);

    info!(bind_addr = %bind_addr, "starting ark resolver http server");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ArkResolverError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ArkResolverError::Server)?;

    info!("ark resolver http server shut down cleanly");
    Ok(())
}
