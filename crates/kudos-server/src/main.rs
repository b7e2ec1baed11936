mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{Method, header::CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use kudos_api::middleware::USER_ID_HEADER;
use kudos_api::state::{AppState, AppStateInner};
use kudos_core::{KudosService, TracingAuditLog, UserDirectory};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kudos=debug,kudos_api=debug,kudos_core=info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let directory = Arc::new(UserDirectory::builtin());
    if directory.find_user(&config.default_user_id).is_none() {
        anyhow::bail!("KUDOS_DEFAULT_USER '{}' is not in the user directory", config.default_user_id);
    }

    let kudos = KudosService::new(directory, config.moderation.clone(), Arc::new(TracingAuditLog));
    if config.seed_demo {
        kudos.seed_demo()?;
    }

    let state: AppState = Arc::new(AppStateInner {
        kudos,
        default_user_id: config.default_user_id.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, USER_ID_HEADER.parse()?]);

    let app = kudos_api::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Kudos app listening on http://{}", addr);
    info!("Default caller: {}", config.default_user_id);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::warn!("failed to install SIGTERM handler: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
