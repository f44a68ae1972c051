//! # intake-server
//!
//! The entry point that assembles the application: configuration, tracing,
//! MySQL pool and migrations, then the axum router over the services.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use api_adapters::AppState;
use report_adapters::XlsxReportRenderer;
use secrecy::ExposeSecret;
use services::{AdminService, IntakeService};
use storage_adapters::{connect, MySqlFeedbackRepo, MySqlRegistrationRepo, PoolSettings, MIGRATOR};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = configs::load().context("loading configuration")?;

    let pool = connect(
        config.database.url.expose_secret(),
        &PoolSettings {
            max_connections: config.database.max_connections,
            acquire_timeout: config.database.acquire_timeout(),
        },
    )
    .await
    .context("connecting to MySQL")?;

    MIGRATOR.run(&pool).await.context("running migrations")?;
    tracing::info!("database ready");

    let registrations = Arc::new(MySqlRegistrationRepo::new(pool.clone()));
    let feedback = Arc::new(MySqlFeedbackRepo::new(pool));

    let state = AppState {
        intake: Arc::new(IntakeService::new(registrations.clone(), feedback.clone())),
        admin: Arc::new(AdminService::new(
            registrations,
            feedback,
            Arc::new(XlsxReportRenderer),
        )),
        admin_api_key: Arc::new(config.admin.api_key),
    };

    let app = api_adapters::router(state, &config.cors.origins);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("parsing bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding listener")?;
    tracing::info!(%addr, "intake server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("serving")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(?error, "failed to install ctrl-c handler");
    }
}
