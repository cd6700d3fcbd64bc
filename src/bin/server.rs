//! Tasktrail server entry point.
//!
//! Loads configuration from the environment (and an optional `.env`
//! file), wires the task service to a `PostgreSQL` backend when
//! `DATABASE_URL` is set or to the in-memory stores otherwise, and
//! serves the API until ctrl-c.

use std::sync::Arc;

use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tasktrail::api::{AppState, create_router};
use tasktrail::config::AppConfig;
use tasktrail::task::adapters::memory::{InMemoryAuditLogRepository, InMemoryTaskRepository};
use tasktrail::task::adapters::postgres::{PostgresAuditLogRepository, PostgresTaskRepository};
use tasktrail::task::services::TaskService;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tasktrail=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let bind_address = config.bind_address();

    let app = match &config.database_url {
        Some(database_url) => {
            let pool = Pool::builder().build(ConnectionManager::<PgConnection>::new(database_url))?;
            tracing::info!("using PostgreSQL task and audit stores");
            let service = TaskService::new(
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresAuditLogRepository::new(pool)),
                Arc::new(DefaultClock),
            );
            create_router(AppState::new(service), config.auth.clone())
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory task and audit stores");
            let service = TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(InMemoryAuditLogRepository::new()),
                Arc::new(DefaultClock),
            );
            create_router(AppState::new(service), config.auth.clone())
        }
    };

    serve(app, &bind_address).await
}

async fn serve(app: Router, bind_address: &str) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!("tasktrail listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tasktrail stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
