use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::ports::GameStore;
use crate::frameworks::{config, db};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, InMemoryGameStore, PostgresGameStore};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Prefer the PostgreSQL game store when a database is configured.
    let store: Arc<dyn GameStore> = match config::database_url() {
        Some(database_url) => {
            let pool = match db::connect_pool(&database_url).await {
                Ok(pool) => pool,
                Err(error) => {
                    tracing::error!(%error, "failed to connect to database");
                    return;
                }
            };

            if let Err(error) = db::run_migrations(&pool).await {
                tracing::error!(%error, "failed to run migrations");
                return;
            }

            Arc::new(PostgresGameStore { db: pool })
        }
        None => {
            tracing::warn!("DATABASE_URL not set, game state will not survive restarts");
            Arc::new(InMemoryGameStore {
                games: Arc::new(Mutex::new(HashMap::new())),
            })
        }
    };

    let state = AppState { store };

    // Wire the HTTP routes for the snake API.
    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::http_port()));
    tracing::info!(%addr, "listening");

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };

    // Serve app and report errors rather than panicking.
    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server error");
    }
}
