//! # HTTP Server
//!
//! Router assembly, CORS and the serve loop. State is built once from the
//! injected store client; nothing here holds mutable state of its own.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;
use crate::integrity::Coordinator;
use crate::repo::Repository;
use crate::store::DocumentStore;

use super::{courses, health, students, teachers};

/// Shared per-request context: the injected store client plus the layers
/// built on it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub repo: Repository,
    pub integrity: Coordinator,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repo: Repository::new(store.clone()),
            integrity: Coordinator::new(store.clone()),
            store,
        }
    }
}

/// Build the full application router.
pub fn app(store: Arc<dyn DocumentStore>, config: &ServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        // No origins configured: permissive, for development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health::routes())
        .nest("/api/students", students::routes())
        .nest("/api/teachers", teachers::routes())
        .nest("/api/courses", courses::routes())
        .layer(cors)
        .with_state(AppState::new(store))
}

/// Bind and serve until the process is stopped.
pub async fn serve(store: Arc<dyn DocumentStore>, config: ServerConfig) -> io::Result<()> {
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bind address: {e}")))?;

    let router = app(store, &config);

    log::info!("listening on http://{addr}");
    log::info!("health check at http://{addr}/health");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}
