use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::llm::LlmClient;

pub mod assets;
pub mod chat;
pub mod control;
pub mod error;
pub mod openapi;

/// Handle to the running HTTP server. Dropping it shuts the server down.
pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

pub(crate) struct ServerState {
    pub(crate) catalog: Catalog,
    pub(crate) llm: LlmClient,
    pub(crate) static_dir: PathBuf,
}

impl Server {
    /// Bind the configured address and serve in a background task.
    pub async fn new(config: AppConfig) -> CoreResult<Self> {
        let state = Arc::new(ServerState {
            catalog: Catalog::builtin(),
            llm: LlmClient::new(config.llm),
            static_dir: config.static_dir,
        });
        let app = router(state);

        let listener = TcpListener::bind(config.bind_addr.as_str())
            .await
            .map_err(|error| {
                CoreError::Internal(format!("failed to bind {}: {error}", config.bind_addr))
            })?;
        let addr = listener
            .local_addr()
            .map_err(|error| CoreError::Internal(error.to_string()))?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> CoreResult<()> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| CoreError::Internal("failed to send server shutdown signal".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat::chat))
        .route("/system-control", post(control::system_control))
        .route("/", get(assets::serve_index))
        .route("/*path", get(assets::serve_asset))
        .with_state(state)
        .layer(cors)
}

async fn health() -> &'static str {
    "ok"
}
