//! nodegraph-server: HTTP API over the node graph.
//!
//! Three routes map onto the three `NodeStore` operations. The store handle
//! is created once by the caller and injected through [`AppState`]; the
//! server holds no other state.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use nodegraph_graph::NodeStore;

pub mod error;
pub mod routes;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NodeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }
}

/// Build the application router. CORS allows every origin.
pub fn create_router(state: AppState) -> Router {
    routes::routes(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` on `listener` until `shutdown` resolves, then let
/// in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Server is running");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
