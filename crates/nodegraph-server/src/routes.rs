//! Endpoint handlers.
//!
//! - `GET /api/graph` - every node as `{name, description, parent}`
//! - `POST /api/select-node` - body `{"nodeName": ...}`, sets `selected = true`
//! - `POST /api/deselect-node` - body `{"nodeName": ...}`, sets `selected = false`
//!
//! `nodeName` is passed to the store unvalidated. An empty or unknown name
//! updates nothing and still answers 200.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use nodegraph_core::{GraphNode, NodeSelection};

use crate::error::{ApiError, Result};
use crate::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/graph", get(get_graph))
        .route("/api/select-node", post(select_node))
        .route("/api/deselect-node", post(deselect_node))
        .with_state(state)
}

async fn get_graph(State(state): State<AppState>) -> Result<Json<Vec<GraphNode>>> {
    let nodes = state
        .store
        .fetch_graph_data()
        .await
        .map_err(|e| logged("fetch_graph_data", e.into()))?;
    Ok(Json(nodes))
}

async fn select_node(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NodeSelection>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(selection) = payload.map_err(|e| logged("select_node", e.into()))?;
    state
        .store
        .select_node(&selection.node_name)
        .await
        .map_err(|e| logged("select_node", e.into()))?;
    Ok(StatusCode::OK)
}

async fn deselect_node(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NodeSelection>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(selection) = payload.map_err(|e| logged("deselect_node", e.into()))?;
    state
        .store
        .deselect_node(&selection.node_name)
        .await
        .map_err(|e| logged("deselect_node", e.into()))?;
    Ok(StatusCode::OK)
}

fn logged(operation: &'static str, err: ApiError) -> ApiError {
    tracing::error!(operation, error = %err, "Request failed");
    err
}
