//! Error types for the nodegraph-server crate.
//!
//! Every failure a handler can hit is answered the same way: HTTP 500 with
//! `{"error":"Internal server error"}`. The detail goes to the log only.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Body text returned to clients for any failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Graph error: {0}")]
    Graph(#[from] nodegraph_graph::GraphError),

    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
