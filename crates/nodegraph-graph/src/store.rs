//! The seam between the HTTP layer and the backing store.

use async_trait::async_trait;

use nodegraph_core::GraphNode;

use crate::client::{GraphClient, GraphError};

/// Request-scoped operations against the node store.
///
/// Implementations do not retry or catch: a store failure is returned to the
/// caller as soon as the borrowed connection has been released.
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// All nodes, projected to `name`, `description`, `parent`, in
    /// store-native order.
    async fn fetch_graph_data(&self) -> Result<Vec<GraphNode>, GraphError>;

    /// Mark nodes named `node_name` as selected. Zero matches is success.
    async fn select_node(&self, node_name: &str) -> Result<(), GraphError>;

    /// Mark nodes named `node_name` as not selected. Zero matches is success.
    async fn deselect_node(&self, node_name: &str) -> Result<(), GraphError>;
}

#[async_trait]
impl NodeStore for GraphClient {
    async fn fetch_graph_data(&self) -> Result<Vec<GraphNode>, GraphError> {
        GraphClient::fetch_graph_data(self).await
    }

    async fn select_node(&self, node_name: &str) -> Result<(), GraphError> {
        GraphClient::select_node(self, node_name).await
    }

    async fn deselect_node(&self, node_name: &str) -> Result<(), GraphError> {
        GraphClient::deselect_node(self, node_name).await
    }
}
