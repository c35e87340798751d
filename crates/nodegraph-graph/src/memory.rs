//! In-process `NodeStore` for exercising callers without a Neo4j server.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use nodegraph_core::{GraphNode, Node};

use crate::client::GraphError;
use crate::store::NodeStore;

/// A node store held in memory, in insertion order.
///
/// Mirrors the Neo4j queries: fetch projects every node, select/deselect
/// update every node whose name matches exactly.
#[derive(Debug, Default)]
pub struct InMemoryNodeStore {
    nodes: Mutex<Vec<Node>>,
    unreachable: bool,
}

impl InMemoryNodeStore {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes: Mutex::new(nodes),
            unreachable: false,
        }
    }

    /// A store every operation of which fails as if the connection could
    /// not be established.
    pub fn unreachable() -> Self {
        Self {
            nodes: Mutex::new(Vec::new()),
            unreachable: true,
        }
    }

    /// Read a node's `selected` flag directly, bypassing the fetch projection.
    /// `None` when no node has that name.
    pub fn is_selected(&self, node_name: &str) -> Option<bool> {
        self.lock()
            .iter()
            .find(|n| n.name == node_name)
            .map(|n| n.selected)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Node>> {
        self.nodes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_reachable(&self) -> Result<(), GraphError> {
        if self.unreachable {
            return Err(GraphError::Connection(
                "in-memory store configured as unreachable".to_string(),
            ));
        }
        Ok(())
    }

    fn set_selected(&self, node_name: &str, selected: bool) -> Result<(), GraphError> {
        self.check_reachable()?;
        for node in self.lock().iter_mut().filter(|n| n.name == node_name) {
            node.selected = selected;
        }
        Ok(())
    }
}

#[async_trait]
impl NodeStore for InMemoryNodeStore {
    async fn fetch_graph_data(&self) -> Result<Vec<GraphNode>, GraphError> {
        self.check_reachable()?;
        Ok(self.lock().iter().map(Node::projection).collect())
    }

    async fn select_node(&self, node_name: &str) -> Result<(), GraphError> {
        self.set_selected(node_name, true)
    }

    async fn deselect_node(&self, node_name: &str) -> Result<(), GraphError> {
        self.set_selected(node_name, false)
    }
}
