//! Core domain types for the node graph.
//!
//! Nodes are pre-existing entities in the backing store; this service only
//! reads them or flips their `selected` flag.

use serde::{Deserialize, Serialize};

// ── Node Types ────────────────────────────────────────────────────

/// A node as held by the backing store.
///
/// `name` is the identity used by every mutation. Uniqueness is assumed,
/// never enforced.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parent: None,
            selected: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// The fields returned by a graph fetch. `selected` is not part of it.
    pub fn projection(&self) -> GraphNode {
        GraphNode {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            parent: self.parent.clone(),
        }
    }
}

/// One entry of a graph fetch.
///
/// Every field is optional because an unconstrained node scan can hit nodes
/// that lack any of these properties; those serialize as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<String>,
}

// ── Requests ──────────────────────────────────────────────────────

/// Body of the select / deselect endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeSelection {
    pub node_name: String,
}
