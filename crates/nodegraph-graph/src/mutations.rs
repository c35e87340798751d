//! Write operations for the node graph.
//!
//! Nodes are matched by exact `name` equality, passed as a bound parameter.
//! A name that matches nothing is not an error: the update touches zero
//! nodes and the call still succeeds.

use neo4rs::query;

use crate::client::{GraphClient, GraphError};

pub(crate) const SELECT_NODE_CYPHER: &str = "MATCH (n {name: $nodeName}) SET n.selected = true";

pub(crate) const DESELECT_NODE_CYPHER: &str =
    "MATCH (n {name: $nodeName}) SET n.selected = false";

impl GraphClient {
    /// Set `selected = true` on every node named `node_name`.
    pub async fn select_node(&self, node_name: &str) -> Result<(), GraphError> {
        let q = query(SELECT_NODE_CYPHER).param("nodeName", node_name.to_string());
        self.run(q).await?;
        tracing::debug!(node_name, "Selected node");
        Ok(())
    }

    /// Set `selected = false` on every node named `node_name`.
    pub async fn deselect_node(&self, node_name: &str) -> Result<(), GraphError> {
        let q = query(DESELECT_NODE_CYPHER).param("nodeName", node_name.to_string());
        self.run(q).await?;
        tracing::debug!(node_name, "Deselected node");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name_is_bound_not_interpolated() {
        for cypher in [SELECT_NODE_CYPHER, DESELECT_NODE_CYPHER] {
            assert!(cypher.contains("{name: $nodeName}"));
            assert!(!cypher.contains('\''));
            assert!(!cypher.contains('"'));
        }
    }

    #[test]
    fn test_select_and_deselect_differ_only_in_value() {
        assert!(SELECT_NODE_CYPHER.ends_with("SET n.selected = true"));
        assert!(DESELECT_NODE_CYPHER.ends_with("SET n.selected = false"));
    }
}
