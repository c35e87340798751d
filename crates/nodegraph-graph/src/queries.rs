//! Read operations for the node graph.

use neo4rs::query;

use nodegraph_core::GraphNode;

use crate::client::{GraphClient, GraphError};

/// Unconstrained scan projecting the three fetchable properties.
///
/// No `ORDER BY`: rows come back in whatever order the store traverses,
/// which is not stable across calls in general.
pub(crate) const FETCH_GRAPH_CYPHER: &str =
    "MATCH (n) RETURN n.name AS name, n.description AS description, n.parent AS parent";

impl GraphClient {
    /// Fetch every node in the graph as a `GraphNode` projection.
    ///
    /// All or nothing: a single node whose `name`, `description` or `parent`
    /// is not a string fails the whole fetch with `GraphError::Serialization`.
    pub async fn fetch_graph_data(&self) -> Result<Vec<GraphNode>, GraphError> {
        let rows = self.query_rows(query(FETCH_GRAPH_CYPHER)).await?;

        let mut nodes = Vec::with_capacity(rows.len());
        for row in rows {
            nodes.push(row_to_graph_node(&row)?);
        }
        tracing::debug!(count = nodes.len(), "Fetched graph data");
        Ok(nodes)
    }
}

/// Convert a projected row to a `GraphNode`. Missing properties come back
/// as Cypher `null` and map to `None`.
fn row_to_graph_node(row: &neo4rs::Row) -> Result<GraphNode, GraphError> {
    Ok(GraphNode {
        name: string_column(row, "name")?,
        description: string_column(row, "description")?,
        parent: string_column(row, "parent")?,
    })
}

fn string_column(row: &neo4rs::Row, column: &str) -> Result<Option<String>, GraphError> {
    row.get::<Option<String>>(column).map_err(|e| {
        GraphError::Serialization(format!("Failed to deserialize column {column}: {e}"))
    })
}
