//! nodegraph-graph: Neo4j access layer for the node graph.
//!
//! Every graph read and write the service performs flows through this crate.
//! Each operation borrows one pooled connection, runs one parametrized
//! Cypher statement, and hands the connection back before returning.

pub mod client;
pub mod memory;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use memory::InMemoryNodeStore;
pub use store::NodeStore;
