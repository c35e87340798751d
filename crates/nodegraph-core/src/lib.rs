//! nodegraph-core: Shared types, configuration, and error handling for nodegraph.
//!
//! This crate provides the foundational pieces used by the other crates:
//! - The node projection returned by graph fetches
//! - The request body used to toggle node selection
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::NodegraphError;
pub use types::{GraphNode, Node, NodeSelection};
