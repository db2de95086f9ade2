//! Graph data: raw input records, the attribute store, and the builder that
//! connects them.

pub mod builder;
pub mod store;
pub mod types;

pub use builder::{BuildSummary, build_graph, build_graph_random};
pub use store::{EdgeAttributes, GraphStore, NodeAttributes, NodeId, NodeKind, Shape};
pub use types::{GraphData, RawEdge, RawNode, Scalar};
