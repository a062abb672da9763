//! Workflow data-dependency graph.
//!
//! - Node records and the registry in [`node`]
//! - Graph construction from a document in [`builder`]
//! - Direction-aware reachability in [`walk`]

pub mod builder;
pub mod node;
pub mod walk;

pub use builder::build_graph;
pub use node::{Node, NodeKind, NodeRegistry};
pub use walk::{reachable, Direction};
