//! Reachability over the workflow graph.

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{Result, SubflowError};
use crate::graph::node::{NodeKind, NodeRegistry};

/// Which edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow `upstream` edges, towards producers.
    Upstream,
    /// Follow `downstream` edges, towards consumers.
    Downstream,
}

impl Direction {
    /// Traversal direction for a root of the given kind.
    ///
    /// An output pulls in everything that produces it; any other root pulls
    /// in everything that consumes it.
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Output => Self::Upstream,
            _ => Self::Downstream,
        }
    }
}

/// Collect every node reachable from `roots`.
///
/// Each root is walked depth-first in the direction chosen by its kind.
/// All roots share one visited set, so a node reached from an earlier root
/// is not expanded again. The returned set is in visit order.
///
/// # Errors
///
/// Returns `UnknownRoot` if a root is not in the registry.
pub fn reachable<S: AsRef<str>>(roots: &[S], registry: &NodeRegistry) -> Result<IndexSet<String>> {
    let mut reached = IndexSet::new();

    for root in roots {
        let root = root.as_ref();
        let node = registry
            .get(root)
            .ok_or_else(|| SubflowError::UnknownRoot { id: root.to_string() })?;
        let direction = Direction::for_kind(node.kind);
        debug!("Walking {:?} from '{}'", direction, root);
        walk(root, direction, registry, &mut reached);
    }

    debug!("Reached {} of {} nodes", reached.len(), registry.len());
    Ok(reached)
}

fn walk(root: &str, direction: Direction, registry: &NodeRegistry, reached: &mut IndexSet<String>) {
    let mut to_visit = vec![root];

    while let Some(current) = to_visit.pop() {
        if !reached.insert(current.to_string()) {
            continue;
        }
        let Some(node) = registry.get(current) else {
            continue;
        };
        let next = match direction {
            Direction::Upstream => &node.upstream,
            Direction::Downstream => &node.downstream,
        };
        // Reversed so the first neighbour is expanded first.
        to_visit.extend(
            next.iter()
                .rev()
                .map(String::as_str)
                .filter(|id| !reached.contains(*id)),
        );
    }
}
