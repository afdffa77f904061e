//! Connected components via disjoint-set union.

use std::hash::Hash;

use log::debug;

use crate::error::Result;
use crate::forest::DisjointSetForest;
use crate::graph::{Graph, NodeId};

/// Computes the connected components of an undirected graph.
///
/// Every node starts as its own set; each edge then joins its endpoints'
/// sets, so two nodes end up in the same set exactly when some path links
/// them. The result is a partition of the node set: each inner vector is
/// one component and every node appears in exactly one of them. The empty
/// graph has no components; an edgeless graph has one singleton per node.
///
/// Edge weights play no role here and are not validated.
///
/// # Errors
///
/// Fails with [`Error::DirectedGraph`](crate::Error::DirectedGraph) on a
/// directed graph.
pub fn connected_components<L>(graph: &Graph<L>) -> Result<Vec<Vec<NodeId>>>
where
    L: Eq + Hash + Clone,
{
    graph.ensure_undirected()?;

    let mut forest = DisjointSetForest::new();
    for node in graph.nodes() {
        forest.make_set(node);
    }
    for id in graph.edges() {
        let (u, v) = graph.edge(id).endpoints();
        forest.union(&u, &v);
    }

    let components: Vec<Vec<NodeId>> = forest
        .representatives()
        .into_iter()
        .map(|rep| forest.elements_of(rep).into_iter().copied().collect())
        .collect();

    debug!(
        "components: {} components over {} nodes",
        components.len(),
        graph.node_count()
    );
    Ok(components)
}
