//! Minimum spanning forests via Kruskal's algorithm.
//!
//! Edges are considered in order of ascending weight; an edge is kept
//! exactly when its endpoints still lie in different sets of a
//! [`DisjointSetForest`], which is when adding it cannot close a cycle.

use std::hash::Hash;

use log::debug;

use crate::error::Result;
use crate::forest::DisjointSetForest;
use crate::graph::{EdgeId, Graph};

/// Computes a minimum spanning forest of an undirected weighted graph.
///
/// Returns the ids of the kept edges, in acceptance order. A connected
/// graph yields a minimum spanning tree of `node_count() - 1` edges; a
/// graph with `k` components yields `node_count() - k` edges, one minimum
/// spanning tree per component.
///
/// Ties between equal-weight edges go to the earlier-registered edge.
///
/// # Errors
///
/// Fails with [`Error::DirectedGraph`](crate::Error::DirectedGraph) on a
/// directed graph, and with
/// [`Error::MissingWeight`](crate::Error::MissingWeight) or
/// [`Error::NegativeWeight`](crate::Error::NegativeWeight) when any edge
/// is unweighted, negative or NaN. All preconditions are checked before
/// any work is done.
pub fn minimum_spanning_forest<L>(graph: &Graph<L>) -> Result<Vec<EdgeId>>
where
    L: Eq + Hash + Clone,
{
    graph.ensure_undirected()?;
    let weights = graph.edge_weights()?;

    let mut forest = DisjointSetForest::new();
    for node in graph.nodes() {
        forest.make_set(node);
    }

    // sort_by is stable, so equal weights keep registration order
    let mut ordered: Vec<EdgeId> = graph.edges().collect();
    ordered.sort_by(|a, b| weights[a.index()].total_cmp(&weights[b.index()]));

    let mut tree = Vec::new();
    for id in ordered {
        let (u, v) = graph.edge(id).endpoints();
        if forest.union(&u, &v) {
            tree.push(id);
        }
    }

    debug!(
        "kruskal: kept {} of {} edges over {} nodes",
        tree.len(),
        graph.edge_count(),
        graph.node_count()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn spanning_tree_of_connected_graph() {
        let mut g = Graph::undirected();
        let a = g.add_node('a');
        let b = g.add_node('b');
        let c = g.add_node('c');
        let d = g.add_node('d');
        let ab = g.add_edge(a, b, Some(1.0));
        let bc = g.add_edge(b, c, Some(2.0));
        g.add_edge(a, c, Some(3.0));
        let cd = g.add_edge(c, d, Some(4.0));

        let tree = minimum_spanning_forest(&g).unwrap();
        assert_eq!(vec![ab, bc, cd], tree);

        let total: f64 = tree.iter().filter_map(|&id| g.edge(id).weight()).sum();
        assert_eq!(7.0, total);
    }

    #[test]
    fn forest_of_disconnected_graph() {
        let mut g = Graph::undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        g.add_node(2);
        let d = g.add_node(3);
        let e = g.add_node(4);
        let ab = g.add_edge(a, b, Some(1.0));
        let de = g.add_edge(d, e, Some(2.0));

        // 5 nodes, 3 components: 2 spanning edges
        assert_eq!(vec![ab, de], minimum_spanning_forest(&g).unwrap());
    }

    #[test]
    fn empty_graph() {
        let g: Graph<u32> = Graph::undirected();
        assert!(minimum_spanning_forest(&g).unwrap().is_empty());
    }

    #[test]
    fn equal_weights_keep_registration_order() {
        let mut g = Graph::undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        let c = g.add_node(2);
        let ab = g.add_edge(a, b, Some(1.0));
        let ac = g.add_edge(a, c, Some(1.0));
        g.add_edge(b, c, Some(1.0));

        assert_eq!(vec![ab, ac], minimum_spanning_forest(&g).unwrap());
    }

    #[test]
    fn self_loops_and_parallel_edges_are_skipped() {
        let mut g = Graph::undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        g.add_edge(a, a, Some(0.0));
        let light = g.add_edge(a, b, Some(1.0));
        g.add_edge(a, b, Some(2.0));

        assert_eq!(vec![light], minimum_spanning_forest(&g).unwrap());
    }

    #[test]
    fn rejects_directed_graph() {
        let mut g = Graph::directed();
        let a = g.add_node(0);
        let b = g.add_node(1);
        g.add_edge(a, b, Some(1.0));

        assert_eq!(Err(Error::DirectedGraph), minimum_spanning_forest(&g));
    }

    #[test]
    fn rejects_one_missing_weight_among_valid_edges() {
        let mut g = Graph::undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        let c = g.add_node(2);
        g.add_edge(a, b, Some(1.0));
        let bad = g.add_edge(b, c, None);

        assert_eq!(
            Err(Error::MissingWeight(bad)),
            minimum_spanning_forest(&g)
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let mut g = Graph::undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        g.add_edge(a, b, Some(-0.5));

        assert!(matches!(
            minimum_spanning_forest(&g),
            Err(Error::NegativeWeight { .. })
        ));
    }
}
