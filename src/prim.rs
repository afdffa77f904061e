//! Minimum spanning trees via Prim's algorithm.
//!
//! The tree grows outward from a source node; each round attaches the
//! lightest edge crossing the boundary between the grown tree and the
//! rest of the graph. The frontier is rebuilt from scratch every round
//! and scanned linearly instead of being kept in a decrease-key priority
//! queue. That keeps the bookkeeping simple at O(V·E) total cost, which
//! is fine for small and medium graphs.

use std::hash::Hash;

use log::debug;

use crate::error::Result;
use crate::graph::{EdgeId, Graph, NodeId};

/// Traversal state of a node during a [`minimum_spanning_tree`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Not yet part of the tree.
    Unvisited,
    /// Seen across the frontier but not yet attached.
    Discovered,
    /// Attached to the tree.
    Visited,
}

/// The spanning tree grown by one [`minimum_spanning_tree`] call.
///
/// Holds the per-node traversal state the run produced: a [`Color`], the
/// weight of the edge that attached the node (its *tentative distance*),
/// and the parent it was attached through. The source has distance `0`
/// and no predecessor. Nodes the tree never reached (the rest of a
/// disconnected graph) stay [`Color::Unvisited`] with an infinite
/// distance and no predecessor.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    source: NodeId,
    colors: Vec<Color>,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
}

impl Tree {
    /// The node the tree was grown from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The traversal state `node` ended in.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph the tree was computed on.
    pub fn color(&self, node: NodeId) -> Color {
        self.colors[node.index()]
    }

    /// Weight of the edge that attached `node` to the tree: `0.0` for the
    /// source, `f64::INFINITY` for unreached nodes.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph the tree was computed on.
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distances[node.index()]
    }

    /// The node `node` was attached through, if any. Following
    /// predecessors from any reached node leads back to the source.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph the tree was computed on.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node.index()]
    }

    /// Whether `node` was attached to the tree (the source counts).
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph the tree was computed on.
    pub fn reached(&self, node: NodeId) -> bool {
        self.colors[node.index()] == Color::Visited
    }

    /// Total weight of the tree: the sum of every reached node's
    /// attachment weight (the source contributes nothing).
    pub fn total_weight(&self) -> f64 {
        self.distances
            .iter()
            .zip(&self.colors)
            .filter(|&(_, color)| *color == Color::Visited)
            .map(|(&distance, _)| distance)
            .sum()
    }
}

/// Grows a minimum spanning tree of `graph` outward from `source`.
///
/// The result encodes the tree through each node's
/// [`predecessor`](Tree::predecessor) and [`distance`](Tree::distance).
/// On a disconnected graph only `source`'s component is spanned; the
/// other nodes are left unreached.
///
/// When several frontier edges share the minimum weight, which of them is
/// taken is unspecified.
///
/// # Errors
///
/// Fails with [`Error::NodeOutOfBounds`](crate::Error::NodeOutOfBounds)
/// when `source` is not a node of `graph`, with
/// [`Error::DirectedGraph`](crate::Error::DirectedGraph) on a directed
/// graph, and with [`Error::MissingWeight`](crate::Error::MissingWeight)
/// or [`Error::NegativeWeight`](crate::Error::NegativeWeight) when any
/// edge is unweighted, negative or NaN. All preconditions are checked
/// before any work is done.
pub fn minimum_spanning_tree<L>(graph: &Graph<L>, source: NodeId) -> Result<Tree>
where
    L: Eq + Hash + Clone,
{
    graph.ensure_node(source)?;
    graph.ensure_undirected()?;
    let weights = graph.edge_weights()?;

    let n = graph.node_count();
    let mut tree = Tree {
        source,
        colors: vec![Color::Unvisited; n],
        distances: vec![f64::INFINITY; n],
        predecessors: vec![None; n],
    };
    tree.colors[source.index()] = Color::Visited;
    tree.distances[source.index()] = 0.0;

    let mut visited = vec![source];
    let mut frontier: Vec<EdgeId> = Vec::new();

    for _ in 1..n {
        frontier.clear();
        for &node in &visited {
            frontier.extend(graph.edges_of(node));
        }
        // an edge with both ends attached no longer crosses the boundary
        frontier.retain(|&id| {
            let (u, v) = graph.edge(id).endpoints();
            tree.colors[u.index()] != Color::Visited || tree.colors[v.index()] != Color::Visited
        });

        // first minimum wins
        let mut lightest: Option<EdgeId> = None;
        for &id in &frontier {
            if lightest.map_or(true, |best| weights[id.index()] < weights[best.index()]) {
                lightest = Some(id);
            }
        }

        // no crossing edge left: the remaining nodes are unreachable
        let Some(id) = lightest else { break };

        let (u, v) = graph.edge(id).endpoints();
        let (inside, outside) = if tree.colors[u.index()] == Color::Visited {
            (u, v)
        } else {
            (v, u)
        };
        tree.colors[outside.index()] = Color::Visited;
        tree.distances[outside.index()] = weights[id.index()];
        tree.predecessors[outside.index()] = Some(inside);
        visited.push(outside);
    }

    debug!(
        "prim: reached {} of {} nodes from {:?}",
        visited.len(),
        n,
        source
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn diamond() -> (Graph<char>, [NodeId; 4]) {
        let mut g = Graph::undirected();
        let a = g.add_node('a');
        let b = g.add_node('b');
        let c = g.add_node('c');
        let d = g.add_node('d');
        g.add_edge(a, b, Some(1.0));
        g.add_edge(b, c, Some(2.0));
        g.add_edge(a, c, Some(3.0));
        g.add_edge(c, d, Some(4.0));
        (g, [a, b, c, d])
    }

    #[test]
    fn grows_the_minimum_tree_from_the_source() {
        let (g, [a, b, c, d]) = diamond();
        let tree = minimum_spanning_tree(&g, a).unwrap();

        assert_eq!(a, tree.source());
        assert_eq!(None, tree.predecessor(a));
        assert_eq!(Some(a), tree.predecessor(b));
        assert_eq!(Some(b), tree.predecessor(c));
        assert_eq!(Some(c), tree.predecessor(d));

        assert_eq!(0.0, tree.distance(a));
        assert_eq!(1.0, tree.distance(b));
        assert_eq!(2.0, tree.distance(c));
        assert_eq!(4.0, tree.distance(d));

        assert_eq!(7.0, tree.total_weight());
        assert!(g.nodes().all(|n| tree.color(n) == Color::Visited));
    }

    #[test]
    fn any_source_yields_the_same_total() {
        let (g, nodes) = diamond();
        for source in nodes {
            let tree = minimum_spanning_tree(&g, source).unwrap();
            assert_eq!(7.0, tree.total_weight());
        }
    }

    #[test]
    fn unreached_nodes_keep_their_defaults() {
        let mut g = Graph::undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        let c = g.add_node(2);
        let d = g.add_node(3);
        g.add_edge(a, b, Some(1.0));
        g.add_edge(c, d, Some(2.0));

        let tree = minimum_spanning_tree(&g, a).unwrap();
        assert!(tree.reached(b));
        for unreached in [c, d] {
            assert_eq!(Color::Unvisited, tree.color(unreached));
            assert_eq!(f64::INFINITY, tree.distance(unreached));
            assert_eq!(None, tree.predecessor(unreached));
        }
        assert_eq!(1.0, tree.total_weight());
    }

    #[test]
    fn single_node_graph() {
        let mut g = Graph::undirected();
        let a = g.add_node(());
        let tree = minimum_spanning_tree(&g, a).unwrap();

        assert!(tree.reached(a));
        assert_eq!(0.0, tree.total_weight());
    }

    #[test]
    fn rejects_source_missing_from_graph() {
        let mut other = Graph::undirected();
        for i in 0..9 {
            other.add_node(i);
        }
        let stale = other.node_id(&8).unwrap();

        let mut g = Graph::undirected();
        g.add_node(0);
        assert_eq!(
            Error::NodeOutOfBounds(stale),
            minimum_spanning_tree(&g, stale).unwrap_err()
        );
    }

    #[test]
    fn rejects_directed_graph() {
        let mut g = Graph::directed();
        let a = g.add_node(0);
        let b = g.add_node(1);
        g.add_edge(a, b, Some(1.0));

        assert_eq!(
            Error::DirectedGraph,
            minimum_spanning_tree(&g, a).unwrap_err()
        );
    }

    #[test]
    fn rejects_one_bad_weight_among_valid_edges() {
        let (mut g, [a, _, _, d]) = diamond();
        let bad = g.add_edge(a, d, None);
        assert_eq!(
            Error::MissingWeight(bad),
            minimum_spanning_tree(&g, a).unwrap_err()
        );

        let (mut g, [a, _, c, d]) = diamond();
        g.add_edge(c, d, Some(-1.0));
        assert!(matches!(
            minimum_spanning_tree(&g, a).unwrap_err(),
            Error::NegativeWeight { .. }
        ));
    }

    #[test]
    fn source_is_checked_before_directedness() {
        let mut g = Graph::directed();
        g.add_node(0);

        let mut other = Graph::undirected();
        for i in 0..5 {
            other.add_node(i);
        }
        let stale = other.node_id(&4).unwrap();

        assert_eq!(
            Error::NodeOutOfBounds(stale),
            minimum_spanning_tree(&g, stale).unwrap_err()
        );
    }
}
