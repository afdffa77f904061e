//! The graph representation the algorithms consume.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// Identifies a node within the [`Graph`] that produced it.
///
/// Ids are dense indices in node registration order. An id is only
/// meaningful for the graph it came from; using a stale id with another
/// graph either panics (accessors) or is rejected (algorithms).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Identifies an edge within the [`Graph`] that produced it.
///
/// Ids are dense indices in edge registration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// An edge joining two nodes, with an optional weight.
///
/// Two edges are equal when they join the same unordered pair of
/// endpoints; the weight takes no part in equality or hashing.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    node1: NodeId,
    node2: NodeId,
    weight: Option<f64>,
}

impl Edge {
    /// The first endpoint, in the order the edge was added.
    pub fn node1(&self) -> NodeId {
        self.node1
    }

    /// The second endpoint.
    pub fn node2(&self) -> NodeId {
        self.node2
    }

    /// Both endpoints.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.node1, self.node2)
    }

    /// Whether a weight is present.
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// The weight, if present.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Given one endpoint, returns the other.
    ///
    /// Returns `None` when `node` is not an endpoint of this edge.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.node1 {
            Some(self.node2)
        } else if node == self.node2 {
            Some(self.node1)
        } else {
            None
        }
    }

    fn key(&self) -> (NodeId, NodeId) {
        if self.node2 < self.node1 {
            (self.node2, self.node1)
        } else {
            (self.node1, self.node2)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Edge) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "Edge({:?} -- {:?}, {})", self.node1, self.node2, w),
            None => write!(f, "Edge({:?} -- {:?})", self.node1, self.node2),
        }
    }
}

/// An in-memory graph: labeled nodes, optionally weighted edges, and
/// per-node incidence lists.
///
/// Nodes are identified by their label (`L`); adding a label twice yields
/// the same node. Self-loops and parallel edges are representable, and
/// the algorithms tolerate both. The directedness flag is fixed at
/// construction; the algorithms in this crate reject directed graphs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "L: serde::Deserialize<'de> + Eq + std::hash::Hash"))
)]
pub struct Graph<L> {
    labels: Vec<L>,
    index: HashMap<L, NodeId>,
    edges: Vec<Edge>,
    incident: Vec<Vec<EdgeId>>,
    directed: bool,
}
// Invariant: labels and incident have equal length, index maps labels[i]
// back to NodeId(i), and every edge endpoint is a valid node index.

impl<L: Eq + Hash + Clone> Default for Graph<L> {
    fn default() -> Self {
        Graph::undirected()
    }
}

impl<L: Eq + Hash + Clone> Graph<L> {
    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Graph::new(false)
    }

    /// Creates an empty directed graph.
    ///
    /// The algorithms in this crate reject directed graphs; the flag
    /// exists so the store can be shared with code that needs orientation
    /// and so rejection can be exercised.
    pub fn directed() -> Self {
        Graph::new(true)
    }

    fn new(directed: bool) -> Self {
        Graph {
            labels: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            incident: Vec::new(),
            directed,
        }
    }

    /// Whether edges are oriented.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Registers a node, returning its id.
    ///
    /// Labels are identities: adding an already-present label returns the
    /// existing id and registers nothing.
    pub fn add_node(&mut self, label: L) -> NodeId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.incident.push(Vec::new());
        id
    }

    /// Adds an edge between two registered nodes.
    ///
    /// Pass `None` for an unweighted edge; the MST algorithms will reject
    /// it, the component computation will not care.
    ///
    /// # Panics
    ///
    /// If either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Option<f64>) -> EdgeId {
        assert!(
            a.0 < self.labels.len() && b.0 < self.labels.len(),
            "Graph::add_edge: endpoint not in graph"
        );
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            node1: a,
            node2: b,
            weight,
        });
        self.incident[a.0].push(id);
        if !self.directed && a != b {
            self.incident[b.0].push(id);
        }
        id
    }

    /// Looks a node up by label.
    pub fn node_id(&self, label: &L) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// The label of a node.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of this graph.
    pub fn label(&self, node: NodeId) -> &L {
        &self.labels[node.0]
    }

    /// Whether `node` names a node of this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.labels.len()
    }

    /// Node ids in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId)
    }

    /// Edge ids in registration order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    /// The edge behind an id.
    ///
    /// # Panics
    ///
    /// If `edge` is not an edge of this graph.
    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.0]
    }

    /// Ids of the edges incident to `node`; for directed graphs, the
    /// edges leaving it. A self-loop is listed once.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of this graph.
    pub fn edges_of(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident[node.0].iter().copied()
    }

    // PRECONDITIONS SHARED BY THE ALGORITHMS

    pub(crate) fn ensure_undirected(&self) -> Result<()> {
        if self.directed {
            Err(Error::DirectedGraph)
        } else {
            Ok(())
        }
    }

    pub(crate) fn ensure_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::NodeOutOfBounds(node))
        }
    }

    /// Every edge weight, indexed by edge id, rejecting absent, negative
    /// and NaN weights.
    pub(crate) fn edge_weights(&self) -> Result<Vec<f64>> {
        let mut weights = Vec::with_capacity(self.edges.len());
        for (i, edge) in self.edges.iter().enumerate() {
            let w = edge.weight.ok_or(Error::MissingWeight(EdgeId(i)))?;
            if w.is_nan() || w < 0.0 {
                return Err(Error::NegativeWeight {
                    edge: EdgeId(i),
                    weight: w,
                });
            }
            weights.push(w);
        }
        Ok(weights)
    }
}
