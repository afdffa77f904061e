//! Minimum spanning trees and connected components for undirected
//! weighted graphs.
//!
//! Three operations over one [`Graph`] representation:
//!
//! | operation | entry point | result |
//! | :-------- | :---------- | :----- |
//! | Kruskal's MST | [`kruskal::minimum_spanning_forest`] | the tree's edges |
//! | Prim's MST | [`prim::minimum_spanning_tree`] | per-node predecessor/distance records |
//! | connected components | [`components::connected_components`] | a partition of the nodes |
//!
//! Kruskal's algorithm and the component computation are built on
//! [`DisjointSetForest`], a union-find over arbitrary hashable elements
//! that is part of the public API in its own right. The MST algorithms
//! require every edge weight to be present and non-negative; all three
//! require the graph to be undirected. Violations are reported as
//! [`Error`]s before any work is done.
//!
//! # Examples
//!
//! ```
//! use spanning::{components, kruskal, prim, Graph};
//!
//! // Graph to use:
//! //
//! //  a --1-- b
//! //  |       |
//! //  3       2
//! //  |       |
//! //  +------ c --4-- d
//! let mut graph = Graph::undirected();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! let d = graph.add_node("d");
//! let ab = graph.add_edge(a, b, Some(1.0));
//! let bc = graph.add_edge(b, c, Some(2.0));
//! graph.add_edge(a, c, Some(3.0));
//! let cd = graph.add_edge(c, d, Some(4.0));
//!
//! // Kruskal: the a--c edge would close a cycle and is left out.
//! let tree = kruskal::minimum_spanning_forest(&graph).unwrap();
//! assert_eq!(vec![ab, bc, cd], tree);
//!
//! // Prim from a grows the same tree, recorded as predecessor links.
//! let tree = prim::minimum_spanning_tree(&graph, a).unwrap();
//! assert_eq!(Some(c), tree.predecessor(d));
//! assert_eq!(7.0, tree.total_weight());
//!
//! // One component, holding every node.
//! let parts = components::connected_components(&graph).unwrap();
//! assert_eq!(1, parts.len());
//! assert_eq!(4, parts[0].len());
//! ```

#![warn(missing_docs)]

mod error;
mod forest;
mod graph;

pub mod components;
pub mod kruskal;
pub mod prim;

pub use error::{Error, Result};
pub use forest::DisjointSetForest;
pub use graph::{Edge, EdgeId, Graph, NodeId};
