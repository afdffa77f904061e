//! Forest-of-trees union-find over a dynamically registered universe.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A partition of a dynamically registered universe into disjoint sets.
///
/// Each set is identified by one of its members, its *representative*.
/// Union is rank-balanced and `find_set` performs path halving, so both
/// run in effectively-constant amortized time. Parents live in `Cell`s,
/// which lets lookups compress paths through a shared reference; the
/// structure is meant for single-threaded use.
///
/// The forest starts empty. [`make_set`](DisjointSetForest::make_set)
/// registers a singleton, [`union`](DisjointSetForest::union) merges two
/// sets, and [`clear`](DisjointSetForest::clear) empties the whole
/// structure so it can be reused.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "E: serde::Deserialize<'de> + Eq + std::hash::Hash"))
)]
pub struct DisjointSetForest<E> {
    indices: HashMap<E, usize>,
    items: Vec<E>,
    parents: Vec<Cell<usize>>,
    ranks: Vec<u8>,
}
// Invariant: items, parents and ranks have equal length, and indices maps
// items[i] back to i.

impl<E: Debug> Debug for DisjointSetForest<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisjointSetForest({:?})", self.items)
    }
}

impl<E> Default for DisjointSetForest<E> {
    fn default() -> Self {
        DisjointSetForest {
            indices: HashMap::new(),
            items: Vec::new(),
            parents: Vec::new(),
            ranks: Vec::new(),
        }
    }
}

impl<E: Eq + Hash + Clone> DisjointSetForest<E> {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of registered elements across all sets.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the forest devoid of elements?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `element` has been registered.
    pub fn contains(&self, element: &E) -> bool {
        self.indices.contains_key(element)
    }

    /// Registers `element` as a new singleton set.
    ///
    /// Returns whether anything changed: `false` means the element was
    /// already registered and the forest is untouched.
    pub fn make_set(&mut self, element: E) -> bool {
        if self.indices.contains_key(&element) {
            return false;
        }
        let i = self.items.len();
        self.indices.insert(element.clone(), i);
        self.items.push(element);
        self.parents.push(Cell::new(i));
        self.ranks.push(0);
        true
    }

    /// Finds the representative of `element`'s set.
    ///
    /// Returns `None` when `element` was never registered. Two registered
    /// elements are in the same set iff their representatives are equal.
    pub fn find_set(&self, element: &E) -> Option<&E> {
        let &i = self.indices.get(element)?;
        Some(&self.items[self.find_index(i)])
    }

    /// Joins the sets of the two given elements.
    ///
    /// Returns whether anything changed. That is, if the sets were
    /// different, it returns `true`, but if they were already the same
    /// then it returns `false`. The representative of the merged set is
    /// one of the two previous representatives; which one is unspecified.
    ///
    /// # Panics
    ///
    /// If either element was never registered.
    pub fn union(&mut self, a: &E, b: &E) -> bool {
        let a = self.find_index(self.index_of(a));
        let b = self.find_index(self.index_of(b));

        if a == b {
            return false;
        }

        let rank_a = self.ranks[a];
        let rank_b = self.ranks[b];

        if rank_a > rank_b {
            self.parents[b].set(a);
        } else if rank_b > rank_a {
            self.parents[a].set(b);
        } else {
            self.parents[a].set(b);
            self.ranks[b] = self.ranks[b].saturating_add(1);
        }

        true
    }

    /// The current representatives, one per set, in registration order.
    pub fn representatives(&self) -> Vec<&E> {
        (0..self.items.len())
            .filter(|&i| self.find_index(i) == i)
            .map(|i| &self.items[i])
            .collect()
    }

    /// All members of the set containing `element`, in registration
    /// order. Any member may be passed, not just the representative.
    ///
    /// # Panics
    ///
    /// If `element` was never registered.
    pub fn elements_of(&self, element: &E) -> Vec<&E> {
        let root = self.find_index(self.index_of(element));
        (0..self.items.len())
            .filter(|&i| self.find_index(i) == root)
            .map(|i| &self.items[i])
            .collect()
    }

    /// Empties the forest, forgetting every element and every set.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.items.clear();
        self.parents.clear();
        self.ranks.clear();
    }

    // HELPERS

    fn index_of(&self, element: &E) -> usize {
        *self
            .indices
            .get(element)
            .expect("DisjointSetForest: element not registered")
    }

    fn find_index(&self, mut element: usize) -> usize {
        let mut parent = self.parents[element].get();

        while element != parent {
            let grandparent = self.parents[parent].get();
            self.parents[element].set(grandparent);
            element = parent;
            parent = grandparent;
        }

        element
    }
}
