//! Disjoint-set forest with path compression and union by rank.
//!
//! Elements are stored in an arena of set-nodes addressed by `usize` handles.
//! Each set-node records its parent handle (its own handle for a root) and a
//! rank bounding the height of its subtree. A hash index maps elements to
//! handles, so membership tests are O(1) and handles follow registration
//! order.

use std::{collections::HashMap, fmt, hash::Hash};

use tracing::trace;

use crate::error::{DisjointSetError, describe};

#[derive(Clone, Debug)]
struct SetNode<E> {
    item: E,
    parent: usize,
    rank: u32,
}

/// A partition of registered elements into disjoint sets.
///
/// # Examples
/// ```
/// use graphkit_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new();
/// forest.make_set("a")?;
/// forest.make_set("b")?;
/// forest.union(&"a", &"b")?;
/// assert_eq!(forest.find_set(&"a")?, "b");
/// # Ok::<(), graphkit_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest<E> {
    nodes: Vec<SetNode<E>>,
    handles: HashMap<E, usize>,
}

impl<E> Default for DisjointSetForest<E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            handles: HashMap::new(),
        }
    }
}

impl<E> DisjointSetForest<E> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            handles: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no element is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Forgets every element. The forest is immediately reusable.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.handles.clear();
    }

    /// Follows parent links from `handle` to its root, then points every node
    /// on the visited path directly at that root.
    fn find_root(&mut self, handle: usize) -> usize {
        let mut path = Vec::new();
        let mut current = handle;
        loop {
            let parent = self.nodes[current].parent;
            if parent == current {
                break;
            }
            path.push(current);
            current = parent;
        }
        for visited in path {
            self.nodes[visited].parent = current;
        }
        current
    }
}

impl<E> DisjointSetForest<E>
where
    E: Eq + Hash + Clone + fmt::Debug,
{
    /// Returns `true` when `element` has been registered.
    #[must_use]
    pub fn is_present(&self, element: &E) -> bool {
        self.handles.contains_key(element)
    }

    /// Registers `element` as a new singleton set of rank zero.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementAlreadyPresent`] when `element` is
    /// already registered.
    pub fn make_set(&mut self, element: E) -> Result<(), DisjointSetError> {
        if self.is_present(&element) {
            return Err(DisjointSetError::ElementAlreadyPresent {
                element: describe(&element),
            });
        }
        let handle = self.nodes.len();
        self.handles.insert(element.clone(), handle);
        self.nodes.push(SetNode {
            item: element,
            parent: handle,
            rank: 0,
        });
        Ok(())
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node on the path to the root is re-parented directly onto the
    /// root as a side effect.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotPresent`] when `element` is not
    /// registered.
    pub fn find_set(&mut self, element: &E) -> Result<E, DisjointSetError> {
        let handle = self.handle_of(element)?;
        let root = self.find_root(handle);
        Ok(self.nodes[root].item.clone())
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// The root of higher rank absorbs the other. On equal ranks the root of
    /// `second` becomes the representative and its rank grows by one. Joining
    /// two elements that already share a set does nothing.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotPresent`] when either element is
    /// not registered; the forest is left untouched in that case.
    pub fn union(&mut self, first: &E, second: &E) -> Result<(), DisjointSetError> {
        let first = self.handle_of(first)?;
        let second = self.handle_of(second)?;
        let first_root = self.find_root(first);
        let second_root = self.find_root(second);
        if first_root == second_root {
            return Ok(());
        }

        let first_rank = self.nodes[first_root].rank;
        let second_rank = self.nodes[second_root].rank;
        if first_rank > second_rank {
            self.nodes[second_root].parent = first_root;
        } else {
            self.nodes[first_root].parent = second_root;
            if first_rank == second_rank {
                self.nodes[second_root].rank = second_rank.saturating_add(1);
            }
        }
        trace!(first_rank, second_rank, "disjoint sets merged");
        Ok(())
    }

    /// Returns one representative per set, in registration order of the
    /// first element of each set encountered.
    ///
    /// Runs a find on every element, compressing paths along the way.
    pub fn current_representatives(&mut self) -> Vec<E> {
        let mut seen = vec![false; self.nodes.len()];
        let mut representatives = Vec::new();
        for handle in 0..self.nodes.len() {
            let root = self.find_root(handle);
            if !seen[root] {
                seen[root] = true;
                representatives.push(self.nodes[root].item.clone());
            }
        }
        representatives
    }

    /// Returns every element sharing `element`'s representative, in
    /// registration order.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotPresent`] when `element` is not
    /// registered.
    pub fn current_elements_of_set_containing(
        &mut self,
        element: &E,
    ) -> Result<Vec<E>, DisjointSetError> {
        let handle = self.handle_of(element)?;
        let root = self.find_root(handle);
        let mut members = Vec::new();
        for candidate in 0..self.nodes.len() {
            if self.find_root(candidate) == root {
                members.push(self.nodes[candidate].item.clone());
            }
        }
        Ok(members)
    }

    /// Returns the rank stored on `element`'s set-node.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotPresent`] when `element` is not
    /// registered.
    pub fn rank_of(&self, element: &E) -> Result<u32, DisjointSetError> {
        let handle = self.handle_of(element)?;
        Ok(self.nodes[handle].rank)
    }

    fn handle_of(&self, element: &E) -> Result<usize, DisjointSetError> {
        self.handles
            .get(element)
            .copied()
            .ok_or_else(|| DisjointSetError::ElementNotPresent {
                element: describe(element),
            })
    }

    #[cfg(test)]
    fn parent_of(&self, element: &E) -> Option<E> {
        let handle = *self.handles.get(element)?;
        let parent = self.nodes[handle].parent;
        Some(self.nodes[parent].item.clone())
    }
}
