//! Adjacency representation.
//!
//! One sorted edge set per node, keyed by the source handle. Sets are plain vectors kept in
//! `(destination value, weight)` order; since their order depends on node values owned by the
//! registry, every ordered operation takes the registry as a parameter.

use std::borrow::Borrow;
use std::ops::Range;

use super::HashMap;
use super::ordering::{EdgeKeyView, cmp_edge, cmp_node};
use super::registry::{NodeId, NodeRegistry};

/// Stable identity of one edge within a graph. Never reused, not even after `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeId(u64);

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) id: EdgeId,
    pub(in crate::graph) to: NodeId,
    pub(in crate::graph) weight: E,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct Adjacency<E> {
    sets: HashMap<NodeId, Vec<EdgeEntry<E>>>,
    next_id: u64,
}

impl<E> Default for Adjacency<E> {
    fn default() -> Self {
        Self {
            sets: HashMap::default(),
            next_id: 0,
        }
    }
}

/// Position of the exact `(destination, weight)` pair in `set`.
pub(in crate::graph) fn search<N, E, Q, W>(
    nodes: &NodeRegistry<N>,
    set: &[EdgeEntry<E>],
    probe: EdgeKeyView<'_, Q, W>,
) -> Result<usize, usize>
where
    N: Borrow<Q>,
    E: Borrow<W>,
    Q: Ord + ?Sized,
    W: Ord + ?Sized,
{
    set.binary_search_by(|entry| cmp_edge(nodes, entry, probe))
}

/// The contiguous block of edges in `set` whose destination equals `to`.
pub(in crate::graph) fn dst_range<N, E, Q>(
    nodes: &NodeRegistry<N>,
    set: &[EdgeEntry<E>],
    to: &Q,
) -> Range<usize>
where
    N: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let start = set.partition_point(|e| cmp_node(nodes, e.to, to).is_lt());
    let end = start + set[start..].partition_point(|e| cmp_node(nodes, e.to, to).is_eq());
    start..end
}

impl<E> Adjacency<E> {
    pub(in crate::graph) fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub(in crate::graph) fn set(&self, id: NodeId) -> &[EdgeEntry<E>] {
        self.sets.get(&id).map_or(&[], Vec::as_slice)
    }

    pub(in crate::graph) fn add_set(&mut self, id: NodeId) {
        self.sets.entry(id).or_default();
    }

    pub(in crate::graph) fn take_set(&mut self, id: NodeId) -> Vec<EdgeEntry<E>> {
        self.sets.remove(&id).unwrap_or_default()
    }

    pub(in crate::graph) fn put_set(&mut self, id: NodeId, set: Vec<EdgeEntry<E>>) {
        let prev = self.sets.insert(id, set);
        debug_assert!(prev.is_none(), "adjacency set overwritten");
    }

    pub(in crate::graph) fn remove_at(&mut self, id: NodeId, inner: usize) -> Option<EdgeEntry<E>> {
        let set = self.sets.get_mut(&id)?;
        (inner < set.len()).then(|| set.remove(inner))
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.sets.clear();
    }
}

impl<E: Ord> Adjacency<E> {
    /// Adds `from -> to` with `weight`. Returns `false` for a duplicate triple.
    pub(in crate::graph) fn insert<N: Ord>(
        &mut self,
        nodes: &NodeRegistry<N>,
        from: NodeId,
        to: NodeId,
        weight: E,
    ) -> bool {
        let Some(set) = self.sets.get_mut(&from) else {
            debug_assert!(false, "registered node without an adjacency set");
            return false;
        };
        let id = EdgeId(self.next_id);
        let inserted = insert_sorted(nodes, set, EdgeEntry { id, to, weight });
        if inserted {
            self.next_id += 1;
        }
        inserted
    }

    /// Removes the exact `(to, weight)` edge from the set of `from`.
    pub(in crate::graph) fn remove<N, Q, W>(
        &mut self,
        nodes: &NodeRegistry<N>,
        from: NodeId,
        probe: EdgeKeyView<'_, Q, W>,
    ) -> bool
    where
        N: Borrow<Q>,
        E: Borrow<W>,
        Q: Ord + ?Sized,
        W: Ord + ?Sized,
    {
        let Some(set) = self.sets.get_mut(&from) else {
            return false;
        };
        match search(nodes, set, probe) {
            Ok(pos) => {
                set.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every edge pointing at `to`, in every set. Returns how many were removed.
    pub(in crate::graph) fn remove_incoming<N: Ord>(
        &mut self,
        nodes: &NodeRegistry<N>,
        to: NodeId,
    ) -> usize {
        let target = nodes.value(to);
        let mut removed = 0;
        for set in self.sets.values_mut() {
            let range = dst_range(nodes, set, target);
            removed += range.len();
            set.drain(range);
        }
        removed
    }

    /// Points every edge that targets `from` at `to` instead, keeping each set sorted.
    ///
    /// A retargeted edge that duplicates one already present is dropped. Returns the number of
    /// dropped edges.
    pub(in crate::graph) fn retarget<N: Ord>(
        &mut self,
        nodes: &NodeRegistry<N>,
        from: NodeId,
        to: NodeId,
    ) -> usize {
        let old = nodes.value(from);
        let mut dropped = 0;
        for set in self.sets.values_mut() {
            let range = dst_range(nodes, set, old);
            if range.is_empty() {
                continue;
            }
            let moved: Vec<EdgeEntry<E>> = set.drain(range).collect();
            for entry in moved {
                if !insert_sorted(nodes, set, EdgeEntry { to, ..entry }) {
                    dropped += 1;
                }
            }
        }
        dropped
    }

    /// Moves the outgoing set of `from` into the set of `into`, dropping duplicates.
    pub(in crate::graph) fn merge_set<N: Ord>(
        &mut self,
        nodes: &NodeRegistry<N>,
        from: NodeId,
        into: NodeId,
    ) -> usize {
        let outgoing = self.take_set(from);
        let Some(set) = self.sets.get_mut(&into) else {
            debug_assert!(false, "merge target without an adjacency set");
            return outgoing.len();
        };
        let mut dropped = 0;
        for entry in outgoing {
            if !insert_sorted(nodes, set, entry) {
                dropped += 1;
            }
        }
        dropped
    }
}

fn insert_sorted<N: Ord, E: Ord>(
    nodes: &NodeRegistry<N>,
    set: &mut Vec<EdgeEntry<E>>,
    entry: EdgeEntry<E>,
) -> bool {
    let probe = EdgeKeyView::new(nodes.value(entry.to), &entry.weight);
    match search(nodes, set, probe) {
        Ok(_) => false,
        Err(pos) => {
            set.insert(pos, entry);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (NodeRegistry<char>, Adjacency<i32>, [NodeId; 3]) {
        let mut nodes = NodeRegistry::default();
        let mut adjacency = Adjacency::default();
        let ids = ['a', 'b', 'c'].map(|v| {
            let id = nodes.insert(v).unwrap();
            adjacency.add_set(id);
            id
        });
        (nodes, adjacency, ids)
    }

    #[test]
    fn sets_sort_by_destination_value_then_weight() {
        let (nodes, mut adj, [a, b, c]) = setup();
        assert!(adj.insert(&nodes, a, c, 1));
        assert!(adj.insert(&nodes, a, b, 9));
        assert!(adj.insert(&nodes, a, b, 2));
        assert!(!adj.insert(&nodes, a, b, 2));

        let got: Vec<(char, i32)> = adj
            .set(a)
            .iter()
            .map(|e| (*nodes.value(e.to), e.weight))
            .collect();
        assert_eq!(got, vec![('b', 2), ('b', 9), ('c', 1)]);
        assert_eq!(dst_range(&nodes, adj.set(a), &'b'), 0..2);
        assert_eq!(dst_range(&nodes, adj.set(a), &'a'), 0..0);
    }

    #[test]
    fn retarget_drops_duplicates() {
        let (nodes, mut adj, [a, b, c]) = setup();
        adj.insert(&nodes, a, b, 1);
        adj.insert(&nodes, a, c, 1);
        adj.insert(&nodes, a, b, 5);
        let kept = adj.set(a)[1].id;

        assert_eq!(adj.retarget(&nodes, b, c), 1);
        assert_eq!(adj.set(a)[1].id, kept);
        let got: Vec<(char, i32)> = adj
            .set(a)
            .iter()
            .map(|e| (*nodes.value(e.to), e.weight))
            .collect();
        assert_eq!(got, vec![('c', 1), ('c', 5)]);
    }
}
