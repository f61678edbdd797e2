//! Node registry.
//!
//! The registry is the single owner of node values. Each node gets a [`NodeId`] at insertion;
//! adjacency sets refer to nodes only through these handles. A value-sorted `order` index maps
//! ranks to handles so the registry can be walked and searched by value.

use std::borrow::Borrow;

use super::HashMap;
use super::ordering::cmp_node;

/// Stable handle of a node within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(u64);

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeRegistry<N> {
    values: HashMap<NodeId, N>,
    order: Vec<NodeId>,
    next_id: u64,
}

impl<N> Default for NodeRegistry<N> {
    fn default() -> Self {
        Self {
            values: HashMap::default(),
            order: Vec::new(),
            next_id: 0,
        }
    }
}

impl<N> NodeRegistry<N> {
    pub(in crate::graph) fn len(&self) -> usize {
        self.order.len()
    }

    pub(in crate::graph) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(in crate::graph) fn value(&self, id: NodeId) -> &N {
        &self.values[&id]
    }

    pub(in crate::graph) fn id_at(&self, rank: usize) -> NodeId {
        self.order[rank]
    }

    /// Node handles in ascending value order.
    pub(in crate::graph) fn ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Node values in ascending order.
    pub(in crate::graph) fn values(
        &self,
    ) -> impl DoubleEndedIterator<Item = &N> + ExactSizeIterator {
        self.order.iter().map(|id| &self.values[id])
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.values.clear();
        self.order.clear();
    }
}

impl<N: Ord> NodeRegistry<N> {
    /// Binary search by value: `Ok(rank)` when present, `Err(insertion rank)` otherwise.
    pub(in crate::graph) fn rank_of<Q>(&self, probe: &Q) -> Result<usize, usize>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.order.binary_search_by(|&id| cmp_node(self, id, probe))
    }

    pub(in crate::graph) fn find<Q>(&self, probe: &Q) -> Option<NodeId>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.rank_of(probe).ok().map(|rank| self.order[rank])
    }

    /// Current rank of a live handle.
    pub(in crate::graph) fn rank_of_id(&self, id: NodeId) -> Option<usize> {
        let value = self.values.get(&id)?;
        self.rank_of(value).ok()
    }

    pub(in crate::graph) fn contains<Q>(&self, probe: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.rank_of(probe).is_ok()
    }

    /// Registers `value` under a fresh handle. Returns `None` if an equal value exists.
    pub(in crate::graph) fn insert(&mut self, value: N) -> Option<NodeId> {
        let rank = self.rank_of(&value).err()?;
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.values.insert(id, value);
        self.order.insert(rank, id);
        Some(id)
    }

    pub(in crate::graph) fn remove(&mut self, id: NodeId) -> Option<N> {
        let value = self.values.get(&id)?;
        match self.order.binary_search_by(|&probe| self.values[&probe].cmp(value)) {
            Ok(rank) => {
                self.order.remove(rank);
            }
            Err(_) => debug_assert!(false, "registered node missing from order index"),
        }
        self.values.remove(&id)
    }
}
