//! Ordering views.
//!
//! Every lookup compares stored handles against borrowed probes, so callers never have to build
//! an owned node or weight just to search. A stored handle is resolved through the registry to
//! its value; the probe is compared as-is.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::adjacency::EdgeEntry;
use super::registry::{NodeId, NodeRegistry};

/// A borrowed `(destination, weight)` probe into an adjacency set.
pub(in crate::graph) struct EdgeKeyView<'a, Q: ?Sized, W: ?Sized> {
    pub(in crate::graph) to: &'a Q,
    pub(in crate::graph) weight: &'a W,
}

// Manual impls: a derive would require `Q: Copy`, ruling out `str` probes.
impl<Q: ?Sized, W: ?Sized> Clone for EdgeKeyView<'_, Q, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ?Sized, W: ?Sized> Copy for EdgeKeyView<'_, Q, W> {}

impl<'a, Q: ?Sized, W: ?Sized> EdgeKeyView<'a, Q, W> {
    pub(in crate::graph) fn new(to: &'a Q, weight: &'a W) -> Self {
        Self { to, weight }
    }
}

/// Orders a stored node handle against a bare node value.
pub(in crate::graph) fn cmp_node<N, Q>(nodes: &NodeRegistry<N>, id: NodeId, probe: &Q) -> Ordering
where
    N: Borrow<Q>,
    Q: Ord + ?Sized,
{
    nodes.value(id).borrow().cmp(probe)
}

/// Orders a stored edge against a probe: destination value first, then weight.
pub(in crate::graph) fn cmp_edge<N, E, Q, W>(
    nodes: &NodeRegistry<N>,
    entry: &EdgeEntry<E>,
    probe: EdgeKeyView<'_, Q, W>,
) -> Ordering
where
    N: Borrow<Q>,
    E: Borrow<W>,
    Q: Ord + ?Sized,
    W: Ord + ?Sized,
{
    cmp_node(nodes, entry.to, probe.to).then_with(|| entry.weight.borrow().cmp(probe.weight))
}
