//! The ordered directed weighted multigraph.
//!
//! Nodes are unique values of `N`; edges are unique `(source, destination, weight)` triples, so
//! any ordered pair of nodes may be joined by several edges with distinct weights. Storage is
//! split between a node registry (the single owner of node values, handing out stable handles)
//! and an adjacency representation (one edge set per node, referring to nodes by handle).
//!
//! Everything observable is sorted by value: [`Graph::nodes`] ascends by `N`, and edges are
//! visited in ascending `(source, destination, weight)` order by both [`Graph::iter`] and the
//! detached [`EdgeCursor`] API.

mod adjacency;
mod cursor;
mod fmt;
mod iter;
mod ordering;
mod registry;

use std::borrow::Borrow;

use rustc_hash::FxBuildHasher;

use crate::error::{Error, Operation, Result};

use adjacency::{Adjacency, EdgeEntry, dst_range, search};
use cursor::{GraphId, Position, seek_backward, seek_forward};
use ordering::EdgeKeyView;
use registry::NodeRegistry;

pub use cursor::EdgeCursor;
pub use iter::{Edge, Edges};

pub(in crate::graph) type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A value-semantic directed weighted multigraph with sorted traversal.
///
/// ### Complexity
/// | Operation | Cost |
/// |-----------|------|
/// | `is_node`, `find`, `is_connected` | \(O(\log n + \log d)\) |
/// | `insert_node` | \(O(n)\) worst case (sorted index shift) |
/// | `insert_edge`, `erase_edge` | \(O(\log n + d)\) |
/// | `replace_node`, `merge_replace_node`, `erase_node` | \(O(n \log d + k)\) for `k` affected edges |
/// | cursor step | \(O(1)\) amortized |
///
/// `n` is the node count and `d` the out-degree of the source node.
pub struct Graph<N, E> {
    id: GraphId,
    nodes: NodeRegistry<N>,
    adjacency: Adjacency<E>,
    edge_count: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: NodeRegistry::default(),
            adjacency: Adjacency::default(),
            edge_count: 0,
        }
    }
}

impl<N: Clone, E: Clone> Clone for Graph<N, E> {
    /// Deep copy. The copy has its own identity, so cursors of `self` do not resolve against it.
    fn clone(&self) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: self.nodes.clone(),
            adjacency: self.adjacency.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the contents out, leaving an empty graph behind.
    ///
    /// Cursors obtained from `self` before the call resolve against the returned graph.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True iff the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.adjacency.is_empty()
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "clearing graph"
        );
        self.nodes.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Borrowing iterator over all edges in ascending `(source, destination, weight)` order.
    pub fn iter(&self) -> Edges<'_, N, E> {
        Edges::new(self)
    }

    pub fn end(&self) -> EdgeCursor {
        self.cursor(None)
    }

    fn cursor(&self, slot: Option<(usize, usize)>) -> EdgeCursor {
        let pos = match slot {
            Some((outer, inner)) => {
                let node = self.nodes.id_at(outer);
                let edge = self.adjacency.set(node)[inner].id;
                Position::At {
                    outer,
                    inner,
                    node,
                    edge,
                }
            }
            None => Position::End,
        };
        EdgeCursor {
            graph: self.id,
            pos,
        }
    }

    fn set_len(&self, outer: usize) -> usize {
        self.adjacency.set(self.nodes.id_at(outer)).len()
    }

    fn seek_from(&self, outer: usize, inner: usize) -> Option<(usize, usize)> {
        seek_forward(|o| self.set_len(o), self.nodes.len(), outer, inner)
    }
}

impl<N: Ord, E> Graph<N, E> {
    /// Cursor at the first edge, or [`Graph::end`] if there are none.
    pub fn begin(&self) -> EdgeCursor {
        self.cursor(self.seek_from(0, 0))
    }

    /// The cursor following `cursor`. Stepping the end (or an invalid cursor) yields end.
    pub fn next_edge(&self, cursor: EdgeCursor) -> EdgeCursor {
        match self.resolve(cursor) {
            Some((outer, inner)) => self.cursor(self.seek_from(outer, inner + 1)),
            None => self.end(),
        }
    }

    /// The cursor preceding `cursor`, or `None` when `cursor` is the first edge (or the end of a
    /// graph without edges).
    pub fn prev_edge(&self, cursor: EdgeCursor) -> Option<EdgeCursor> {
        let (outer, inner) = match cursor.pos {
            Position::End if cursor.graph == self.id => (self.nodes.len(), 0),
            _ => self.resolve(cursor)?,
        };
        let slot = seek_backward(|o| self.set_len(o), outer, inner)?;
        Some(self.cursor(Some(slot)))
    }

    /// Current `(outer, inner)` slot of a cursor denoting a live edge of this graph.
    fn resolve(&self, cursor: EdgeCursor) -> Option<(usize, usize)> {
        if cursor.graph != self.id {
            return None;
        }
        let Position::At {
            outer,
            inner,
            node,
            edge,
        } = cursor.pos
        else {
            return None;
        };
        let unmoved = outer < self.nodes.len()
            && self.nodes.id_at(outer) == node
            && self
                .adjacency
                .set(node)
                .get(inner)
                .is_some_and(|e| e.id == edge);
        if unmoved {
            return Some((outer, inner));
        }
        let outer = self.nodes.rank_of_id(node)?;
        let inner = self.adjacency.set(node).iter().position(|e| e.id == edge)?;
        Some((outer, inner))
    }

    /// Removes the edge at `cursor` and returns a cursor to the edge that followed it.
    ///
    /// Erasing the end (or an invalid cursor) is a no-op returning [`Graph::end`].
    pub fn erase_edge_at(&mut self, cursor: EdgeCursor) -> EdgeCursor {
        let Some((outer, inner)) = self.resolve(cursor) else {
            return self.end();
        };
        let from = self.nodes.id_at(outer);
        if self.adjacency.remove_at(from, inner).is_some() {
            self.edge_count -= 1;
        }
        // The successor slid into `inner`, or lives in a later set.
        self.cursor(self.seek_from(outer, inner))
    }

    /// Removes every edge in `[first, last)` and returns a cursor equal to `last`.
    ///
    /// If `last` is not reachable from `first`, erasing stops at the end of the graph and the
    /// end cursor is returned.
    pub fn erase_edge_range(&mut self, first: EdgeCursor, last: EdgeCursor) -> EdgeCursor {
        let mut at = first;
        let mut erased = 0usize;
        while at != last && self.resolve(at).is_some() {
            at = self.erase_edge_at(at);
            erased += 1;
        }
        tracing::debug!(edges = erased, "erased edge range");
        if at == last { at } else { self.end() }
    }
}

impl<N: Ord, E: Ord> Graph<N, E> {
    /// Builds a graph holding each of `values` as a node, with no edges.
    pub fn from_nodes<I: IntoIterator<Item = N>>(values: I) -> Self {
        let mut graph = Self::new();
        graph.extend(values);
        graph
    }

    /// Adds `value` as a node. Returns `false` if an equal node already exists.
    pub fn insert_node(&mut self, value: N) -> bool {
        match self.nodes.insert(value) {
            Some(id) => {
                self.adjacency.add_set(id);
                true
            }
            None => false,
        }
    }

    /// Adds the edge `src -> dst` with `weight`. Returns `false` if that exact triple exists.
    ///
    /// # Errors
    /// [`Error::MissingEndpoint`] if `src` or `dst` is not a node.
    pub fn insert_edge<Q>(&mut self, src: &Q, dst: &Q, weight: E) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (Some(from), Some(to)) = (self.nodes.find(src), self.nodes.find(dst)) else {
            return Err(missing_endpoint(Operation::InsertEdge));
        };
        let inserted = self.adjacency.insert(&self.nodes, from, to, weight);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Renames node `old` to `new`, carrying every incident edge along.
    ///
    /// Returns `false` and leaves the graph untouched if `new` is already a node (this includes
    /// `old == new`).
    ///
    /// # Errors
    /// [`Error::MissingNode`] if `old` is not a node.
    pub fn replace_node<Q>(&mut self, old: &Q, new: N) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(old_id) = self.nodes.find(old) else {
            return Err(missing_node(Operation::ReplaceNode));
        };
        let Some(new_id) = self.nodes.insert(new) else {
            return Ok(false);
        };

        let dropped = self.adjacency.retarget(&self.nodes, old_id, new_id);
        debug_assert_eq!(dropped, 0, "a fresh node cannot collide with existing edges");
        let outgoing = self.adjacency.take_set(old_id);
        tracing::debug!(outgoing = outgoing.len(), "replacing node");
        self.adjacency.put_set(new_id, outgoing);
        self.nodes.remove(old_id);
        Ok(true)
    }

    /// Folds node `old` into node `new`: every edge from or to `old` is re-pointed at `new`,
    /// then `old` is removed. A re-pointed edge that duplicates an existing one is dropped.
    /// Merging a node into itself changes nothing.
    ///
    /// # Errors
    /// [`Error::MissingOperand`] if `old` or `new` is not a node.
    pub fn merge_replace_node<Q>(&mut self, old: &Q, new: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (Some(old_id), Some(new_id)) = (self.nodes.find(old), self.nodes.find(new)) else {
            return Err(missing_operand(Operation::MergeReplaceNode));
        };
        if old_id == new_id {
            return Ok(());
        }

        let mut dropped = self.adjacency.retarget(&self.nodes, old_id, new_id);
        dropped += self.adjacency.merge_set(&self.nodes, old_id, new_id);
        self.nodes.remove(old_id);
        self.edge_count -= dropped;
        tracing::debug!(dropped, "merged node");
        Ok(())
    }

    /// Removes `value` together with its outgoing and incoming edges.
    /// Returns `false` if it was not a node.
    pub fn erase_node<Q>(&mut self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(id) = self.nodes.find(value) else {
            return false;
        };
        let incoming = self.adjacency.remove_incoming(&self.nodes, id);
        let outgoing = self.adjacency.take_set(id).len();
        self.nodes.remove(id);
        self.edge_count -= incoming + outgoing;
        tracing::debug!(incoming, outgoing, "erased node");
        true
    }

    /// Removes the exact edge `src -> dst` with `weight`. Returns `false` if it does not exist.
    ///
    /// # Errors
    /// [`Error::MissingEndpoint`] if `src` or `dst` is not a node.
    pub fn erase_edge<Q, W>(&mut self, src: &Q, dst: &Q, weight: &W) -> Result<bool>
    where
        N: Borrow<Q>,
        E: Borrow<W>,
        Q: Ord + ?Sized,
        W: Ord + ?Sized,
    {
        let (Some(from), true) = (self.nodes.find(src), self.nodes.contains(dst)) else {
            return Err(missing_endpoint(Operation::EraseEdge));
        };
        let removed = self
            .adjacency
            .remove(&self.nodes, from, EdgeKeyView::new(dst, weight));
        if removed {
            self.edge_count -= 1;
        }
        Ok(removed)
    }

    pub fn is_node<Q>(&self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.nodes.contains(value)
    }

    /// True iff at least one edge `src -> dst` exists.
    ///
    /// # Errors
    /// [`Error::MissingEndpoint`] if `src` or `dst` is not a node.
    pub fn is_connected<Q>(&self, src: &Q, dst: &Q) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let set = self.outgoing(src, dst, Operation::IsConnected)?;
        Ok(!dst_range(&self.nodes, set, dst).is_empty())
    }

    /// Cursor at the exact edge `src -> dst` with `weight`, or [`Graph::end`].
    ///
    /// Never fails: missing nodes simply yield the end cursor.
    pub fn find<Q, W>(&self, src: &Q, dst: &Q, weight: &W) -> EdgeCursor
    where
        N: Borrow<Q>,
        E: Borrow<W>,
        Q: Ord + ?Sized,
        W: Ord + ?Sized,
    {
        let Ok(outer) = self.nodes.rank_of(src) else {
            return self.end();
        };
        let set = self.adjacency.set(self.nodes.id_at(outer));
        match search(&self.nodes, set, EdgeKeyView::new(dst, weight)) {
            Ok(inner) => self.cursor(Some((outer, inner))),
            Err(_) => self.end(),
        }
    }

    /// Outgoing set of `src`, after checking both endpoints exist.
    fn outgoing<Q>(&self, src: &Q, dst: &Q, op: Operation) -> Result<&[EdgeEntry<E>]>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match (self.nodes.find(src), self.nodes.contains(dst)) {
            (Some(from), true) => Ok(self.adjacency.set(from)),
            _ => Err(missing_endpoint(op)),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// All nodes, ascending.
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.values().cloned().collect()
    }

    /// Weights of all edges `src -> dst`, ascending. Empty if the nodes are not connected.
    ///
    /// # Errors
    /// [`Error::MissingEndpoint`] if `src` or `dst` is not a node.
    pub fn weights<Q>(&self, src: &Q, dst: &Q) -> Result<Vec<E>>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let set = self.outgoing(src, dst, Operation::Weights)?;
        let range = dst_range(&self.nodes, set, dst);
        Ok(set[range].iter().map(|e| e.weight.clone()).collect())
    }

    /// Distinct destinations reachable by one edge from `src`, ascending.
    ///
    /// # Errors
    /// [`Error::MissingNode`] if `src` is not a node.
    pub fn connections<Q>(&self, src: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(from) = self.nodes.find(src) else {
            return Err(missing_node(Operation::Connections));
        };
        let mut targets: Vec<_> = self.adjacency.set(from).iter().map(|e| e.to).collect();
        targets.dedup();
        Ok(targets
            .into_iter()
            .map(|id| self.nodes.value(id).clone())
            .collect())
    }

    /// Copy of the edge at `cursor`; `None` for the end or a cursor that does not resolve.
    pub fn edge_at(&self, cursor: EdgeCursor) -> Option<Edge<N, E>> {
        let (outer, inner) = self.resolve(cursor)?;
        let from = self.nodes.id_at(outer);
        let entry = &self.adjacency.set(from)[inner];
        Some(Edge {
            from: self.nodes.value(from).clone(),
            to: self.nodes.value(entry.to).clone(),
            weight: entry.weight.clone(),
        })
    }
}

fn missing_endpoint(op: Operation) -> Error {
    tracing::trace!(%op, "missing endpoint");
    Error::MissingEndpoint { op }
}

fn missing_operand(op: Operation) -> Error {
    tracing::trace!(%op, "missing merge operand");
    Error::MissingOperand { op }
}

fn missing_node(op: Operation) -> Error {
    tracing::trace!(%op, "missing node");
    Error::MissingNode { op }
}

impl<N: Ord, E: Ord> PartialEq for Graph<N, E> {
    /// Value equality: same nodes and same edges. Identity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count == other.edge_count
            && self.nodes.values().eq(other.nodes.values())
            && self.iter().eq(other.iter())
    }
}

impl<N: Ord, E: Ord> Eq for Graph<N, E> {}

impl<N: Ord, E: Ord> Extend<N> for Graph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, values: I) {
        for value in values {
            self.insert_node(value);
        }
    }
}

impl<N: Ord, E: Ord> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(values: I) -> Self {
        Self::from_nodes(values)
    }
}

impl<N: Ord, E: Ord, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(values: [N; K]) -> Self {
        Self::from_nodes(values)
    }
}
