//! Edge cursors.
//!
//! A cursor is a detached position in the total edge order of one graph: an outer position (the
//! rank of the source node) and an inner position (the index inside that node's edge set), or
//! the end sentinel. Cursors never borrow the graph, so they can be handed back to mutators such
//! as [`Graph::erase_edge_at`](super::Graph::erase_edge_at).
//!
//! Stepping is a two-state machine over `(outer, inner)` slots:
//!
//! | state | advance | retreat |
//! |-------|---------|---------|
//! | `At(o, i)` | `At(o, i + 1)`, skipping exhausted and empty sets, else `End` | `At(o, i - 1)`, skipping empty sets backwards, refused at the first edge |
//! | `End` | `End` | last edge of the graph, refused when there are no edges |
//!
//! Besides the slot, a cursor records the handles of its source node and edge. Slots are only a
//! hint: when nodes or edges are inserted or removed around a cursor, it is re-resolved through
//! the handles, so a cursor stays valid for as long as its edge exists.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use super::adjacency::EdgeId;
use super::registry::NodeId;

/// Identity of one graph value. Clones get a new identity; `std::mem::take` moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GraphId(u64);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Position {
    At {
        outer: usize,
        inner: usize,
        node: NodeId,
        edge: EdgeId,
    },
    End,
}

/// A position in a graph's edge order.
///
/// Two cursors are equal iff they come from the same graph and denote the same edge (or are
/// both the end). Cursors of different graphs never compare equal, even when the edges they
/// denote have equal values.
///
/// A cursor is invalidated when its edge is erased or its source node is replaced, merged away
/// or erased; an invalid cursor behaves like the end. Moving the whole graph with
/// [`std::mem::take`] keeps it valid.
#[derive(Debug, Clone, Copy)]
pub struct EdgeCursor {
    pub(crate) graph: GraphId,
    pub(crate) pos: Position,
}

impl EdgeCursor {
    /// Whether this cursor is the end sentinel of its graph.
    pub fn is_end(&self) -> bool {
        matches!(self.pos, Position::End)
    }

    fn key(&self) -> (GraphId, Option<EdgeId>) {
        match self.pos {
            Position::At { edge, .. } => (self.graph, Some(edge)),
            Position::End => (self.graph, None),
        }
    }
}

impl PartialEq for EdgeCursor {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EdgeCursor {}

impl Hash for EdgeCursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// First edge slot at or after `(outer, inner)`.
pub(crate) fn seek_forward(
    set_len: impl Fn(usize) -> usize,
    node_count: usize,
    mut outer: usize,
    mut inner: usize,
) -> Option<(usize, usize)> {
    while outer < node_count {
        if inner < set_len(outer) {
            return Some((outer, inner));
        }
        outer += 1;
        inner = 0;
    }
    None
}

/// Last edge slot strictly before `(outer, inner)`.
pub(crate) fn seek_backward(
    set_len: impl Fn(usize) -> usize,
    mut outer: usize,
    mut inner: usize,
) -> Option<(usize, usize)> {
    loop {
        if inner > 0 {
            return Some((outer, inner - 1));
        }
        if outer == 0 {
            return None;
        }
        outer -= 1;
        inner = set_len(outer);
    }
}
