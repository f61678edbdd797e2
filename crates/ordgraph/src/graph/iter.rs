//! Edge values and the borrowing edge iterator.

use std::iter::FusedIterator;

use super::Graph;

/// A logical `(source, destination, weight)` triple.
///
/// The derived ordering is the graph's total edge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, E> {
    pub from: N,
    pub to: N,
    pub weight: E,
}

impl<N, E> Edge<N, E> {
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }
}

impl<N: Clone, E: Clone> Edge<&N, &E> {
    pub fn cloned(&self) -> Edge<N, E> {
        Edge {
            from: self.from.clone(),
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<N, E> From<(N, N, E)> for Edge<N, E> {
    fn from((from, to, weight): (N, N, E)) -> Self {
        Self { from, to, weight }
    }
}

/// Iterator over all edges of a [`Graph`] in ascending `(source, destination, weight)` order.
///
/// Created by [`Graph::iter`]. Iterating from the back yields the exact reverse sequence.
pub struct Edges<'a, N, E> {
    graph: &'a Graph<N, E>,
    // Next position to yield from the front, possibly not yet settled on a non-empty set.
    front: (usize, usize),
    // Exclusive position bounding the back.
    back: (usize, usize),
    remaining: usize,
}

impl<'a, N, E> Edges<'a, N, E> {
    pub(in crate::graph) fn new(graph: &'a Graph<N, E>) -> Self {
        Self {
            graph,
            front: (0, 0),
            back: (graph.node_count(), 0),
            remaining: graph.edge_count(),
        }
    }

    fn edge(&self, (outer, inner): (usize, usize)) -> Edge<&'a N, &'a E> {
        let graph = self.graph;
        let from = graph.nodes.id_at(outer);
        let entry = &graph.adjacency.set(from)[inner];
        Edge {
            from: graph.nodes.value(from),
            to: graph.nodes.value(entry.to),
            weight: &entry.weight,
        }
    }
}

impl<'a, N, E> Iterator for Edges<'a, N, E> {
    type Item = Edge<&'a N, &'a E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while self.front.1 >= self.graph.set_len(self.front.0) {
            self.front = (self.front.0 + 1, 0);
        }
        let edge = self.edge(self.front);
        self.front.1 += 1;
        self.remaining -= 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while self.back.1 == 0 {
            let outer = self.back.0 - 1;
            self.back = (outer, self.graph.set_len(outer));
        }
        self.back.1 -= 1;
        self.remaining -= 1;
        Some(self.edge(self.back))
    }
}

impl<N, E> ExactSizeIterator for Edges<'_, N, E> {}

impl<N, E> FusedIterator for Edges<'_, N, E> {}

impl<'a, N, E> IntoIterator for &'a Graph<N, E> {
    type Item = Edge<&'a N, &'a E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        Edges::new(self)
    }
}
