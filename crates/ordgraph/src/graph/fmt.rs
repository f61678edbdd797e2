//! Textual representation.
//!
//! One block per node in ascending order, each listing its outgoing edges in ascending
//! `(destination, weight)` order:
//!
//! ```text
//! 1 (
//!   2 | a
//!   3 | b
//! )
//! 3 (
//! )
//! ```
//!
//! A graph without nodes renders as the empty string.

use std::fmt;

use super::Graph;

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &from in self.nodes.ids() {
            writeln!(f, "{} (", self.nodes.value(from))?;
            for entry in self.adjacency.set(from) {
                writeln!(f, "  {} | {}", self.nodes.value(entry.to), entry.weight)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.values().collect::<Vec<_>>())
            .field("edges", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
