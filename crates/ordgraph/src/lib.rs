#![forbid(unsafe_code)]

//! Value-semantic directed weighted multigraph.
//!
//! `ordgraph` provides [`Graph<N, E>`], an in-memory container of distinct, ordered node values
//! joined by weighted edges. Several edges may connect the same ordered pair of nodes as long as
//! their weights differ. All traversal is deterministic: nodes ascend by value and edges ascend
//! by `(source, destination, weight)`.
//!
//! ```
//! use ordgraph::Graph;
//!
//! let mut g: Graph<i32, String> = Graph::from([1, 2, 3, 4]);
//! g.insert_edge(&1, &2, "a".to_string())?;
//! g.insert_edge(&1, &3, "b".to_string())?;
//! g.insert_edge(&4, &3, "d".to_string())?;
//!
//! assert_eq!(g.weights(&1, &3)?, vec!["b".to_string()]);
//! assert_eq!(g.to_string(), "1 (\n  2 | a\n  3 | b\n)\n2 (\n)\n3 (\n)\n4 (\n  3 | d\n)\n");
//! # Ok::<(), ordgraph::Error>(())
//! ```
//!
//! Operations that require a node to exist return [`Error`]; expected non-mutating outcomes such
//! as duplicate inserts are reported through `bool` or cursor results instead.

pub mod error;
pub mod graph;

pub use error::{Error, Operation, Result};
pub use graph::{Edge, EdgeCursor, Edges, Graph};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
