//! `supplynet-core`: shared vocabulary for the network algorithm crates.
//!
//! This crate contains **pure data** primitives (no I/O, no shared state): the
//! index-based graph arena, square integer matrices, and the error model every
//! algorithm reports through.

pub mod error;
pub mod graph;
pub mod matrix;

pub use error::{AlgoError, AlgoResult};
pub use graph::{Edge, Graph, NodeId, UNREACHABLE, extend_distance};
pub use matrix::Matrix;
