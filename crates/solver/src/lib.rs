//! `supplynet-solver`
//!
//! **Responsibility:** single in-process entry point for calling services.
//!
//! - Problems and solutions are plain data (`serde`-describable) so callers can
//!   move them over their own transports; this crate never does I/O itself.
//! - Dispatch is synchronous and stateless: one call, one fresh computation.
//! - Size limits are checked before dispatch; there is no cancellation.

pub mod limits;
pub mod problem;
pub mod runner;
pub mod solution;

pub use limits::SolverLimits;
pub use problem::Problem;
pub use runner::{LocalSolver, Solver};
pub use solution::Solution;
