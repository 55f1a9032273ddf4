//! Deterministic multi-taxi planning model on a 2D grid.
//!
//! Taxis with bounded fuel and seating move passengers from origins to
//! destinations; walls block movement and gas stations restore fuel. The
//! crate provides the full problem model for an external best-first search:
//! canonical hashable states, legal joint-action enumeration with collision
//! avoidance, a pure transition function, an O(1) goal test, and a family of
//! search heuristics.
//!
//! The search engine itself lives in `gridcab-search`.

pub mod action;
pub mod enumerate;
pub mod error;
pub mod grid;
pub mod heuristics;
pub mod problem;
pub mod state;
pub mod transition;

pub use action::{Action, Atom, AtomKind};
pub use error::ModelError;
pub use grid::{CellKind, Grid, Position};
pub use problem::{PassengerSpec, ProblemInput, TaxiProblem, TaxiSpec};
pub use state::{Passenger, State, Taxi};
