//! Best-first search over state-space problems.
//!
//! The engine is generic over a [`SearchSpace`]; `gridcab-model`'s
//! `TaxiProblem` implements it with unit step costs, so a solution's cost is
//! its number of discrete time steps. [`astar`] with an admissible heuristic
//! returns minimum-step solutions; [`uniform_cost`] is the zero-heuristic
//! special case used as a brute-force reference.

pub mod astar;
pub mod space;

pub use astar::{astar, uniform_cost, SearchError, SearchLimits, Solution};
pub use space::SearchSpace;
