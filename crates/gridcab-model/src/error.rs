use crate::grid::Position;

/// Errors raised while validating problem input at construction time.
///
/// All of these are fail-fast: once a [`crate::TaxiProblem`] is built, the
/// model's enumeration, transition, goal test, and heuristics are total
/// functions and cannot fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("map has no rows or no columns")]
    EmptyMap,

    #[error("map row {row} has a different length than row 0")]
    RaggedMap { row: usize },

    #[error("map of {rows} x {cols} cells exceeds the supported dimensions")]
    MapTooLarge { rows: usize, cols: usize },

    #[error("position {pos} lies outside the grid")]
    OutOfBounds { pos: Position },

    #[error("taxi '{name}' is located outside the grid")]
    TaxiOutOfBounds { name: String },

    #[error("taxi '{name}' is located on a wall cell")]
    TaxiOnWall { name: String },

    #[error("passenger '{name}' has a location or destination outside the grid")]
    PassengerOutOfBounds { name: String },

    #[error("passenger '{name}' has a location or destination on a wall cell")]
    PassengerOnWall { name: String },

    #[error("taxi '{name}' has negative fuel")]
    NegativeFuel { name: String },

    #[error("taxi '{name}' has negative capacity")]
    NegativeCapacity { name: String },

    #[error("problem has no taxis")]
    NoTaxis,
}
