use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::action::Action;
use crate::enumerate::legal_actions;
use crate::error::ModelError;
use crate::grid::{CellKind, Grid, Position};
use crate::heuristics;
use crate::state::{Passenger, State, Taxi};
use crate::transition;

/// Initial configuration of one taxi. Fuel and capacity are signed so
/// malformed (negative) inputs are representable and rejected at
/// construction rather than wrapping silently.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxiSpec {
    pub location: Position,
    pub fuel: i64,
    pub capacity: i64,
}

/// Initial configuration of one passenger.
#[derive(Debug, Clone, Deserialize)]
pub struct PassengerSpec {
    pub location: Position,
    pub destination: Position,
}

/// Complete problem input: the map plus named taxis and passengers. Mirrors
/// the JSON scenario layout, e.g.
///
/// ```json
/// {
///   "map": [["P", "P"], ["P", "G"]],
///   "taxis": { "taxi 1": { "location": [0, 0], "fuel": 5, "capacity": 2 } },
///   "passengers": { "Iris": { "location": [0, 1], "destination": [1, 0] } }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemInput {
    pub map: Vec<Vec<CellKind>>,
    pub taxis: BTreeMap<String, TaxiSpec>,
    pub passengers: BTreeMap<String, PassengerSpec>,
}

/// The planning problem: a static grid plus the canonical initial state.
///
/// This is the interface an external best-first search consumes: the
/// initial state, [`actions`](Self::actions), [`result`](Self::result),
/// [`goal_test`](Self::goal_test), and the heuristics
/// [`h`](Self::h) / [`h1`](Self::h1) / [`h2`](Self::h2).
#[derive(Debug, Clone)]
pub struct TaxiProblem {
    grid: Grid,
    initial: State,
}

impl TaxiProblem {
    /// Validate `input` and build the canonical initial state: all
    /// passengers unpicked at their origins, every taxi's `max_fuel` frozen
    /// from its starting fuel.
    pub fn new(input: ProblemInput) -> Result<Self, ModelError> {
        let grid = Grid::from_rows(input.map)?;

        if input.taxis.is_empty() {
            return Err(ModelError::NoTaxis);
        }

        let mut taxis = BTreeMap::new();
        for (name, spec) in input.taxis {
            if !grid.in_bounds(spec.location) {
                return Err(ModelError::TaxiOutOfBounds { name });
            }
            if grid.cell(spec.location)? == CellKind::Wall {
                return Err(ModelError::TaxiOnWall { name });
            }
            if spec.fuel < 0 {
                return Err(ModelError::NegativeFuel { name });
            }
            if spec.capacity < 0 {
                return Err(ModelError::NegativeCapacity { name });
            }
            let fuel = spec.fuel as u32;
            taxis.insert(
                name,
                Taxi {
                    location: spec.location,
                    fuel,
                    max_fuel: fuel,
                    capacity: spec.capacity as u32,
                    aboard: BTreeSet::new(),
                },
            );
        }

        let mut passengers = BTreeMap::new();
        for (name, spec) in input.passengers {
            for pos in [spec.location, spec.destination] {
                if !grid.in_bounds(pos) {
                    return Err(ModelError::PassengerOutOfBounds { name });
                }
                if grid.cell(pos)? == CellKind::Wall {
                    return Err(ModelError::PassengerOnWall { name });
                }
            }
            passengers.insert(
                name,
                Passenger {
                    origin: spec.location,
                    destination: spec.destination,
                    current_location: spec.location,
                    picked: false,
                    delivered: false,
                },
            );
        }

        let count = passengers.len() as u32;
        let initial = State {
            taxis,
            passengers,
            undelivered: count,
            unpicked: count,
            picked_undelivered: 0,
        };

        Ok(Self { grid, initial })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    /// All legal steps from `state`, deterministically ordered.
    pub fn actions(&self, state: &State) -> Vec<Action> {
        legal_actions(&self.grid, state)
    }

    /// Apply one step, producing a fresh state. `action` must come from
    /// [`actions`](Self::actions) for this `state`.
    pub fn result(&self, state: &State, action: &Action) -> State {
        transition::apply(state, action)
    }

    /// True iff every passenger has been delivered.
    pub fn goal_test(&self, state: &State) -> bool {
        state.is_goal()
    }

    pub fn h(&self, state: &State) -> f64 {
        heuristics::h(state)
    }

    pub fn h1(&self, state: &State) -> f64 {
        heuristics::h1(state)
    }

    pub fn h2(&self, state: &State) -> f64 {
        heuristics::h2(state)
    }
}
