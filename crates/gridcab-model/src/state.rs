use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::grid::Position;

/// One taxi at a point in time.
///
/// `max_fuel` is frozen at construction from the initial fuel; `capacity` is
/// the number of *free* seats remaining and moves inversely to `aboard`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Taxi {
    pub location: Position,
    pub fuel: u32,
    pub max_fuel: u32,
    pub capacity: u32,
    pub aboard: BTreeSet<String>,
}

/// One passenger at a point in time.
///
/// `current_location` tracks the carrying taxi while aboard and freezes at
/// the drop-off point once delivered. `delivered` implies `picked`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Passenger {
    pub origin: Position,
    pub destination: Position,
    pub current_location: Position,
    pub picked: bool,
    pub delivered: bool,
}

/// Complete snapshot of all taxis and passengers.
///
/// States are immutable once constructed: the transition function clones and
/// edits the clone, so sibling expansions from a shared parent never alias.
/// BTree containers give canonical iteration order, making the derived
/// `Hash`/`Eq` structural — two equal states always hash identically, with no
/// serialization round-trip.
///
/// The three counters are denormalized caches of aggregate passenger status,
/// maintained by every transition rather than recomputed by scanning, so the
/// goal test and heuristics stay O(1) in passenger count. Invariant:
/// `undelivered == unpicked + picked_undelivered`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct State {
    pub taxis: BTreeMap<String, Taxi>,
    pub passengers: BTreeMap<String, Passenger>,
    pub undelivered: u32,
    pub unpicked: u32,
    pub picked_undelivered: u32,
}

impl State {
    /// Goal test: every passenger delivered. O(1) via the cached counter.
    pub fn is_goal(&self) -> bool {
        self.undelivered == 0
    }

    pub fn num_taxis(&self) -> usize {
        self.taxis.len()
    }

    /// Sum of free seats across all taxis.
    pub fn total_free_capacity(&self) -> u32 {
        self.taxis.values().map(|t| t.capacity).sum()
    }
}
