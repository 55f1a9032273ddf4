//! Heuristics for best-first search over the taxi model.
//!
//! [`h1`] and [`h`] lower-bound the true number of remaining time steps, so
//! an A* driver using either as `f = g + h` keeps its optimality guarantee.
//! [`h2`] reproduces the reference distance estimate, origin leg included
//! for every passenger, and can exceed the true remaining cost once
//! passengers are aboard. All three read only the state's cached counters
//! and positions and never allocate.

use crate::grid::Position;
use crate::state::State;

/// Baseline count heuristic:
/// `(2 * unpicked + picked_undelivered) / num_taxis`.
///
/// Every unpicked passenger still needs a pick-up and a drop-off; every
/// aboard passenger still needs a drop-off. Dividing by the taxi count
/// lower-bounds the number of joint rounds, since taxis act in parallel.
pub fn h1(state: &State) -> f64 {
    (2 * state.unpicked + state.picked_undelivered) as f64 / state.num_taxis() as f64
}

/// Manhattan-distance heuristic: for every passenger, the origin-to-
/// destination leg plus the current-location-to-destination leg, the total
/// divided by the taxi count.
///
/// The origin leg is summed for *every* passenger, aboard and delivered
/// ones included (a delivered passenger's current-location leg is zero, but
/// a nonzero origin-destination distance keeps contributing). The estimate
/// therefore double-counts once a passenger is picked up and stays nonzero
/// at goals, overestimating the true remaining cost. That matches the
/// reference behavior this model reproduces; see
/// `test_h2_keeps_origin_leg_for_delivered_passengers` and
/// `test_h2_may_exceed_true_cost_once_picked`.
pub fn h2(state: &State) -> f64 {
    let mut total: u32 = 0;
    for passenger in state.passengers.values() {
        total += passenger.origin.manhattan(passenger.destination);
        total += passenger.current_location.manhattan(passenger.destination);
    }
    total as f64 / state.num_taxis() as f64
}

/// Tightened heuristic combining distance-to-destination, pickup effort,
/// capacity shortfall, and remaining-task counts. Zero exactly at goals.
pub fn h(state: &State) -> f64 {
    if state.undelivered == 0 {
        return 0.0;
    }

    let mut dist_to_dest: u32 = 0;
    let mut dist_to_closest_taxi: u32 = 0;
    for passenger in state.passengers.values() {
        if !passenger.delivered {
            dist_to_dest += passenger.current_location.manhattan(passenger.destination);
        }
        if !passenger.picked {
            dist_to_closest_taxi += closest_taxi_distance(state, passenger.current_location);
        }
    }

    let avg_dist_to_dest = dist_to_dest as f64 / state.undelivered as f64;

    if state.unpicked > 0 {
        let avg_dist_to_closest_taxi = dist_to_closest_taxi as f64 / state.unpicked as f64;
        let shortfall = state.unpicked.saturating_sub(state.total_free_capacity());
        avg_dist_to_dest
            + avg_dist_to_closest_taxi
            + shortfall as f64
            + state.undelivered as f64
            + state.unpicked as f64
    } else {
        // Everyone left is already aboard some taxi.
        avg_dist_to_dest + state.undelivered as f64
    }
}

/// Manhattan distance from `pos` to the nearest taxi.
pub fn closest_taxi_distance(state: &State, pos: Position) -> u32 {
    state
        .taxis
        .values()
        .map(|taxi| pos.manhattan(taxi.location))
        .min()
        .expect("state has at least one taxi")
}
