//! The transition function: applies one step to a state, yielding a new one.
//!
//! Pure by construction — the input state is cloned and the clone edited, so
//! the caller keeps using the parent for sibling expansions. Legality is the
//! caller's contract (actions must come from the enumerator); it is checked
//! with `debug_assert!` only.

use crate::action::{Action, Atom, AtomKind};
use crate::state::{Passenger, State, Taxi};

/// Apply one step (atomic or joint) to `state`, producing the next state.
pub fn apply(state: &State, action: &Action) -> State {
    let mut next = state.clone();
    for atom in action.atoms() {
        apply_atom(&mut next, atom);
    }
    next
}

fn taxi_mut<'a>(state: &'a mut State, name: &str) -> &'a mut Taxi {
    state
        .taxis
        .get_mut(name)
        .expect("action names a taxi present in the state")
}

fn passenger_mut<'a>(state: &'a mut State, name: &str) -> &'a mut Passenger {
    state
        .passengers
        .get_mut(name)
        .expect("action names a passenger present in the state")
}

fn apply_atom(state: &mut State, atom: &Atom) {
    match &atom.kind {
        AtomKind::Wait => {}

        AtomKind::Move(to) => {
            let taxi = taxi_mut(state, &atom.taxi);
            debug_assert!(taxi.fuel > 0, "move with empty tank");
            taxi.location = *to;
            taxi.fuel -= 1;
            // Passengers ride along with their taxi.
            let aboard: Vec<String> = taxi.aboard.iter().cloned().collect();
            for pname in aboard {
                passenger_mut(state, &pname).current_location = *to;
            }
        }

        AtomKind::PickUp(pname) => {
            let taxi = taxi_mut(state, &atom.taxi);
            debug_assert!(taxi.capacity > 0, "pick up with no free seat");
            taxi.capacity -= 1;
            taxi.aboard.insert(pname.clone());
            let passenger = passenger_mut(state, pname);
            debug_assert!(!passenger.picked, "pick up of an already-picked passenger");
            passenger.picked = true;
            state.unpicked -= 1;
            state.picked_undelivered += 1;
        }

        AtomKind::DropOff(pname) => {
            let taxi = taxi_mut(state, &atom.taxi);
            debug_assert!(taxi.aboard.contains(pname), "drop off of a passenger not aboard");
            taxi.capacity += 1;
            taxi.aboard.remove(pname);
            let passenger = passenger_mut(state, pname);
            debug_assert!(
                passenger.destination == passenger.current_location,
                "drop off away from destination"
            );
            passenger.delivered = true;
            state.undelivered -= 1;
            state.picked_undelivered -= 1;
        }

        AtomKind::Refuel => {
            let taxi = taxi_mut(state, &atom.taxi);
            taxi.fuel = taxi.max_fuel;
        }
    }
}
