//! Legal-action enumeration.
//!
//! Per-taxi atomic legality is computed independently from the current
//! state; joint actions are the Cartesian product over taxis, pruned
//! incrementally: a partial assignment is abandoned as soon as two taxis
//! would occupy the same post-step cell, or two atoms would pick up the
//! same passenger in one step. The surviving set (and its order) is the
//! same as building the full product and filtering afterwards.

use std::collections::HashSet;

use crate::action::{Action, Atom, AtomKind};
use crate::grid::{CellKind, Grid, Position};
use crate::state::{State, Taxi};

/// All legal steps from `state`.
///
/// With exactly one taxi the result is its atomic actions directly
/// ([`Action::Atomic`]); with several taxis it is the collision-free joint
/// assignments ([`Action::Joint`], one atom per taxi in taxi-name order).
/// Ordering is deterministic: taxis in name order, atoms in the fixed order
/// wait, move (row+1, row-1, col+1, col-1), pick up, drop off, refuel.
pub fn legal_actions(grid: &Grid, state: &State) -> Vec<Action> {
    let per_taxi: Vec<Vec<Atom>> = state
        .taxis
        .iter()
        .map(|(name, taxi)| atomic_actions(grid, state, name, taxi))
        .collect();

    if per_taxi.len() == 1 {
        let mut per_taxi = per_taxi;
        return per_taxi.remove(0).into_iter().map(Action::Atomic).collect();
    }

    let mut out = Vec::new();
    let mut chosen: Vec<Atom> = Vec::with_capacity(per_taxi.len());
    let mut occupied: HashSet<Position> = HashSet::with_capacity(per_taxi.len());
    let mut pickup_targets: HashSet<&str> = HashSet::new();
    compose(
        state,
        &per_taxi,
        0,
        &mut chosen,
        &mut occupied,
        &mut pickup_targets,
        &mut out,
    );
    out
}

/// Atomic actions legal for one taxi, in the fixed emission order.
pub fn atomic_actions(grid: &Grid, state: &State, name: &str, taxi: &Taxi) -> Vec<Atom> {
    let mut atoms = vec![Atom::wait(name)];

    if taxi.fuel > 0 {
        for target in grid.neighbors(taxi.location) {
            if grid.cell(target) != Ok(CellKind::Wall) {
                atoms.push(Atom::mv(name, target));
            }
        }
    }

    if taxi.capacity > 0 {
        for (pname, passenger) in &state.passengers {
            if !passenger.picked && passenger.current_location == taxi.location {
                atoms.push(Atom::pick_up(name, pname));
            }
        }
    }

    for pname in &taxi.aboard {
        if state.passengers[pname].destination == taxi.location {
            atoms.push(Atom::drop_off(name, pname));
        }
    }

    if grid.cell(taxi.location) == Ok(CellKind::GasStation) {
        atoms.push(Atom::refuel(name));
    }

    atoms
}

/// Cell a taxi occupies after performing `atom`: the move target for a move,
/// its unchanged location otherwise.
fn post_step_position(state: &State, atom: &Atom) -> Position {
    match atom.kind {
        AtomKind::Move(to) => to,
        _ => state.taxis[&atom.taxi].location,
    }
}

fn compose<'a>(
    state: &State,
    per_taxi: &'a [Vec<Atom>],
    depth: usize,
    chosen: &mut Vec<Atom>,
    occupied: &mut HashSet<Position>,
    pickup_targets: &mut HashSet<&'a str>,
    out: &mut Vec<Action>,
) {
    if depth == per_taxi.len() {
        out.push(Action::Joint(chosen.clone()));
        return;
    }

    for atom in &per_taxi[depth] {
        let pos = post_step_position(state, atom);
        if !occupied.insert(pos) {
            continue;
        }
        let picked = if let AtomKind::PickUp(p) = &atom.kind {
            if !pickup_targets.insert(p.as_str()) {
                occupied.remove(&pos);
                continue;
            }
            Some(p.as_str())
        } else {
            None
        };

        chosen.push(atom.clone());
        compose(state, per_taxi, depth + 1, chosen, occupied, pickup_targets, out);
        chosen.pop();

        occupied.remove(&pos);
        if let Some(p) = picked {
            pickup_targets.remove(p);
        }
    }
}
