#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet, VecDeque};

use gridcab_model::{
    Action, AtomKind, CellKind, PassengerSpec, ProblemInput, State, TaxiProblem, TaxiSpec,
};
use gridcab_search::{SearchSpace, Solution};

pub fn parse_map(rows: &[&str]) -> Vec<Vec<CellKind>> {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'P' => CellKind::Free,
                    'I' => CellKind::Wall,
                    'G' => CellKind::GasStation,
                    other => panic!("unknown map symbol '{other}'"),
                })
                .collect()
        })
        .collect()
}

pub fn problem(
    map: &[&str],
    taxis: &[(&str, (u16, u16), i64, i64)],
    passengers: &[(&str, (u16, u16), (u16, u16))],
) -> TaxiProblem {
    let taxis: BTreeMap<String, TaxiSpec> = taxis
        .iter()
        .map(|&(name, loc, fuel, capacity)| {
            (
                name.to_string(),
                TaxiSpec { location: loc.into(), fuel, capacity },
            )
        })
        .collect();
    let passengers: BTreeMap<String, PassengerSpec> = passengers
        .iter()
        .map(|&(name, loc, dest)| {
            (
                name.to_string(),
                PassengerSpec { location: loc.into(), destination: dest.into() },
            )
        })
        .collect();
    TaxiProblem::new(ProblemInput { map: parse_map(map), taxis, passengers }).unwrap()
}

/// The reference scenario: 4x5 grid, two interior walls plus one more, a gas
/// station, two taxis, four passengers.
pub fn sample_scenario() -> TaxiProblem {
    let input: ProblemInput = serde_json::from_str(
        r#"{
            "map": [["P", "P", "P", "P", "P"],
                    ["P", "I", "P", "G", "P"],
                    ["P", "P", "I", "P", "P"],
                    ["P", "P", "P", "I", "P"]],
            "taxis": {
                "taxi 1": { "location": [2, 0], "fuel": 5, "capacity": 2 },
                "taxi 2": { "location": [0, 1], "fuel": 6, "capacity": 2 }
            },
            "passengers": {
                "Iris":  { "location": [0, 0], "destination": [1, 4] },
                "Tomer": { "location": [3, 1], "destination": [2, 1] },
                "Sahar": { "location": [2, 3], "destination": [2, 4] },
                "Yarin": { "location": [3, 0], "destination": [3, 2] }
            }
        }"#,
    )
    .unwrap();
    TaxiProblem::new(input).unwrap()
}

/// Replay a solution through the model, asserting every step is one the
/// enumerator offers and that the core invariants hold along the way:
/// counters consistent with a direct scan, fuel within bounds, and distinct
/// post-step taxi positions. Returns the final state.
pub fn replay(problem: &TaxiProblem, solution: &Solution<Action>) -> State {
    let mut state = problem.initial_state().clone();
    for action in &solution.actions {
        let legal = problem.actions(&state);
        assert!(
            legal.contains(action),
            "replayed action {action} is not legal in its state"
        );

        let mut posts = HashSet::new();
        for atom in action.atoms() {
            let post = match atom.kind {
                AtomKind::Move(to) => to,
                _ => state.taxis[&atom.taxi].location,
            };
            assert!(posts.insert(post), "collision in replayed action {action}");
        }

        state = problem.result(&state, action);
        assert_invariants(&state);
    }
    state
}

pub fn assert_invariants(state: &State) {
    let unpicked = state.passengers.values().filter(|p| !p.picked).count() as u32;
    let undelivered = state.passengers.values().filter(|p| !p.delivered).count() as u32;
    assert_eq!(state.unpicked, unpicked);
    assert_eq!(state.undelivered, undelivered);
    assert_eq!(state.undelivered, state.unpicked + state.picked_undelivered);

    for taxi in state.taxis.values() {
        assert!(taxi.fuel <= taxi.max_fuel, "fuel above max_fuel");
    }
    for passenger in state.passengers.values() {
        if passenger.delivered {
            assert!(passenger.picked, "delivered implies picked");
        }
    }
}

/// The same problem rooted at a different start state, for searching the
/// remaining cost from mid-search states.
pub struct Rooted<'a> {
    pub problem: &'a TaxiProblem,
    pub start: State,
}

impl SearchSpace for Rooted<'_> {
    type State = State;
    type Action = Action;

    fn initial_state(&self) -> State {
        self.start.clone()
    }

    fn successors(&self, state: &State) -> Vec<(Action, State)> {
        self.problem.successors(state)
    }

    fn is_goal(&self, state: &State) -> bool {
        self.problem.goal_test(state)
    }
}

/// Breadth-first enumeration of every state reachable from the initial one.
/// Panics if more than `cap` states are found (the instance is too big for
/// an exhaustive sweep).
pub fn reachable_states(problem: &TaxiProblem, cap: usize) -> Vec<State> {
    let mut seen: HashSet<State> = HashSet::new();
    let mut queue: VecDeque<State> = VecDeque::new();
    let initial = problem.initial_state().clone();
    seen.insert(initial.clone());
    queue.push_back(initial);

    while let Some(state) = queue.pop_front() {
        for (_, next) in problem.successors(&state) {
            if seen.insert(next.clone()) {
                assert!(seen.len() <= cap, "more than {cap} reachable states");
                queue.push_back(next);
            }
        }
    }

    seen.into_iter().collect()
}
