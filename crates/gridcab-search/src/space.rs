use std::hash::Hash;

use gridcab_model::{State, TaxiProblem};

/// A state-space problem as the search engine sees it: an initial state,
/// successor expansion, and a goal test. Step cost is uniform (one per
/// action); the engine counts steps.
pub trait SearchSpace {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    fn initial_state(&self) -> Self::State;

    /// All `(action, successor)` pairs reachable in one step, in a
    /// deterministic order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    fn is_goal(&self, state: &Self::State) -> bool;
}

impl SearchSpace for TaxiProblem {
    type State = State;
    type Action = gridcab_model::Action;

    fn initial_state(&self) -> State {
        TaxiProblem::initial_state(self).clone()
    }

    fn successors(&self, state: &State) -> Vec<(Self::Action, State)> {
        self.actions(state)
            .into_iter()
            .map(|action| {
                let next = self.result(state, &action);
                (action, next)
            })
            .collect()
    }

    fn is_goal(&self, state: &State) -> bool {
        self.goal_test(state)
    }
}
