//! A* graph search with parent-pointer path reconstruction.
//!
//! The frontier is a binary heap ordered by `f = g + h` (ties broken FIFO by
//! insertion sequence). Visited states keep their best known `g`; a state
//! reached again more cheaply is reopened. With an admissible heuristic the
//! first goal popped is optimal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::space::SearchSpace;

/// Errors terminating a search without a solution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier was exhausted: no action sequence reaches a goal.
    #[error("no solution: the search space was exhausted without reaching a goal")]
    NoSolution,

    /// The expansion budget ran out before the search concluded.
    #[error("search stopped after {expanded} node expansions without concluding")]
    LimitReached { expanded: usize },
}

/// Bounds on a search run.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum node expansions before giving up (0 = unbounded).
    pub max_expansions: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_expansions: 0 }
    }
}

/// A completed search: the action sequence, its length in time steps, and
/// how many nodes were expanded finding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    pub actions: Vec<A>,
    pub cost: u32,
    pub expanded: usize,
}

/// Heap entry. Reversed ordering turns std's max-heap into a min-heap on
/// `f`; the monotone sequence number makes equal-`f` pops FIFO and the
/// ordering total, so `Ord` is consistent with `PartialEq`.
struct OpenEntry {
    f: f64,
    seq: u64,
    node: usize,
    g: u32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search on `space` guided by the heuristic `h`.
///
/// `h` must be admissible for the returned solution to be minimum-length.
pub fn astar<P, H>(
    space: &P,
    h: H,
    limits: &SearchLimits,
) -> Result<Solution<P::Action>, SearchError>
where
    P: SearchSpace,
    H: Fn(&P::State) -> f64,
{
    // Arena of discovered states; `ids` maps a state to its arena slot.
    let mut states: Vec<P::State> = Vec::new();
    let mut ids: HashMap<P::State, usize> = HashMap::new();
    let mut parents: Vec<Option<(usize, P::Action)>> = Vec::new();
    let mut best_g: Vec<u32> = Vec::new();

    let initial = space.initial_state();
    states.push(initial.clone());
    ids.insert(initial.clone(), 0);
    parents.push(None);
    best_g.push(0);

    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    open.push(OpenEntry {
        f: h(&initial),
        seq,
        node: 0,
        g: 0,
    });

    let mut expanded: usize = 0;

    while let Some(entry) = open.pop() {
        // Stale entry: this state was since reached more cheaply.
        if entry.g > best_g[entry.node] {
            continue;
        }

        let state = states[entry.node].clone();
        if space.is_goal(&state) {
            return Ok(Solution {
                actions: reconstruct(&parents, entry.node),
                cost: entry.g,
                expanded,
            });
        }

        expanded += 1;
        if limits.max_expansions > 0 && expanded >= limits.max_expansions {
            return Err(SearchError::LimitReached { expanded });
        }

        let g_next = entry.g + 1;
        for (action, successor) in space.successors(&state) {
            let node = match ids.get(&successor) {
                Some(&node) => {
                    if g_next >= best_g[node] {
                        continue;
                    }
                    best_g[node] = g_next;
                    parents[node] = Some((entry.node, action));
                    node
                }
                None => {
                    let node = states.len();
                    states.push(successor.clone());
                    ids.insert(successor, node);
                    parents.push(Some((entry.node, action)));
                    best_g.push(g_next);
                    node
                }
            };

            seq += 1;
            open.push(OpenEntry {
                f: g_next as f64 + h(&states[node]),
                seq,
                node,
                g: g_next,
            });
        }
    }

    Err(SearchError::NoSolution)
}

/// Uniform-cost search: [`astar`] with the zero heuristic. Exhaustive and
/// always optimal; the reference oracle for heuristic-driven runs.
pub fn uniform_cost<P>(space: &P, limits: &SearchLimits) -> Result<Solution<P::Action>, SearchError>
where
    P: SearchSpace,
{
    astar(space, |_| 0.0, limits)
}

fn reconstruct<A: Clone>(parents: &[Option<(usize, A)>], mut node: usize) -> Vec<A> {
    let mut actions = Vec::new();
    while let Some((parent, action)) = &parents[node] {
        actions.push(action.clone());
        node = *parent;
    }
    actions.reverse();
    actions
}
