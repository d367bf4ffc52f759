use crate::config::Heuristic;
use crate::map::Map;
use crate::solver::heuristic::Estimate;
use crate::state::State;

/// A state plus how we got there.
///
/// Nodes are allocated in an arena owned by one search and never modified afterwards,
/// `prev` points toward the initial state so the nodes form a tree.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    /// Number of moves from the initial state.
    pub(crate) cost: u32,
    pub(crate) depth: u32,
    pub(crate) heuristic: Heuristic,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn root(state: State, heuristic: Heuristic) -> Self {
        SearchNode {
            state,
            prev: None,
            cost: 0,
            depth: 0,
            heuristic,
        }
    }

    pub(crate) fn child(&'a self, state: State) -> Self {
        SearchNode {
            state,
            prev: Some(self),
            cost: self.cost + 1,
            depth: self.depth + 1,
            heuristic: self.heuristic,
        }
    }

    /// Cost so far plus the estimate of the remaining cost.
    pub(crate) fn priority(&self, map: &Map) -> Estimate {
        self.heuristic.estimate(map, &self.state) + self.cost
    }
}
