mod a_star;
mod backtracking;
mod depth_first;
mod heuristic;
mod node;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info, warn};

use crate::config::{Config, Heuristic, Method};
use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::map::Map;
use crate::moves::Moves;
use crate::state::{State, StateKey};
use crate::Solve;

use self::backtracking::reconstruct_moves;
use self::node::SearchNode;

pub use self::heuristic::Estimate;
pub use self::stats::Stats;

/// Cost reported when there is no solution.
pub const NO_SOLUTION: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    VisitLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::VisitLimit(max) => {
                write!(f, "Gave up after visiting {} unique states", max)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// From the initial state to the solved one, empty if there is no solution.
    pub path_states: Vec<State>,
    /// Number of moves or `NO_SOLUTION`.
    pub cost: i32,
    pub stats: Stats,
    pub method: Method,
    pub heuristic: Heuristic,
}

impl SolverOk {
    fn new(path_states: Vec<State>, cost: i32, stats: Stats, config: &Config) -> Self {
        Self {
            path_states,
            cost,
            stats,
            method: config.method,
            heuristic: config.heuristic,
        }
    }

    fn solved(final_node: &SearchNode<'_>, stats: Stats, config: &Config) -> Self {
        Self::new(
            backtracking::backtrack_path(final_node),
            final_node.cost as i32,
            stats,
            config,
        )
    }

    fn no_solution(stats: Stats, config: &Config) -> Self {
        Self::new(Vec::new(), NO_SOLUTION, stats, config)
    }

    pub fn is_solved(&self) -> bool {
        self.cost != NO_SOLUTION
    }

    pub fn moves(&self) -> Option<Moves> {
        if self.is_solved() {
            reconstruct_moves(&self.path_states)
        } else {
            None
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            writeln!(f, "{} ({}): {}", self.method, self.heuristic, self.cost)?;
        } else {
            writeln!(f, "No solution")?;
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(&self.map, &self.state, config)
    }
}

pub fn solve(map: &Map, initial_state: &State, config: &Config) -> Result<SolverOk, SolverErr> {
    debug!(
        "Solving using {} with {} heuristic",
        config.method, config.heuristic
    );
    // successors of a valid state are valid so only the root needs checking
    if !initial_state.is_valid(map) {
        warn!("Initial state is invalid, it won't be expanded");
        return Ok(visit_root_only(map, initial_state, config));
    }
    match config.method {
        Method::DepthFirst => depth_first::search(map, initial_state, config),
        Method::BestFirst => a_star::search(map, initial_state, config),
    }
}

/// Every goal has a box on it.
pub fn solved(map: &Map, state: &State) -> bool {
    map.goals().iter().all(|&goal| state.has_box(goal))
}

fn visit_root_only(map: &Map, initial_state: &State, config: &Config) -> SolverOk {
    let root = SearchNode::root(initial_state.clone(), config.heuristic);
    let mut stats = Stats::new();
    stats.add_created(&root);
    stats.add_unique_visited(&root);
    if solved(map, &root.state) {
        SolverOk::solved(&root, stats, config)
    } else {
        SolverOk::no_solution(stats, config)
    }
}

/// All states reachable by moving one agent by one cell.
///
/// Agents are tried in order, directions as in `DIRECTIONS`.
/// A state that breaks the invariants of `State::is_valid` has no neighbors.
pub fn expand(map: &Map, state: &State) -> Vec<State> {
    if !state.is_valid(map) {
        debug!("Not expanding invalid state: {:?}", state);
        return Vec::new();
    }
    successors(map, state)
}

/// Same as `expand` but `state` must already be valid.
pub(crate) fn successors(map: &Map, state: &State) -> Vec<State> {
    debug_assert!(state.is_valid(map), "{:?}", state);

    let mut new_states = Vec::new();
    for (agent_index, &agent_pos) in state.agents.iter().enumerate() {
        for &dir in &DIRECTIONS {
            let new_agent_pos = agent_pos + dir;
            if !map.is_passable(new_agent_pos) || state.has_agent(new_agent_pos) {
                continue;
            }

            let mut new_agents = state.agents.clone();
            new_agents[agent_index] = new_agent_pos;

            match state.boxes.iter().position(|&b| b == new_agent_pos) {
                None => {
                    // step
                    new_states.push(State::new(new_agents, state.boxes.clone()));
                }
                Some(box_index) => {
                    let push_dest = new_agent_pos + dir;
                    if map.is_passable(push_dest)
                        && !state.has_box(push_dest)
                        && !state.has_agent(push_dest)
                    {
                        // push
                        let mut new_boxes = state.boxes.clone();
                        new_boxes[box_index] = push_dest;
                        new_states.push(State::new(new_agents, new_boxes));
                    }
                }
            }
        }
    }

    new_states
}

/// Shared bookkeeping done by both drivers when a node is popped and turns out to be new.
fn visit_unique(
    node: &SearchNode<'_>,
    visited: &FnvHashSet<StateKey>,
    stats: &mut Stats,
    config: &Config,
) -> Result<(), SolverErr> {
    if let Some(max) = config.max_visited {
        if visited.len() > max {
            debug!("Reached the limit of {} visited states", max);
            return Err(SolverErr::VisitLimit(max));
        }
    }
    if stats.add_unique_visited(node) && config.print_status {
        info!("Visited new depth: {}", node.depth);
        info!(
            "total created / unique visited / reached duplicates: {} / {} / {}",
            stats.total_created(),
            stats.total_unique_visited(),
            stats.total_reached_duplicates()
        );
    }
    Ok(())
}
