use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::config::Config;
use crate::map::Map;
use crate::solver::node::SearchNode;
use crate::solver::stats::Stats;
use crate::solver::{solved, successors, visit_unique, SolverErr, SolverOk};
use crate::state::State;

pub(crate) fn search(
    map: &Map,
    initial_state: &State,
    config: &Config,
) -> Result<SolverOk, SolverErr> {
    debug!("Depth-first search called");

    let mut stats = Stats::new();
    let arena = Arena::new();
    let mut visited = FnvHashSet::default();

    let start: &SearchNode<'_> =
        arena.alloc(SearchNode::root(initial_state.clone(), config.heuristic));
    stats.add_created(start);
    let mut to_visit = vec![start];

    while let Some(cur_node) = to_visit.pop() {
        // duplicates are only detected here, not when pushing
        if !visited.insert(cur_node.state.key()) {
            stats.add_reached_duplicate(cur_node);
            continue;
        }

        // a reached goal is returned even if it's over the visit limit
        if solved(map, &cur_node.state) {
            debug!("Solved at depth {}, backtracking path", cur_node.depth);
            stats.add_unique_visited(cur_node);
            return Ok(SolverOk::solved(cur_node, stats, config));
        }
        visit_unique(cur_node, &visited, &mut stats, config)?;

        // the last neighbor is visited first
        for new_state in successors(map, &cur_node.state) {
            let next_node: &SearchNode<'_> = arena.alloc(cur_node.child(new_state));
            stats.add_created(next_node);
            to_visit.push(next_node);
        }
    }

    debug!("Depth-first search exhausted all states");
    Ok(SolverOk::no_solution(stats, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::{Heuristic, Method};
    use crate::data::Pos;
    use crate::level::Level;

    #[test]
    fn follows_last_neighbor_first() {
        // open space to the left, the box and goal to the right
        let level: Level = "dfs\n6\n1\n  a?. \n".parse().unwrap();
        let config = Config::new(Method::DepthFirst, Heuristic::Simple);
        let solution = search(&level.map, &level.state, &config).unwrap();

        // right is expanded after left so it's tried first
        assert_eq!(solution.cost, 1);
        assert_eq!(solution.path_states.len(), 2);
        assert_eq!(solution.path_states[1].boxes, vec![Pos::new(0, 4)]);
        assert_eq!(solution.stats.total_unique_visited(), 2);
        // root, left, right
        assert_eq!(solution.stats.total_created(), 3);
    }

    #[test]
    fn counts_duplicates() {
        let level: Level = "dfs\n3\n1\n.a \n".parse().unwrap();
        let config = Config::new(Method::DepthFirst, Heuristic::Zero);
        let solution = search(&level.map, &level.state, &config).unwrap();

        // no boxes but a goal - never solved
        assert!(!solution.is_solved());
        assert_eq!(solution.stats.total_unique_visited(), 3);
        assert!(solution.stats.total_reached_duplicates() > 0);
    }
}
