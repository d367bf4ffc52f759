use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::config::Config;
use crate::map::Map;
use crate::solver::heuristic::Estimate;
use crate::solver::node::SearchNode;
use crate::solver::stats::Stats;
use crate::solver::{solved, successors, visit_unique, SolverErr, SolverOk};
use crate::state::State;

/// Queue entries are ordered by priority, then by insertion order so ties are FIFO.
#[derive(Debug)]
struct QueueEntry<'a> {
    priority: Estimate,
    seq: u64,
    node: &'a SearchNode<'a>,
}

impl<'a> QueueEntry<'a> {
    fn new(map: &Map, seq: u64, node: &'a SearchNode<'a>) -> Self {
        QueueEntry {
            priority: node.priority(map),
            seq,
            node,
        }
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for QueueEntry<'_> {}

pub(crate) fn search(
    map: &Map,
    initial_state: &State,
    config: &Config,
) -> Result<SolverOk, SolverErr> {
    debug!("Best-first search called");

    let mut stats = Stats::new();
    let arena = Arena::new();
    let mut visited = FnvHashSet::default();
    let mut to_visit = BinaryHeap::new();
    let mut seq = 0;

    let start: &SearchNode<'_> =
        arena.alloc(SearchNode::root(initial_state.clone(), config.heuristic));
    stats.add_created(start);
    to_visit.push(Reverse(QueueEntry::new(map, seq, start)));

    while let Some(Reverse(entry)) = to_visit.pop() {
        let cur_node = entry.node;

        // a solved state can't have been visited before - we'd have stopped there
        if solved(map, &cur_node.state) {
            debug!("Solved at depth {}, backtracking path", cur_node.depth);
            stats.add_unique_visited(cur_node);
            return Ok(SolverOk::solved(cur_node, stats, config));
        }

        // insert here and not as soon as we discover it
        // the first time a state is popped it has the lowest priority it'll ever have
        if !visited.insert(cur_node.state.key()) {
            stats.add_reached_duplicate(cur_node);
            continue;
        }
        visit_unique(cur_node, &visited, &mut stats, config)?;

        for new_state in successors(map, &cur_node.state) {
            if visited.contains(&new_state.key()) {
                continue;
            }
            let next_node: &SearchNode<'_> = arena.alloc(cur_node.child(new_state));
            stats.add_created(next_node);
            seq += 1;
            to_visit.push(Reverse(QueueEntry::new(map, seq, next_node)));
        }
    }

    debug!("Best-first search exhausted all states");
    Ok(SolverOk::no_solution(stats, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::{Heuristic, Method};
    use crate::data::Pos;
    use crate::level::Level;

    fn entry<'a>(priority: Estimate, seq: u64, node: &'a SearchNode<'a>) -> QueueEntry<'a> {
        QueueEntry {
            priority,
            seq,
            node,
        }
    }

    #[test]
    fn queue_order() {
        let node = SearchNode::root(State::new(vec![Pos::new(0, 0)], vec![]), Heuristic::Zero);
        let mut queue = BinaryHeap::new();
        queue.push(Reverse(entry(Estimate::Infinite, 0, &node)));
        queue.push(Reverse(entry(Estimate::Finite(3), 1, &node)));
        queue.push(Reverse(entry(Estimate::Finite(1), 2, &node)));
        queue.push(Reverse(entry(Estimate::Finite(3), 3, &node)));
        queue.push(Reverse(entry(Estimate::Finite(1), 4, &node)));

        let order: Vec<_> = ::std::iter::from_fn(|| queue.pop())
            .map(|Reverse(e)| e.seq)
            .collect();
        assert_eq!(order, vec![2, 4, 1, 3, 0]);
    }

    #[test]
    fn ties_are_fifo() {
        // two agents can each solve it in one push, the first agent is expanded first
        let level: Level = "ties\n7\n3\n#######\n#a?.?b#\n#######\n".parse().unwrap();
        let config = Config::new(Method::BestFirst, Heuristic::Simple);
        let solution = search(&level.map, &level.state, &config).unwrap();
        assert_eq!(solution.cost, 1);
        assert_eq!(
            solution.path_states[1].agents,
            vec![Pos::new(1, 2), Pos::new(1, 5)]
        );
        assert_eq!(solution.moves().unwrap().to_string(), "R");
    }

    #[test]
    fn prefers_lower_priority() {
        // stepping left first is cheaper for uniform cost search than the long way around
        let level: Level = r"
detour
7
5
#######
#.?a  #
# ### #
#     #
#######
"
        .parse()
        .unwrap();
        let config = Config::new(Method::BestFirst, Heuristic::Zero);
        let solution = search(&level.map, &level.state, &config).unwrap();
        assert_eq!(solution.cost, 1);
        assert_eq!(solution.moves().unwrap().to_string(), "L");
        // uniform cost visits every state closer than the solution first
        assert!(solution.stats.total_unique_visited() >= 2);
    }

    #[test]
    fn infinite_estimates_are_still_explored() {
        // every reachable state has the box against a wall, complex can't prune the only way
        let level: Level = "walled\n5\n3\n#####\n#a?.#\n#####\n".parse().unwrap();
        let config = Config::new(Method::BestFirst, Heuristic::Complex);
        let solution = search(&level.map, &level.state, &config).unwrap();
        assert_eq!(solution.cost, 1);
    }
}
