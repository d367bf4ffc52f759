use fnv::FnvHashSet;

use crate::data::Pos;
use crate::map::Map;

/// Positions of everything that can move.
///
/// The order of both lists is kept stable during search - a move replaces one entry
/// in a copy of the parent's lists, nothing is ever reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub agents: Vec<Pos>,
    pub boxes: Vec<Pos>,
}

/// What identifies a state for duplicate detection.
///
/// Agents are told apart so their order is kept, boxes are interchangeable
/// so they're sorted to make states that differ only in box order collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    agents: Vec<Pos>,
    boxes: Vec<Pos>,
}

impl State {
    pub fn new(agents: Vec<Pos>, boxes: Vec<Pos>) -> State {
        State { agents, boxes }
    }

    pub fn key(&self) -> StateKey {
        let mut boxes = self.boxes.clone();
        boxes.sort();
        StateKey {
            agents: self.agents.clone(),
            boxes,
        }
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.contains(&pos)
    }

    pub fn has_agent(&self, pos: Pos) -> bool {
        self.agents.contains(&pos)
    }

    /// Everything is on a passable cell and no cell holds more than one thing.
    pub fn is_valid(&self, map: &Map) -> bool {
        let mut occupied = FnvHashSet::default();
        self.agents
            .iter()
            .chain(self.boxes.iter())
            .all(|&pos| map.is_passable(pos) && occupied.insert(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::level::Level;

    #[test]
    fn keys_ignore_box_order() {
        let a = State::new(
            vec![Pos::new(0, 0)],
            vec![Pos::new(1, 1), Pos::new(0, 2)],
        );
        let b = State::new(
            vec![Pos::new(0, 0)],
            vec![Pos::new(0, 2), Pos::new(1, 1)],
        );
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn keys_keep_agent_order() {
        let a = State::new(vec![Pos::new(0, 0), Pos::new(0, 1)], vec![]);
        let b = State::new(vec![Pos::new(0, 1), Pos::new(0, 0)], vec![]);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn validity() {
        let level: Level = "validity\n4\n3\n####\n#a?.\n####\n".parse().unwrap();
        assert!(level.state.is_valid(&level.map));

        let on_wall = State::new(vec![Pos::new(0, 0)], vec![Pos::new(1, 2)]);
        assert!(!on_wall.is_valid(&level.map));

        let off_grid = State::new(vec![Pos::new(1, 1)], vec![Pos::new(1, 4)]);
        assert!(!off_grid.is_valid(&level.map));

        let overlap = State::new(vec![Pos::new(1, 2)], vec![Pos::new(1, 2)]);
        assert!(!overlap.is_valid(&level.map));

        let boxes_overlap = State::new(vec![Pos::new(1, 1)], vec![Pos::new(1, 2), Pos::new(1, 2)]);
        assert!(!boxes_overlap.is_valid(&level.map));
    }
}
