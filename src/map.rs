use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level - walls and goals.
///
/// Never changes during search, all states of one level are interpreted against the same map.
#[derive(Clone, PartialEq, Eq)]
pub struct Map {
    grid: Vec2d<MapCell>,
    goals: Vec<Pos>,
}

impl Map {
    pub(crate) fn new(grid: Vec2d<MapCell>) -> Self {
        let goals = grid
            .positions()
            .filter(|&pos| grid[pos] == MapCell::Goal)
            .collect();
        Map { grid, goals }
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    /// Goal positions in reading order.
    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    #[cfg(test)]
    pub(crate) fn walls(&self) -> Vec<Pos> {
        self.grid
            .positions()
            .filter(|&pos| self.grid[pos] == MapCell::Wall)
            .collect()
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Wall)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// Inside the grid and not a wall.
    pub fn is_passable(&self, pos: Pos) -> bool {
        match self.grid.get(pos) {
            Some(&MapCell::Wall) | None => false,
            Some(_) => true,
        }
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None))
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
