use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map::Map;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    ZeroSize,
    OutOfBounds(Pos),
    Overlap(Pos),
    NoAgents,
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::ZeroSize => write!(f, "Width and height must be positive"),
            LevelErr::OutOfBounds(pos) => write!(f, "Position {} is outside the grid", pos),
            LevelErr::Overlap(pos) => write!(f, "More than one wall, box or agent at {}", pos),
            LevelErr::NoAgents => write!(f, "No agents"),
        }
    }
}

impl Error for LevelErr {}

#[derive(Clone)]
pub struct Level {
    pub name: String,
    pub map: Map,
    pub state: State,
}

impl Level {
    /// Builds a level from explicit position lists.
    ///
    /// A goal may share its cell with a box or an agent, nothing else may share a cell.
    pub fn new(
        name: &str,
        width: usize,
        height: usize,
        walls: &[Pos],
        goals: &[Pos],
        boxes: Vec<Pos>,
        agents: Vec<Pos>,
    ) -> Result<Level, LevelErr> {
        if width == 0 || height == 0 {
            return Err(LevelErr::ZeroSize);
        }
        if agents.is_empty() {
            return Err(LevelErr::NoAgents);
        }

        let mut grid = Vec2d::new(height, width, MapCell::Empty);
        for &pos in goals {
            if !grid.contains(pos) {
                return Err(LevelErr::OutOfBounds(pos));
            }
            grid[pos] = MapCell::Goal;
        }
        for &pos in walls {
            if !grid.contains(pos) {
                return Err(LevelErr::OutOfBounds(pos));
            }
            if grid[pos] != MapCell::Empty {
                return Err(LevelErr::Overlap(pos));
            }
            grid[pos] = MapCell::Wall;
        }

        let mut occupied: Vec2d<bool> = grid.scratchpad();
        for &pos in agents.iter().chain(boxes.iter()) {
            if !grid.contains(pos) {
                return Err(LevelErr::OutOfBounds(pos));
            }
            if occupied[pos] || grid[pos] == MapCell::Wall {
                return Err(LevelErr::Overlap(pos));
            }
            occupied[pos] = true;
        }

        Ok(Level {
            name: name.to_owned(),
            map: Map::new(grid),
            state: State::new(agents, boxes),
        })
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.map.format_with_state(&self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(f, "{}", self)
    }
}
