use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

pub(crate) const WALL: char = '#';
pub(crate) const GOAL: char = '.';
pub(crate) const BOX: char = '?';
pub(crate) const BOX_ON_GOAL: char = '*';
pub(crate) const EMPTY: char = ' ';

pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>) -> Self {
        Self { grid, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid: Vec2d<Contents> = self.grid.scratchpad();
        if let Some(state) = self.state {
            // only valid states are ever formatted but don't panic if somebody passes garbage
            for &b in &state.boxes {
                if state_grid.contains(b) {
                    state_grid[b] = Contents::Box;
                }
            }
            for (i, &a) in state.agents.iter().enumerate() {
                if state_grid.contains(a) {
                    state_grid[a] = Contents::Agent(i);
                }
            }
        }

        for r in 0..self.grid.rows() {
            let row: Vec<_> = (0..self.grid.cols())
                .map(|c| {
                    let pos = Pos::new(r as i32, c as i32);
                    cell_char(self.grid[pos], state_grid[pos])
                })
                .collect();

            // don't print trailing empty cells to match the input level strings
            let len = row.iter().rposition(|&c| c != EMPTY).map_or(0, |i| i + 1);
            for &c in &row[..len] {
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn cell_char(cell: MapCell, contents: Contents) -> char {
    match (cell, contents) {
        (MapCell::Wall, _) => WALL,
        (MapCell::Empty, Contents::Empty) => EMPTY,
        (MapCell::Empty, Contents::Box) => BOX,
        (MapCell::Empty, Contents::Agent(i)) => agent_char(b'a', i),
        (MapCell::Goal, Contents::Empty) => GOAL,
        (MapCell::Goal, Contents::Box) => BOX_ON_GOAL,
        (MapCell::Goal, Contents::Agent(i)) => agent_char(b'A', i),
    }
}

/// Agents are lettered by their index, wrapping around after `z`.
pub(crate) fn agent_char(first: u8, index: usize) -> char {
    (first + (index % 26) as u8) as char
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
