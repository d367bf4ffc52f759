use std::fmt::{self, Display, Formatter};
use std::ops::Add;

pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Up, Dir::Right, Dir::Down];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Agent(usize),
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

/// Row and column of a cell. Signed so a step off the edge is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }

    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [
            self + Dir::Left,
            self + Dir::Up,
            self + Dir::Right,
            self + Dir::Down,
        ]
    }

    /// The direction of a single step from `self` to `other`, if they're adjacent.
    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|&dir| self + dir == other)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Up,
    Right,
    Down,
}

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Left => (0, -1),
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Left => write!(f, "l"),
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r + dr, self.c + dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let pos = Pos::new(3, 5);
        assert_eq!(pos + Dir::Left, Pos::new(3, 4));
        assert_eq!(pos + Dir::Up, Pos::new(2, 5));
        assert_eq!(pos + Dir::Right, Pos::new(3, 6));
        assert_eq!(pos + Dir::Down, Pos::new(4, 5));
        for &dir in &DIRECTIONS {
            assert_eq!(pos.dir_to(pos + dir), Some(dir));
        }
        assert_eq!(pos.dir_to(pos), None);
        assert_eq!(pos.dir_to(Pos::new(4, 6)), None);
    }

    #[test]
    fn manhattan() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(0, 0)), 0);
        assert_eq!(Pos::new(0, 0).dist(Pos::new(2, 3)), 5);
        assert_eq!(Pos::new(2, 3).dist(Pos::new(0, 0)), 5);
        assert_eq!(Pos::new(-1, 4).dist(Pos::new(1, 1)), 5);
    }
}
