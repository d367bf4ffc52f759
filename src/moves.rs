use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::map_formatter::agent_char;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub agent: usize,
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub(crate) fn new(agent: usize, dir: Dir, is_push: bool) -> Self {
        Move { agent, dir, is_push }
    }
}

/// Just the direction, uppercase for pushes.
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())
        } else {
            write!(f, "{}", self.dir)
        }
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", agent_char(b'a', self.agent), self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    fn single_agent(&self) -> bool {
        self.0.iter().all(|m| m.agent == 0)
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// `lurd` style when only the first agent moves, `a:l b:U` otherwise.
impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.single_agent() {
            for mov in self {
                write!(f, "{}", mov)?;
            }
        } else {
            for (i, mov) in self.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:?}", mov)?;
            }
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
