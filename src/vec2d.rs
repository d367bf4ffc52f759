use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid stored in a single vector.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(rows: usize, cols: usize, default: T) -> Self {
        Vec2d {
            data: vec![default; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    /// Bounds checked access, anything off the grid is `None`.
    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows)
            .flat_map(move |r| (0..cols).map(move |c| Pos::new(r as i32, c as i32)))
    }

    pub(crate) fn scratchpad<U: Copy + Default>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d::new(self.rows, self.cols, default)
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.r as usize * self.cols + pos.c as usize
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        debug_assert!(self.contains(index), "{} is out of bounds", index);
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        debug_assert!(self.contains(index), "{} is out of bounds", index);
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
