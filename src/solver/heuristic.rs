use std::fmt::{self, Display, Formatter};
use std::ops::Add;

use crate::config::Heuristic;
use crate::map::Map;
use crate::state::State;

/// Lower bound (hopefully) on the number of moves left.
///
/// `Infinite` means the state is considered unsolvable and sorts after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Estimate {
    Finite(u32),
    Infinite,
}

impl Add<u32> for Estimate {
    type Output = Estimate;

    fn add(self, cost: u32) -> Estimate {
        match self {
            Estimate::Finite(h) => Estimate::Finite(h.saturating_add(cost)),
            Estimate::Infinite => Estimate::Infinite,
        }
    }
}

impl Display for Estimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Estimate::Finite(h) => write!(f, "{}", h),
            Estimate::Infinite => write!(f, "inf"),
        }
    }
}

impl Heuristic {
    pub fn estimate(self, map: &Map, state: &State) -> Estimate {
        match self {
            Heuristic::Zero => Estimate::Finite(0),
            Heuristic::Simple => goal_dist_sum(map, state),
            Heuristic::Complex => {
                if has_box_against_wall(map, state) {
                    Estimate::Infinite
                } else {
                    goal_dist_sum(map, state)
                }
            }
        }
    }
}

fn goal_dist_sum(map: &Map, state: &State) -> Estimate {
    // less is better

    let mut goal_dist_sum = 0;
    for &box_pos in &state.boxes {
        // no goals at all - nowhere to push the box
        match map.goals().iter().map(|&goal| box_pos.dist(goal)).min() {
            Some(min) => goal_dist_sum += min,
            None => return Estimate::Infinite,
        }
    }
    Estimate::Finite(goal_dist_sum)
}

/// Treats a box next to any wall as stuck unless it's already on a goal.
///
/// This is much coarser than real corner detection: a box can often still be pushed
/// along the wall, so this can prune solvable states.
fn has_box_against_wall(map: &Map, state: &State) -> bool {
    state.boxes.iter().any(|&box_pos| {
        !map.is_goal(box_pos) && box_pos.neighbors().iter().any(|&n| map.is_wall(n))
    })
}
