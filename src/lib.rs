// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod solver;
pub mod state;

mod data;
mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::config::Config;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub use crate::data::{Dir, Pos};
pub use crate::parser::ParserErr;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use crate::config::{Heuristic, Method};

    use super::*;

    /// `expected_cost` is only checked for best-first which should find the shortest solution.
    #[test]
    fn test_levels() {
        let levels = [
            ("levels/corridor.txt", Some(1)),
            ("levels/corridor-behind.txt", None),
            ("levels/solved.txt", Some(0)),
            ("levels/room.txt", Some(5)),
            ("levels/two-agents.txt", Some(3)),
            ("levels/far-goal.txt", Some(7)),
        ];

        for &(level_path, expected_cost) in &levels {
            for &method in &[Method::DepthFirst, Method::BestFirst] {
                for &heuristic in &[Heuristic::Zero, Heuristic::Simple, Heuristic::Complex] {
                    test_level(level_path, Config::new(method, heuristic), expected_cost);
                }
            }
        }
    }

    #[test]
    fn complex_heuristic_can_miss_optimum() {
        // a box against a wall is estimated as infinite even when it could still be pushed along it
        let level = "levels/crowded.txt".load_level().unwrap();
        for &(heuristic, expected_cost) in &[
            (Heuristic::Zero, 10),
            (Heuristic::Simple, 10),
            (Heuristic::Complex, 12),
        ] {
            let solution = level
                .solve(&Config::new(Method::BestFirst, heuristic))
                .unwrap();
            assert_eq!(solution.cost, expected_cost, "{}", heuristic);
        }
    }

    fn test_level(level_path: &str, config: Config, expected_cost: Option<i32>) {
        println!(
            "Solving {} using {} ({})",
            level_path, config.method, config.heuristic
        );
        let started = Instant::now();

        let level = level_path.load_level().unwrap();
        let solution = level.solve(&config).unwrap();

        // innacurate, only useful to quickly see which levels are difficult
        let elapsed = started.elapsed();
        println!(
            "Solved {} in approximately {} ms, visited {} states",
            level_path,
            (elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis())).separated_string(),
            solution.stats.total_unique_visited().separated_string(),
        );

        match expected_cost {
            None => {
                assert!(!solution.is_solved(), "{}: {:?}", level_path, solution);
                assert_eq!(solution.cost, -1);
                assert!(solution.path_states.is_empty());
            }
            Some(expected_cost) => {
                assert!(solution.is_solved(), "{}: {:?}", level_path, solution);
                let moves = solution.moves().unwrap();
                assert_eq!(moves.move_cnt() as i32, solution.cost);
                assert_eq!(solution.path_states.len() as i32, solution.cost + 1);
                if config.method == Method::BestFirst {
                    assert_eq!(solution.cost, expected_cost, "{}: {}", level_path, moves);
                } else {
                    assert!(solution.cost >= expected_cost);
                }
            }
        }
    }
}
