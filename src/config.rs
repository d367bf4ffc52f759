use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    DepthFirst,
    BestFirst,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::DepthFirst => write!(f, "depth-first"),
            Method::BestFirst => write!(f, "best-first"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-first" => Ok(Method::DepthFirst),
            "best-first" => Ok(Method::BestFirst),
            _ => Err(format!("Unknown method: {}", s)),
        }
    }
}

/// Which estimate of the remaining cost guides best-first search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Always 0 - uniform cost search.
    Zero,
    /// Sum of distances from each box to its nearest goal.
    Simple,
    /// Like `Simple` but infinite when a box not on a goal touches a wall.
    Complex,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Zero => write!(f, "zero"),
            Heuristic::Simple => write!(f, "simple"),
            Heuristic::Complex => write!(f, "complex"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Heuristic::Zero),
            "simple" => Ok(Heuristic::Simple),
            "complex" => Ok(Heuristic::Complex),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub method: Method,
    pub heuristic: Heuristic,
    /// Give up after visiting this many unique states.
    pub max_visited: Option<usize>,
    /// Log progress whenever a new depth is reached.
    pub print_status: bool,
}

impl Config {
    pub fn new(method: Method, heuristic: Heuristic) -> Self {
        Config {
            method,
            heuristic,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            method: Method::BestFirst,
            heuristic: Heuristic::Simple,
            max_visited: None,
            print_status: false,
        }
    }
}
