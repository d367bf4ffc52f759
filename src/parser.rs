use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::level::{Level, LevelErr};
use crate::map_formatter::{BOX, BOX_ON_GOAL, EMPTY, GOAL, WALL};

#[derive(Debug, PartialEq)]
pub enum ParserErr {
    MissingHeader,
    Dimension(usize),
    Pos(usize, usize),
    OutOfBounds(usize, usize),
    Level(LevelErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::MissingHeader => {
                write!(f, "Expected name, width and height on first 3 lines")
            }
            ParserErr::Dimension(line) => write!(f, "Invalid dimension on line {}", line),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::OutOfBounds(r, c) => {
                write!(f, "Cell at pos: [{}, {}] is outside declared size", r, c)
            }
            ParserErr::Level(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<LevelErr> for ParserErr {
    fn from(err: LevelErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a level:
///
/// ```text
/// name
/// width
/// height
/// grid lines...
/// ```
///
/// Agents are any letters (not only ASCII), numbered in reading order,
/// uppercase means the agent stands on a goal.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_start_matches(|c: char| c == '\n' || c == '\r');
    let mut lines = level.lines().map(|line| line.trim_end_matches('\r'));

    let name = lines.next().ok_or(ParserErr::MissingHeader)?.trim();
    let width = parse_dimension(lines.next(), 2)?;
    let height = parse_dimension(lines.next(), 3)?;

    let mut walls = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut agents = Vec::new();

    for (r, line) in lines.enumerate() {
        if r >= height {
            if line.trim().is_empty() {
                continue;
            }
            return Err(ParserErr::OutOfBounds(r, 0));
        }

        for (c, cell) in line.chars().enumerate() {
            if c >= width {
                if cell == EMPTY {
                    continue;
                }
                return Err(ParserErr::OutOfBounds(r, c));
            }

            let pos = Pos::new(r as i32, c as i32);
            match cell {
                EMPTY => {}
                WALL => walls.push(pos),
                GOAL => goals.push(pos),
                BOX => boxes.push(pos),
                BOX_ON_GOAL => {
                    boxes.push(pos);
                    goals.push(pos);
                }
                letter if letter.is_alphabetic() => {
                    agents.push(pos);
                    if letter.is_uppercase() {
                        goals.push(pos);
                    }
                }
                _ => return Err(ParserErr::Pos(r, c)),
            }
        }
    }

    Ok(Level::new(name, width, height, &walls, &goals, boxes, agents)?)
}

fn parse_dimension(line: Option<&str>, line_number: usize) -> Result<usize, ParserErr> {
    let line = line.ok_or(ParserErr::MissingHeader)?;
    match line.trim().parse() {
        Ok(0) | Err(_) => Err(ParserErr::Dimension(line_number)),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_level() {
        let level = r"
two agents
7
4
#######
#a? .B#
# *  c#
#######
";
        let level: Level = level.parse().unwrap();
        assert_eq!(level.name, "two agents");
        assert_eq!(level.map.width(), 7);
        assert_eq!(level.map.height(), 4);
        assert_eq!(level.map.walls().len(), 7 + 7 + 2 + 2);
        assert_eq!(
            level.map.goals(),
            &[Pos::new(1, 4), Pos::new(1, 5), Pos::new(2, 2)][..]
        );
        assert_eq!(level.state.boxes, vec![Pos::new(1, 2), Pos::new(2, 2)]);
        assert_eq!(
            level.state.agents,
            vec![Pos::new(1, 1), Pos::new(1, 5), Pos::new(2, 5)]
        );
    }

    #[test]
    fn short_lines_and_trailing_blank_lines() {
        let level: Level = "short\n4\n2\na?\n\n\n   \n".parse().unwrap();
        assert_eq!(level.map.width(), 4);
        assert_eq!(level.map.height(), 2);
        assert_eq!(level.state.agents, vec![Pos::new(0, 0)]);
        assert_eq!(level.state.boxes, vec![Pos::new(0, 1)]);
        assert!(level.map.goals().is_empty());
    }

    #[test]
    fn non_ascii_letters_are_agents() {
        let level: Level = "accents\n4\n1\né?É.\n".parse().unwrap();
        assert_eq!(level.state.agents, vec![Pos::new(0, 0), Pos::new(0, 2)]);
        assert_eq!(level.map.goals(), &[Pos::new(0, 2), Pos::new(0, 3)][..]);
        // rendered by index, not by the original letter
        assert_eq!(level.to_string(), "a?B.\n");
    }

    #[test]
    fn windows_line_endings() {
        let level: Level = "crlf\r\n3\r\n1\r\na?.\r\n".parse().unwrap();
        assert_eq!(level.name, "crlf");
        assert_eq!(level.to_string(), "a?.\n");
    }

    #[test]
    fn parser_errors() {
        assert_eq!(parse("").unwrap_err(), ParserErr::MissingHeader);
        assert_eq!(parse("name\n3").unwrap_err(), ParserErr::MissingHeader);
        assert_eq!(parse("name\nx\n1\na").unwrap_err(), ParserErr::Dimension(2));
        assert_eq!(parse("name\n3\n0\na").unwrap_err(), ParserErr::Dimension(3));
        assert_eq!(parse("name\n3\n1\na?!").unwrap_err(), ParserErr::Pos(0, 2));
        assert_eq!(parse("name\n3\n1\na?.#").unwrap_err(), ParserErr::OutOfBounds(0, 3));
        assert_eq!(parse("name\n3\n1\na?.\n#").unwrap_err(), ParserErr::OutOfBounds(1, 0));
        assert_eq!(
            parse("name\n3\n1\n ?.").unwrap_err(),
            ParserErr::Level(LevelErr::NoAgents)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::Pos(1, 2).to_string(),
            "Invalid cell at pos: [1, 2]"
        );
        assert_eq!(ParserErr::Level(LevelErr::NoAgents).to_string(), "No agents");
    }
}
