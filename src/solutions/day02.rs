use std::{num::ParseIntError, str::FromStr};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::{numbered_lines, parse_int, split};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("expected `<direction> <distance>`, found `{0}`")]
    Syntax(String),
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = split(s, " ").collect();
        let [direction, distance] = words[..] else {
            return Err(CommandError::Syntax(s.trim().to_string()));
        };
        let distance = parse_int(distance)?;
        match direction {
            "forward" => Ok(Command::Forward(distance)),
            "down" => Ok(Command::Down(distance)),
            "up" => Ok(Command::Up(distance)),
            other => Err(CommandError::UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Submarine {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Submarine {
    fn steer(mut self, command: &Command) -> Self {
        match *command {
            Command::Forward(n) => self.horizontal += n,
            Command::Down(n) => self.depth += n,
            Command::Up(n) => self.depth -= n,
        }
        self
    }

    fn steer_with_aim(mut self, command: &Command) -> Self {
        match *command {
            Command::Forward(n) => {
                self.horizontal += n;
                self.depth += self.aim * n;
            }
            Command::Down(n) => self.aim += n,
            Command::Up(n) => self.aim -= n,
        }
        self
    }

    fn position_product(&self) -> Result<u64> {
        let product = self
            .horizontal
            .checked_mul(self.depth)
            .with_context(|| {
                format!(
                    "Position product overflowed (horizontal {}, depth {})",
                    self.horizontal, self.depth
                )
            })?;
        u64::try_from(product).with_context(|| {
            format!(
                "Submarine ended above the surface (horizontal {}, depth {})",
                self.horizontal, self.depth
            )
        })
    }
}

pub fn day2(input: &str) -> Result<(u64, u64)> {
    let commands = numbered_lines(input)
        .map(|(n, line)| {
            line.parse::<Command>()
                .with_context(|| format!("Invalid command on line {}: `{}`", n, line))
        })
        .collect::<Result<Vec<_>>>()?;

    let direct = commands
        .iter()
        .fold(Submarine::default(), Submarine::steer);
    let aimed = commands
        .iter()
        .fold(Submarine::default(), Submarine::steer_with_aim);
    debug!(?direct, ?aimed, "submarine course plotted");

    Ok((direct.position_product()?, aimed.position_product()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_parse() {
        assert_eq!("forward 5".parse::<Command>().unwrap(), Command::Forward(5));
        assert_eq!("  up   3 ".parse::<Command>().unwrap(), Command::Up(3));
        assert!(matches!(
            "sideways 2".parse::<Command>(),
            Err(CommandError::UnknownDirection(_))
        ));
        assert!(matches!(
            "down".parse::<Command>(),
            Err(CommandError::Syntax(_))
        ));
        assert!(matches!(
            "down x".parse::<Command>(),
            Err(CommandError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_day2() -> Result<()> {
        let example = indoc! {"
            forward 5
            down 5
            forward 8
            up 3
            down 8
            forward 2
        "};
        assert_eq!(day2(example)?, (150, 900));
        assert!(day2("forward 1\nup 2\n").is_err());

        let err = day2("forward 4000000000\ndown 4000000000\n").unwrap_err();
        assert!(err.to_string().contains("overflowed"));
        Ok(())
    }
}
