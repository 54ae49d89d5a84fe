use std::{num::ParseIntError, str::FromStr};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::{parse_int, split};

const SPAWN_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

#[derive(Debug, Error)]
pub enum SchoolError {
    #[error("timer {0} is above {max}", max = SPAWN_TIMER)]
    TimerOutOfRange(usize),
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

/// Lanternfish counted by the value of their spawn timer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct School {
    by_timer: [u64; SPAWN_TIMER + 1],
}

impl FromStr for School {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut school = School::default();
        for timer in split(s.trim(), ",") {
            let timer: usize = parse_int(timer)?;
            *school
                .by_timer
                .get_mut(timer)
                .ok_or(SchoolError::TimerOutOfRange(timer))? += 1;
        }
        Ok(school)
    }
}

impl School {
    pub fn advance(&mut self) {
        // Timer 0 wraps to the spawn slot, so the parents only need moving to the reset slot.
        self.by_timer.rotate_left(1);
        self.by_timer[RESET_TIMER] += self.by_timer[SPAWN_TIMER];
    }

    pub fn after(mut self, days: usize) -> Self {
        for _ in 0..days {
            self.advance();
        }
        self
    }

    pub fn population(&self) -> u64 {
        self.by_timer.iter().sum()
    }
}

pub fn day6(input: &str) -> Result<(u64, u64)> {
    let school: School = input.parse().context("Invalid lanternfish timers")?;
    debug!(initial = school.population(), "simulating lanternfish");

    let after_80 = school.after(80);
    let after_256 = after_80.after(256 - 80);

    Ok((after_80.population(), after_256.population()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() -> Result<()> {
        let school: School = "3,4,3,1,2".parse()?;
        assert_eq!(school.after(1), "2,3,2,0,1".parse::<School>()?);
        assert_eq!(school.after(2), "1,2,1,6,0,8".parse::<School>()?);
        assert_eq!(school.after(18).population(), 26);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "3,9".parse::<School>(),
            Err(SchoolError::TimerOutOfRange(9))
        ));
        assert_eq!(
            SchoolError::TimerOutOfRange(9).to_string(),
            "timer 9 is above 8"
        );
        assert!(matches!(
            "3,-1".parse::<School>(),
            Err(SchoolError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_day6() -> Result<()> {
        assert_eq!(day6("3,4,3,1,2\n")?, (5934, 26984457539));
        Ok(())
    }
}
