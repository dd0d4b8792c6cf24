//! Slide directions.
//!
//! A direction names where the blank moves. The numeric encoding is fixed
//! and shared with the host framework:
//!
//! | Code | Direction |
//! |------|-----------|
//! | 0    | Left      |
//! | 1    | Right     |
//! | 2    | Up        |
//! | 3    | Down      |
//!
//! Reversal detection relies on [`Direction::opposite`], so changing the
//! encoding means revisiting that table as well.

use serde::{Deserialize, Serialize};

use super::error::PuzzleError;

/// Direction the blank slides in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    /// Number of distinct directions (size of the discrete action space).
    pub const COUNT: usize = 4;

    /// All directions in code order.
    pub const ALL: [Direction; Self::COUNT] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Decode a raw action code.
    ///
    /// ```
    /// use sliding_puzzle_env::core::Direction;
    ///
    /// assert_eq!(Direction::from_code(2).unwrap(), Direction::Up);
    /// assert!(Direction::from_code(4).is_err());
    /// assert!(Direction::from_code(-1).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Self, PuzzleError> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            2 => Ok(Direction::Up),
            3 => Ok(Direction::Down),
            other => Err(PuzzleError::InvalidAction(other)),
        }
    }

    /// Raw action code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Check whether `self` immediately undoes `previous`.
    ///
    /// With no previous action (start of an episode) nothing is a reversal.
    #[must_use]
    pub fn reverses(self, previous: Option<Direction>) -> bool {
        previous.is_some_and(|prev| prev.opposite() == self)
    }

    /// Row/column offset applied to the blank position.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = PuzzleError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Direction> for i64 {
    fn from(direction: Direction) -> Self {
        i64::from(direction.code())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for direction in Direction::ALL {
            let code = i64::from(direction);
            assert_eq!(Direction::from_code(code).unwrap(), direction);
        }
    }

    #[test]
    fn test_out_of_range_codes() {
        for code in [-10, -1, 4, 5, 100] {
            match Direction::from_code(code) {
                Err(PuzzleError::InvalidAction(c)) => assert_eq!(c, code),
                other => panic!("expected InvalidAction, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_reversal_matches_code_sum_rule() {
        // Left/Right are 0/1 and Up/Down are 2/3, so opposing pairs sum to 1 or 5.
        for action in Direction::ALL {
            for prev in Direction::ALL {
                let sum = action.code() + prev.code();
                assert_eq!(action.reverses(Some(prev)), sum == 1 || sum == 5);
            }
            assert!(!action.reverses(None));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Left.to_string(), "Left");
        assert_eq!(Direction::Down.to_string(), "Down");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Up);
    }
}
