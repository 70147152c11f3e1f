//! A single throw of two six-sided dice.

use crate::error::DiceError;

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// Smallest possible sum of two dice.
pub const MIN_SUM: u8 = 2;

/// Largest possible sum of two dice.
pub const MAX_SUM: u8 = DIE_FACES * 2;

/// A pair of die faces, each in `[1, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    die1: u8,
    die2: u8,
}

impl Roll {
    /// Creates a roll from two die faces.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::Validation` if either face lies outside `[1, 6]`.
    pub fn new(die1: u32, die2: u32) -> Result<Self, DiceError> {
        Ok(Self {
            die1: face(die1)?,
            die2: face(die2)?,
        })
    }

    /// Builds a roll from faces already known to be in range.
    pub(crate) fn from_faces(die1: u8, die2: u8) -> Self {
        debug_assert!((1..=DIE_FACES).contains(&die1) && (1..=DIE_FACES).contains(&die2));
        Self { die1, die2 }
    }

    /// The first die.
    #[must_use]
    pub fn die1(self) -> u8 {
        self.die1
    }

    /// The second die.
    #[must_use]
    pub fn die2(self) -> u8 {
        self.die2
    }

    /// Sum of both faces, always in `[2, 12]`.
    #[must_use]
    pub fn sum(self) -> u8 {
        self.die1 + self.die2
    }
}

fn face(value: u32) -> Result<u8, DiceError> {
    match u8::try_from(value) {
        Ok(v) if (1..=DIE_FACES).contains(&v) => Ok(v),
        _ => Err(DiceError::Validation(format!(
            "die face {value} is outside 1..={DIE_FACES}"
        ))),
    }
}
