//! Difficulty policy.
//!
//! Each tier maps to an enabled operation set and per-operation operand
//! ranges. Tiers strictly widen: every operation enabled on a tier is
//! enabled on the tiers above it, and operand ranges only grow.
//!
//! `suggest_difficulty` computes an adaptive tier shift from a player's
//! recent performance. Nothing in the round transitions calls it; callers
//! that want adaptive play apply the suggestion to the next game.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::Operation;

/// Difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Operand ranges and enabled operations for one tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub addition: RangeInclusive<u32>,
    pub subtraction: RangeInclusive<u32>,
    pub multiplication: RangeInclusive<u32>,
    /// Range for both the divisor and the quotient.
    pub division: RangeInclusive<u32>,
    pub operations: &'static [Operation],
}

impl DifficultyProfile {
    /// Operand range for an operation on this tier.
    #[must_use]
    pub fn range(&self, operation: Operation) -> RangeInclusive<u32> {
        match operation {
            Operation::Add => self.addition.clone(),
            Operation::Subtract => self.subtraction.clone(),
            Operation::Multiply => self.multiplication.clone(),
            Operation::Divide => self.division.clone(),
        }
    }

    /// Is `operation` enabled on this tier?
    #[must_use]
    pub fn allows(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }
}

static EASY: DifficultyProfile = DifficultyProfile {
    addition: 1..=10,
    subtraction: 1..=10,
    multiplication: 1..=5,
    division: 1..=5,
    operations: &[Operation::Add, Operation::Subtract],
};

static MEDIUM: DifficultyProfile = DifficultyProfile {
    addition: 10..=50,
    subtraction: 10..=50,
    multiplication: 2..=12,
    division: 2..=12,
    operations: &[Operation::Add, Operation::Subtract, Operation::Multiply],
};

static HARD: DifficultyProfile = DifficultyProfile {
    addition: 50..=200,
    subtraction: 50..=200,
    multiplication: 5..=15,
    division: 2..=15,
    operations: &[
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ],
};

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Static settings for this tier.
    #[must_use]
    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    /// Label shown next to the tier picker.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Addition & Subtraction (1-10)",
            Difficulty::Medium => "Add, Subtract & Multiply (up to 50)",
            Difficulty::Hard => "All Operations (larger numbers)",
        }
    }

    /// Next tier up, saturating at hard.
    #[must_use]
    pub const fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// Next tier down, saturating at easy.
    #[must_use]
    pub const fn easier(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Streak needed before a harder tier is suggested.
pub const ESCALATE_STREAK: u32 = 3;
/// Accuracy needed before a harder tier is suggested.
pub const ESCALATE_ACCURACY: f64 = 0.8;
/// Accuracy below which an easier tier is suggested.
pub const DEESCALATE_ACCURACY: f64 = 0.5;
/// Attempts needed before an easier tier is suggested.
pub const DEESCALATE_MIN_ATTEMPTS: u32 = 5;

/// Suggest a tier from a player's streak and overall accuracy.
///
/// Accuracy is `correct / attempts`, or 0 with no attempts.
#[must_use]
pub fn suggest_difficulty(current: Difficulty, streak: u32, correct: u32, attempts: u32) -> Difficulty {
    let accuracy = if attempts > 0 {
        f64::from(correct) / f64::from(attempts)
    } else {
        0.0
    };

    if streak >= ESCALATE_STREAK && accuracy >= ESCALATE_ACCURACY {
        return current.harder();
    }

    if streak == 0 && accuracy < DEESCALATE_ACCURACY && attempts >= DEESCALATE_MIN_ATTEMPTS {
        return current.easier();
    }

    current
}
