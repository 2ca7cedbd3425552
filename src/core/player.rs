//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The game always has exactly two players, one on each end of the rope.
//! A player's side is fixed for the lifetime of a game.
//!
//! ## Sides
//!
//! Per-side storage with O(1) access by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Which end of the rope a player pulls from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Rope movement caused by one correct answer from this side.
    ///
    /// Negative positions favour the left player, positive the right.
    #[must_use]
    pub const fn pull(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// One value per side.
///
/// ```
/// use math_tug::core::{Side, Sides};
///
/// let mut scores = Sides::new(|_| 0u32);
/// scores[Side::Right] += 1;
///
/// assert_eq!(scores[Side::Left], 0);
/// assert_eq!(scores[Side::Right], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    pub left: T,
    pub right: T,
}

impl<T> Sides<T> {
    /// Build both entries from a factory receiving the side.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            left: factory(Side::Left),
            right: factory(Side::Right),
        }
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Iterate over (Side, &T) pairs, left first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Left, &self.left), (Side::Right, &self.right)].into_iter()
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
