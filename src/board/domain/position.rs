//! Ordered rank of a task within its list.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based rank of a task within the ordered sequence of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u32);

impl Position {
    /// The first slot of every list.
    pub const FIRST: Self = Self(1);

    /// Creates a validated position from a caller-supplied rank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPosition`] when the value is below 1
    /// or does not fit the persisted 32-bit range.
    pub fn new(value: i64) -> Result<Self, BoardDomainError> {
        match u32::try_from(value) {
            Ok(rank) if rank >= 1 && i32::try_from(rank).is_ok() => Ok(Self(rank)),
            _ => Err(BoardDomainError::InvalidPosition(value)),
        }
    }

    /// Creates a move target from a caller-supplied rank.
    ///
    /// Values beyond the persisted 32-bit range saturate to its maximum; a
    /// target past the end of a list is clamped when the move is planned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPosition`] when the value is below 1.
    pub fn saturating(value: i64) -> Result<Self, BoardDomainError> {
        if value < 1 {
            return Err(BoardDomainError::InvalidPosition(value));
        }
        let rank = i32::try_from(value).unwrap_or(i32::MAX);
        u32::try_from(rank)
            .map(Self)
            .map_err(|_| BoardDomainError::InvalidPosition(value))
    }

    /// Returns the slot directly after `count` occupied slots.
    #[must_use]
    pub fn after(count: usize) -> Self {
        let rank = u32::try_from(count)
            .ok()
            .and_then(|value| value.checked_add(1))
            .unwrap_or(u32::MAX);
        Self(rank)
    }

    /// Returns the underlying rank.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the next position.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<i32> for Position {
    type Error = BoardDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Position> for i32 {
    fn from(position: Position) -> Self {
        Self::try_from(position.0).unwrap_or(Self::MAX)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
