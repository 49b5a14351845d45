//! Typed codes for rooms and reservations.
//!
//! Using typed codes prevents accidentally passing a reservation number where a
//! room is expected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a room code (`VARCHAR(5)` in the schema).
pub const ROOM_CODE_MAX_LEN: usize = 5;

/// Errors raised when parsing codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The code was empty.
    #[error("code cannot be empty")]
    Empty,

    /// The room code is longer than the column allows.
    #[error("room code '{0}' is longer than {ROOM_CODE_MAX_LEN} characters")]
    TooLong(String),

    /// The code contains characters other than ASCII letters and digits.
    #[error("code '{0}' must contain only letters and digits")]
    InvalidCharacters(String),

    /// The reservation code is not a positive number.
    #[error("reservation code '{0}' is not a positive number")]
    NotANumber(String),
}

/// Unique room identifier, e.g. `101A` or `HBB`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode(String);

impl RoomCode {
    /// Parses and normalises a room code (trimmed, upper-cased).
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty, too long, or not alphanumeric.
    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        let code = raw.trim().to_uppercase();
        if code.is_empty() {
            return Err(CodeError::Empty);
        }
        if code.chars().count() > ROOM_CODE_MAX_LEN {
            return Err(CodeError::TooLong(code));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CodeError::InvalidCharacters(code));
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RoomCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Store-generated reservation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationCode(pub i32);

impl ReservationCode {
    /// Returns the inner number.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ReservationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReservationCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        match trimmed.parse::<i32>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(CodeError::NotANumber(trimmed.to_string())),
        }
    }
}
