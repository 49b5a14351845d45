//! Calendar conventions shared by reporting and configuration.

use serde::{Deserialize, Serialize};

/// How the upper bound of each calendar month is computed when prorating stays.
///
/// Months are half-open intervals `[first_day(m), first_day(m + 1))`. Older
/// revenue reports closed December on the 31st instead of January 1st, which
/// drops the night of December 31 from the year. That rule is kept available
/// so historical figures can be reproduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthBoundary {
    /// Every month ends at the first day of the following month (exclusive).
    #[default]
    HalfOpen,
    /// December is bounded by December 31 itself, so its last night is never billed.
    InclusiveDecember31,
}

impl std::fmt::Display for MonthBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HalfOpen => write!(f, "half_open"),
            Self::InclusiveDecember31 => write!(f, "inclusive_december31"),
        }
    }
}

impl std::str::FromStr for MonthBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half_open" => Ok(Self::HalfOpen),
            "inclusive_december31" => Ok(Self::InclusiveDecember31),
            _ => Err(format!("Unknown month boundary: {s}")),
        }
    }
}
