//! Main menu.

use std::str::FromStr;

/// Menu text shown before each command prompt.
pub const MENU: &str = "\
1) Rooms and rates
2) Make a reservation
3) Cancel a reservation
4) Search reservations
5) Revenue report
q) Quit";

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List rooms with occupancy statistics.
    RoomsAndRates,
    /// Book a room.
    Reserve,
    /// Cancel a reservation.
    Cancel,
    /// Search reservations.
    Search,
    /// Print the revenue report.
    Revenue,
    /// Leave the program.
    Quit,
}

/// An unrecognised menu entry.
#[derive(Debug, thiserror::Error)]
#[error("Unknown command {0:?}; choose 1-5 or q.")]
pub struct UnknownCommand(String);

impl FromStr for MenuChoice {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(Self::RoomsAndRates),
            "2" => Ok(Self::Reserve),
            "3" => Ok(Self::Cancel),
            "4" => Ok(Self::Search),
            "5" => Ok(Self::Revenue),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
