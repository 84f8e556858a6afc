//! Inbound commands from the console front panel.
//!
//! Each line typed into the host simulator parses into a [`PanelCommand`].
//! Hardware commands go through the [`ControlPanel`](crate::drivers::panel::ControlPanel)
//! to become [`Event`](crate::events::Event)s; the rest are handled by the
//! binary itself.

use core::fmt;
use core::str::FromStr;

/// Commands the console accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    PowerButton,
    TimeButton,
    StartCancelButton,
    OpenDoor,
    CloseDoor,
    /// Log a [`StatusSnapshot`](super::events::StatusSnapshot).
    Status,
    Quit,
}

/// The input line matched no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown command '{}' (try: power, time, start, open, close, status, quit)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for PanelCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "power" => Ok(Self::PowerButton),
            "t" | "time" => Ok(Self::TimeButton),
            "s" | "start" | "cancel" => Ok(Self::StartCancelButton),
            "o" | "open" => Ok(Self::OpenDoor),
            "c" | "close" => Ok(Self::CloseDoor),
            "status" => Ok(Self::Status),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
