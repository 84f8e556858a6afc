//! Unified error types for the oven control core.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! dispatch loop's error handling uniform.  All variants are `Copy` so
//! they can be passed through the service and into [`AppEvent::Fault`]
//! without allocation.
//!
//! Events that make no sense in the current state are **not** errors:
//! the state machine drops them silently.  What ends up here is either a
//! collaborator breaking its contract or an actuator refusing a command.
//!
//! [`AppEvent::Fault`]: crate::app::events::AppEvent::Fault

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An actuator rejected a command.
    Actuator(ActuatorError),
    /// A collaborator delivered a notification its contract forbids.
    Contract(ContractViolation),
    /// The serial dispatch queue is full; the event was dropped.
    QueueFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Contract(e) => write!(f, "contract violation: {e}"),
            Self::QueueFull => write!(f, "event queue full"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// Heating element asked to run outside its supported range (watts).
    InvalidPowerLevel(u32),
    /// Heating element switched on while already running.
    AlreadyOn,
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPowerLevel(watts) => write!(f, "invalid power level {watts} W"),
            Self::AlreadyOn => write!(f, "heating element already on"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Contract violations
// ---------------------------------------------------------------------------

/// Precondition breaches between the UI, the cook controller and the timer.
///
/// These indicate a wiring defect, never a user mistake, so they are
/// surfaced to the caller instead of being recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// `start_cooking` while a session is already running.
    SessionAlreadyActive,
    /// Timer tick delivered with no session.
    TickWithoutSession,
    /// Timer expiry delivered with no session.
    ExpiryWithoutSession,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionAlreadyActive => write!(f, "cook session already active"),
            Self::TickWithoutSession => write!(f, "timer tick with no active session"),
            Self::ExpiryWithoutSession => write!(f, "timer expiry with no active session"),
        }
    }
}

impl From<ContractViolation> for Error {
    fn from(e: ContractViolation) -> Self {
        Self::Contract(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
