//! Outbound application events.
//!
//! The [`OvenService`](super::service::OvenService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to the console, record them in
//! a test, etc.

use crate::error::Error;
use crate::fsm::{OvenState, StateId};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries initial state).
    Started(StateId),

    /// The UI state machine transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// Heater and timer are running.
    CookingStarted { power_watts: u32, seconds: u32 },

    /// The session was cut short by cancel or door.
    CookingStopped { remaining_secs: u32 },

    /// The session ran to the end.
    CookingFinished { power_watts: u32 },

    /// A collaborator broke its contract or an actuator refused a command.
    Fault(Error),

    /// Reply to a status request.
    Status(StatusSnapshot),
}

/// A point-in-time view of the oven, suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub state: OvenState,
    pub door_open: bool,
    /// Seconds left in the running session, if any.
    pub remaining_secs: Option<u32>,
    pub sessions_started: u32,
    pub sessions_completed: u32,
    pub sessions_cancelled: u32,
    /// Panel and door events the UI state machine has handled.
    pub ui_events: u64,
    pub ignored_events: u32,
}
