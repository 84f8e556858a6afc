//! Shared mutable context threaded through every UI state handler.
//!
//! `UiContext` is the single struct that state handlers read from and
//! write to: the current power/time selection, the door-open flag, and the
//! list of [`Directive`]s the service must apply to the display, the light
//! and the cook controller once the handler returns.

use heapless::Vec;
use log::{debug, error};

use crate::config::OvenConfig;
use crate::events::Event;

/// Upper bound on directives produced by a single event.
pub const MAX_DIRECTIVES: usize = 4;

/// Each time-button press adds one whole minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

// ---------------------------------------------------------------------------
// Directives (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

/// A side effect requested by a state handler, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    ShowPower(u32),
    ShowTime { minutes: u32, seconds: u32 },
    ClearDisplay,
    LightOn,
    LightOff,
    StartCooking { power_watts: u32, seconds: u32 },
    StopCooking,
}

// ---------------------------------------------------------------------------
// UiContext
// ---------------------------------------------------------------------------

pub struct UiContext {
    // -- Selection --
    /// Selected power (W).  Meaningful outside `Ready` only.
    pub power_watts: u32,
    /// Selected minutes.  Meaningful in `SetTime` and `Cooking` only.
    pub minutes: u32,

    // -- Door --
    /// Distinguishes "Ready, door open" from "Ready, door closed".
    pub door_open: bool,

    // -- Outputs --
    /// Side effects for the service to apply after the handler returns.
    pub directives: Vec<Directive, MAX_DIRECTIVES>,

    // -- Bookkeeping --
    /// Events dropped because they meant nothing in the current state.
    pub ignored_events: u32,

    // -- Configuration --
    pub config: OvenConfig,
}

impl UiContext {
    pub fn new(config: OvenConfig) -> Self {
        Self {
            power_watts: 0,
            minutes: 0,
            door_open: false,
            directives: Vec::new(),
            ignored_events: 0,
            config,
        }
    }

    /// Queue a side effect.
    pub fn emit(&mut self, directive: Directive) {
        if self.directives.push(directive).is_err() {
            debug_assert!(false, "directive overflow: {directive:?}");
            error!("UI: directive buffer full, dropped {:?}", directive);
        }
    }

    /// Record an event the current state has no use for.
    pub fn ignore(&mut self, state: &'static str, event: Event) {
        self.ignored_events = self.ignored_events.saturating_add(1);
        debug!("UI: {:?} ignored in {}", event, state);
    }

    /// Requested cook duration in seconds.
    pub fn cook_seconds(&self) -> u32 {
        self.minutes.saturating_mul(SECONDS_PER_MINUTE)
    }

    /// Drop the power/time selection.
    pub fn reset_selection(&mut self) {
        self.power_watts = 0;
        self.minutes = 0;
    }
}
