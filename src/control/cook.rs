//! Cook controller
//!
//! Runs one cooking session end-to-end: heater and timer go on together,
//! each timer tick counts the session down on the display, and expiry or
//! an explicit stop turns everything off again.
//!
//! ```text
//!          start_cooking
//!   IDLE ─────────────────▶ ACTIVE
//!    ▲                        │
//!    ├──────── stop() ────────┤   (caller-initiated, silent)
//!    └──── timer expiry ──────┘   (posts CookingFinished)
//! ```
//!
//! This is the only component that talks to the heating element.

use log::{debug, error, info};

use crate::app::ports::{DisplayPort, HeatingElementPort, TimerPort};
use crate::error::{ContractViolation, Error, Result};
use crate::events::{Event, EventQueue};

/// State of the session in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookSession {
    pub power_watts: u32,
    pub remaining_secs: u32,
}

/// Cook controller.  Idle when `session` is `None`.
#[derive(Debug, Default)]
pub struct CookController {
    session: Option<CookSession>,
}

impl CookController {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Start a session: heater on at `power_watts`, timer for `seconds`.
    ///
    /// The display is left alone; the first tick updates it.  If the heater
    /// refuses the power level, the timer is not started and the controller
    /// stays idle.
    pub fn start_cooking(
        &mut self,
        power_watts: u32,
        seconds: u32,
        hw: &mut (impl HeatingElementPort + TimerPort),
    ) -> Result<()> {
        if self.session.is_some() {
            error!("COOK: start_cooking while a session is active");
            return Err(ContractViolation::SessionAlreadyActive.into());
        }

        hw.heater_on(power_watts)?;
        hw.start_timer(seconds);
        self.session = Some(CookSession {
            power_watts,
            remaining_secs: seconds,
        });
        info!("COOK: started at {} W for {}s", power_watts, seconds);
        Ok(())
    }

    /// Caller-initiated stop.  Heater off and timer stopped before this
    /// returns.  No-op when idle; never notifies the caller.
    ///
    /// Returns the session that was cut short, if any.
    pub fn stop(&mut self, hw: &mut (impl HeatingElementPort + TimerPort)) -> Option<CookSession> {
        let session = self.session.take()?;
        hw.heater_off();
        hw.stop_timer();
        info!("COOK: stopped with {}s remaining", session.remaining_secs);
        Some(session)
    }

    /// One second elapsed.  Counts down and shows the remaining time while
    /// any is left.
    pub fn on_tick(&mut self, display: &mut impl DisplayPort) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            error!("COOK: timer tick with no active session");
            return Err(ContractViolation::TickWithoutSession.into());
        };

        session.remaining_secs = session.remaining_secs.saturating_sub(1);
        let remaining = session.remaining_secs;
        debug!("COOK: tick, {}s remaining", remaining);
        if remaining > 0 {
            display.show_time(remaining / 60, remaining % 60);
        }
        Ok(())
    }

    /// Timer ran out.  Shuts down and posts `CookingFinished` for the UI.
    pub fn on_expired(
        &mut self,
        hw: &mut (impl HeatingElementPort + TimerPort),
        queue: &mut EventQueue,
    ) -> Result<CookSession> {
        let Some(session) = self.session.take() else {
            error!("COOK: timer expiry with no active session");
            return Err(ContractViolation::ExpiryWithoutSession.into());
        };

        hw.heater_off();
        hw.stop_timer();
        info!("COOK: finished {} W session", session.power_watts);

        if !queue.push(Event::CookingFinished) {
            error!("COOK: event queue full, CookingFinished dropped");
            return Err(Error::QueueFull);
        }
        Ok(session)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<CookSession> {
        self.session
    }
}
