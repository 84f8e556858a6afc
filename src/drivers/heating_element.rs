//! Heating element driver (console simulation).
//!
//! Validates the requested power against the configured range before
//! energising.  Valid range is `1..=max_power_watts`; the UI's wrap policy
//! never produces anything else, so a rejection here means miswiring.
//!
//! On host/test: tracks state in-memory and renders each change as a line.

use log::warn;

use crate::app::ports::OutputPort;
use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterState {
    Off,
    On { watts: u32 },
}

pub struct HeatingElement {
    state: HeaterState,
    max_power_watts: u32,
}

impl HeatingElement {
    pub fn new(max_power_watts: u32) -> Self {
        Self {
            state: HeaterState::Off,
            max_power_watts,
        }
    }

    pub fn turn_on(&mut self, out: &mut impl OutputPort, watts: u32) -> Result<(), ActuatorError> {
        if watts == 0 || watts > self.max_power_watts {
            warn!(
                "Heating element: {} W outside 1..={} W, refused",
                watts, self.max_power_watts
            );
            return Err(ActuatorError::InvalidPowerLevel(watts));
        }
        if self.is_on() {
            warn!("Heating element: turn_on while already on");
            return Err(ActuatorError::AlreadyOn);
        }

        self.state = HeaterState::On { watts };
        out.output_line(&format!("Heating element works with {} W", watts));
        Ok(())
    }

    pub fn turn_off(&mut self, out: &mut impl OutputPort) {
        if self.is_on() {
            self.state = HeaterState::Off;
            out.output_line("Heating element turned off");
        }
    }

    pub fn state(&self) -> HeaterState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, HeaterState::On { .. })
    }
}
