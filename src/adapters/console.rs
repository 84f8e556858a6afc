//! Console hardware adapter: bridges the simulated drivers to the port traits.
//!
//! Owns the display, light, heating element and countdown timer, plus the
//! [`OutputPort`] they all render to.  This is the only adapter the host
//! binary wires into [`OvenService`](crate::app::service::OvenService).

use crate::app::ports::{DisplayPort, HeatingElementPort, LightPort, OutputPort, TimerPort};
use crate::config::OvenConfig;
use crate::drivers::display::{Display, DisplayContent};
use crate::drivers::heating_element::{HeaterState, HeatingElement};
use crate::drivers::light::Light;
use crate::drivers::timer::CountdownTimer;
use crate::error::ActuatorError;
use crate::events::Event;

/// Concrete adapter that combines the simulated oven behind port traits.
pub struct ConsoleHardware<O: OutputPort> {
    out: O,
    display: Display,
    light: Light,
    heater: HeatingElement,
    timer: CountdownTimer,
}

impl<O: OutputPort> ConsoleHardware<O> {
    pub fn new(out: O, config: &OvenConfig) -> Self {
        Self {
            out,
            display: Display::new(),
            light: Light::new(),
            heater: HeatingElement::new(config.heater_max_power_watts),
            timer: CountdownTimer::new(),
        }
    }

    /// Advance the cook timer by one second; post the result to the service.
    pub fn elapse_second(&mut self) -> heapless::Vec<Event, 2> {
        self.timer.elapse_second()
    }

    pub fn display_content(&self) -> DisplayContent {
        self.display.content()
    }

    pub fn light_is_on(&self) -> bool {
        self.light.is_on()
    }

    pub fn heater_state(&self) -> HeaterState {
        self.heater.state()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn output(&self) -> &O {
        &self.out
    }
}

// ── DisplayPort ───────────────────────────────────────────────

impl<O: OutputPort> DisplayPort for ConsoleHardware<O> {
    fn show_power(&mut self, watts: u32) {
        self.display.show_power(&mut self.out, watts);
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.display.show_time(&mut self.out, minutes, seconds);
    }

    fn clear_display(&mut self) {
        self.display.clear(&mut self.out);
    }
}

// ── LightPort ─────────────────────────────────────────────────

impl<O: OutputPort> LightPort for ConsoleHardware<O> {
    fn light_on(&mut self) {
        self.light.turn_on(&mut self.out);
    }

    fn light_off(&mut self) {
        self.light.turn_off(&mut self.out);
    }
}

// ── HeatingElementPort ────────────────────────────────────────

impl<O: OutputPort> HeatingElementPort for ConsoleHardware<O> {
    fn heater_on(&mut self, watts: u32) -> Result<(), ActuatorError> {
        self.heater.turn_on(&mut self.out, watts)
    }

    fn heater_off(&mut self) {
        self.heater.turn_off(&mut self.out);
    }
}

// ── TimerPort ─────────────────────────────────────────────────

impl<O: OutputPort> TimerPort for ConsoleHardware<O> {
    fn start_timer(&mut self, seconds: u32) {
        self.timer.start(seconds);
    }

    fn stop_timer(&mut self) {
        self.timer.stop();
    }
}
