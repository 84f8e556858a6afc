//! Mock hardware adapter for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history.  The timer is a real [`CountdownTimer`], so tests can drive
//! simulated seconds through [`MockHardware::elapse_second`].

use microwave::app::events::AppEvent;
use microwave::app::ports::{DisplayPort, EventSink, HeatingElementPort, LightPort, TimerPort};
use microwave::drivers::timer::CountdownTimer;
use microwave::error::ActuatorError;
use microwave::events::Event;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    ShowPower(u32),
    ShowTime(u32, u32),
    ClearDisplay,
    LightOn,
    LightOff,
    HeaterOn(u32),
    HeaterOff,
    TimerStart(u32),
    TimerStop,
}

impl HwCall {
    pub fn is_display(&self) -> bool {
        matches!(
            self,
            Self::ShowPower(_) | Self::ShowTime(..) | Self::ClearDisplay
        )
    }
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    timer: CountdownTimer,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            timer: CountdownTimer::new(),
        }
    }

    pub fn last_call(&self) -> Option<&HwCall> {
        self.calls.last()
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn heater_on_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HwCall::HeaterOn(_)))
            .count()
    }

    pub fn heater_is_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HwCall::HeaterOn(_) => Some(true),
                HwCall::HeaterOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn light_is_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HwCall::LightOn => Some(true),
                HwCall::LightOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Last display call, or `None` if the display was never touched.
    pub fn last_display(&self) -> Option<HwCall> {
        self.calls.iter().rev().copied().find(HwCall::is_display)
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Advance the simulated timer by one second.
    pub fn elapse_second(&mut self) -> Vec<Event> {
        self.timer.elapse_second().into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockHardware {
    fn show_power(&mut self, watts: u32) {
        self.calls.push(HwCall::ShowPower(watts));
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.calls.push(HwCall::ShowTime(minutes, seconds));
    }

    fn clear_display(&mut self) {
        self.calls.push(HwCall::ClearDisplay);
    }
}

impl LightPort for MockHardware {
    fn light_on(&mut self) {
        self.calls.push(HwCall::LightOn);
    }

    fn light_off(&mut self) {
        self.calls.push(HwCall::LightOff);
    }
}

impl HeatingElementPort for MockHardware {
    fn heater_on(&mut self, watts: u32) -> Result<(), ActuatorError> {
        self.calls.push(HwCall::HeaterOn(watts));
        Ok(())
    }

    fn heater_off(&mut self) {
        self.calls.push(HwCall::HeaterOff);
    }
}

impl TimerPort for MockHardware {
    fn start_timer(&mut self, seconds: u32) {
        self.calls.push(HwCall::TimerStart(seconds));
        self.timer.start(seconds);
    }

    fn stop_timer(&mut self) {
        self.calls.push(HwCall::TimerStop);
        self.timer.stop();
    }
}

// ── LogSink ───────────────────────────────────────────────────

/// Event sink that records everything emitted.
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn faults(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Fault(_)))
            .count()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
