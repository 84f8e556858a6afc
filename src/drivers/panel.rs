//! Front panel: three push buttons and the door switch.
//!
//! ## Buttons
//!
//! Mechanical contacts bounce; a second edge on the same button within
//! [`DEBOUNCE_MS`] of the last accepted press is dropped.  Each button is
//! debounced on its own, so Power followed immediately by Time is two
//! presses.
//!
//! ## Door
//!
//! The reed switch is level-triggered.  [`DoorSensor`] latches the last
//! level and only reports edges, so a repeated "open" while already open
//! yields nothing.
//!
//! Timestamps are milliseconds from an arbitrary origin, truncated to
//! `u32`; comparisons use wrapping arithmetic.

use log::{debug, trace};

use crate::app::commands::PanelCommand;
use crate::events::Event;

pub const DEBOUNCE_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Power,
    Time,
    StartCancel,
}

impl Button {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }

    fn event(self) -> Event {
        match self {
            Self::Power => Event::PowerPressed,
            Self::Time => Event::TimePressed,
            Self::StartCancel => Event::StartCancelPressed,
        }
    }
}

/// Per-button debounce filter.
pub struct Buttons {
    last_accepted_ms: [Option<u32>; Button::COUNT],
}

impl Buttons {
    pub fn new() -> Self {
        Self {
            last_accepted_ms: [None; Button::COUNT],
        }
    }

    /// Feed a raw press edge.  Returns the event if the press survives
    /// debouncing.
    pub fn press(&mut self, button: Button, now_ms: u32) -> Option<Event> {
        let slot = &mut self.last_accepted_ms[button.index()];
        if let Some(last) = *slot {
            if now_ms.wrapping_sub(last) < DEBOUNCE_MS {
                trace!("{:?} bounce at {}ms dropped", button, now_ms);
                return None;
            }
        }
        *slot = Some(now_ms);
        Some(button.event())
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge detector for the door switch.  Starts closed.
pub struct DoorSensor {
    open: bool,
}

impl DoorSensor {
    pub fn new() -> Self {
        Self { open: false }
    }

    /// Sample the switch.  Returns `DoorOpened`/`DoorClosed` on a change.
    pub fn sample(&mut self, open: bool) -> Option<Event> {
        if open == self.open {
            return None;
        }
        self.open = open;
        debug!("door {}", if open { "opened" } else { "closed" });
        Some(if open {
            Event::DoorOpened
        } else {
            Event::DoorClosed
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for DoorSensor {
    fn default() -> Self {
        Self::new()
    }
}

/// Buttons and door switch together.
///
/// Two entry points: [`press`](Self::press) for contact edges that need
/// debouncing, [`command`](Self::command) for discrete inputs such as
/// console lines, where every command is exactly one press.
pub struct ControlPanel {
    buttons: Buttons,
    door: DoorSensor,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            buttons: Buttons::new(),
            door: DoorSensor::new(),
        }
    }

    /// Translate a raw contact edge at `now_ms` into an oven event.
    ///
    /// `Status` and `Quit` are not hardware inputs and always yield `None`.
    pub fn press(&mut self, command: PanelCommand, now_ms: u32) -> Option<Event> {
        match Self::button(command) {
            Some(button) => self.buttons.press(button, now_ms),
            None => self.door_or_none(command),
        }
    }

    /// Translate a discrete command into an oven event.  Buttons are not
    /// debounced; the door still reports edges only.
    pub fn command(&mut self, command: PanelCommand) -> Option<Event> {
        match Self::button(command) {
            Some(button) => Some(button.event()),
            None => self.door_or_none(command),
        }
    }

    fn button(command: PanelCommand) -> Option<Button> {
        match command {
            PanelCommand::PowerButton => Some(Button::Power),
            PanelCommand::TimeButton => Some(Button::Time),
            PanelCommand::StartCancelButton => Some(Button::StartCancel),
            _ => None,
        }
    }

    fn door_or_none(&mut self, command: PanelCommand) -> Option<Event> {
        match command {
            PanelCommand::OpenDoor => self.door.sample(true),
            PanelCommand::CloseDoor => self.door.sample(false),
            _ => None,
        }
    }

    pub fn door_open(&self) -> bool {
        self.door.is_open()
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
