//! Cavity light driver (console simulation).
//!
//! Only state changes produce output, so repeated on/off calls are silent.

use crate::app::ports::OutputPort;

pub struct Light {
    on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn turn_on(&mut self, out: &mut impl OutputPort) {
        if !self.on {
            self.on = true;
            out.output_line("Light is turned on");
        }
    }

    pub fn turn_off(&mut self, out: &mut impl OutputPort) {
        if self.on {
            self.on = false;
            out.output_line("Light is turned off");
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}
