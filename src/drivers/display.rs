//! Front-panel display driver (console simulation).
//!
//! Renders every directive as one text line on the [`OutputPort`]:
//!
//! | Call              | Line                       |
//! |-------------------|----------------------------|
//! | `show_power(50)`  | `Display shows: 50 W`      |
//! | `show_time(1, 5)` | `Display shows: 01:05`     |
//! | `clear()`         | `Display cleared`          |

use crate::app::ports::OutputPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayContent {
    Blank,
    Power(u32),
    Time { minutes: u32, seconds: u32 },
}

pub struct Display {
    content: DisplayContent,
}

impl Display {
    pub fn new() -> Self {
        Self {
            content: DisplayContent::Blank,
        }
    }

    pub fn show_power(&mut self, out: &mut impl OutputPort, watts: u32) {
        out.output_line(&format!("Display shows: {} W", watts));
        self.content = DisplayContent::Power(watts);
    }

    pub fn show_time(&mut self, out: &mut impl OutputPort, minutes: u32, seconds: u32) {
        out.output_line(&format!("Display shows: {:02}:{:02}", minutes, seconds));
        self.content = DisplayContent::Time { minutes, seconds };
    }

    pub fn clear(&mut self, out: &mut impl OutputPort) {
        out.output_line("Display cleared");
        self.content = DisplayContent::Blank;
    }

    /// What the display currently shows.
    pub fn content(&self) -> DisplayContent {
        self.content
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
