//! Countdown cook timer (simulation).
//!
//! Counts whole seconds.  The owner calls [`elapse_second`] once per
//! timer period (the host binary does this from its main loop); the
//! returned events are posted into the service's dispatch queue in order,
//! so tick and expiry are always delivered serially.
//!
//! [`elapse_second`]: CountdownTimer::elapse_second

use heapless::Vec;
use log::debug;

use crate::events::Event;

pub struct CountdownTimer {
    remaining_secs: u32,
    running: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: 0,
            running: false,
        }
    }

    /// Arm for `seconds`.  Restarting a running timer replaces its deadline.
    pub fn start(&mut self, seconds: u32) {
        self.remaining_secs = seconds;
        self.running = seconds > 0;
        debug!("timer: started for {}s", seconds);
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!("timer: stopped with {}s left", self.remaining_secs);
        }
        self.running = false;
    }

    /// Advance one second.
    ///
    /// Returns `TimerTick`, followed by `TimerExpired` on the tick that
    /// reaches zero.  Returns nothing while stopped.
    pub fn elapse_second(&mut self) -> Vec<Event, 2> {
        let mut fired = Vec::new();
        if !self.running {
            return fired;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        // Capacity is 2 and at most two events are pushed.
        let _ = fired.push(Event::TimerTick);
        if self.remaining_secs == 0 {
            self.running = false;
            let _ = fired.push(Event::TimerExpired);
        }
        fired
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}
