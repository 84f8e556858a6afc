//! Serial event dispatch queue.
//!
//! Events are produced by:
//! - The control panel (buttons, door sensor)
//! - The cook timer (one tick per second, one expiry)
//! - The cook controller (`CookingFinished` after expiry)
//!
//! Events are consumed by [`OvenService`](crate::app::service::OvenService),
//! which processes them one at a time in FIFO order.  Nothing is handled
//! re-entrantly: an event posted while another is being handled waits in
//! the queue until the current one returns.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Panel       │────▶│              │     │              │
//! │ Timer       │────▶│  EventQueue  │────▶│  OvenService │
//! │ CookCtrl    │────▶│   (FIFO)     │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use heapless::Deque;

/// Maximum number of pending events.
pub const EVENT_QUEUE_CAP: usize = 16;

/// Inbound events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    // ── User input ────────────────────────────────────────
    PowerPressed,
    TimePressed,
    StartCancelPressed,
    DoorOpened,
    DoorClosed,

    // ── Timer ─────────────────────────────────────────────
    /// One second of cooking elapsed.
    TimerTick,
    /// The requested duration has run out.
    TimerExpired,

    // ── Cook controller ───────────────────────────────────
    /// The session ran to completion; the heater is already off.
    CookingFinished,
}

impl Event {
    /// Events the timer owns; these are routed to the cook controller.
    pub fn is_timer(self) -> bool {
        matches!(self, Self::TimerTick | Self::TimerExpired)
    }
}

/// Bounded FIFO of pending events.
pub struct EventQueue {
    pending: Deque<Event, EVENT_QUEUE_CAP>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: Deque::new(),
        }
    }

    /// Push an event onto the back of the queue.
    /// Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        self.pending.push_back(event).is_ok()
    }

    /// Pop the oldest pending event.
    pub fn pop(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
