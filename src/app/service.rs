//! Application service: the hexagonal core.
//!
//! [`OvenService`] owns the UI state machine, its context, the cook
//! controller and the serial dispatch queue.  It exposes a single entry
//! point, [`handle`](OvenService::handle): every button, door and timer
//! event goes in there and is routed through the queue one at a time.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  Panel / Timer ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                    │      OvenService        │
//!  OvenHardware  ◀── │  FSM · CookController   │
//!                    └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::OvenConfig;
use crate::control::cook::{CookController, CookSession};
use crate::error::{Error, Result};
use crate::events::{Event, EventQueue};
use crate::fsm::context::{Directive, UiContext};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, OvenState, StateId};

use super::events::{AppEvent, StatusSnapshot};
use super::ports::{EventSink, OvenHardware};

// ───────────────────────────────────────────────────────────────
// OvenService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct OvenService {
    fsm: Fsm,
    ctx: UiContext,
    cook: CookController,
    queue: EventQueue,
    sessions_started: u32,
    sessions_completed: u32,
    sessions_cancelled: u32,
}

impl OvenService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM: call [`start`](Self::start) next.
    pub fn new(config: OvenConfig) -> Self {
        let ctx = UiContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::Ready);

        Self {
            fsm,
            ctx,
            cook: CookController::new(),
            queue: EventQueue::new(),
            sessions_started: 0,
            sessions_completed: 0,
            sessions_cancelled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in `Ready`.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("OvenService started in {:?}", self.fsm.current_state());
    }

    // ── Event dispatch ────────────────────────────────────────

    /// Queue `event` and process everything pending, including events
    /// raised while handling it (e.g. `CookingFinished` after expiry).
    pub fn handle(
        &mut self,
        event: Event,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if let Err(e) = self.post(event) {
            sink.emit(&AppEvent::Fault(e));
            return Err(e);
        }
        self.run_pending(hw, sink)
    }

    /// Queue `event` without processing it.
    pub fn post(&mut self, event: Event) -> Result<()> {
        if self.queue.push(event) {
            Ok(())
        } else {
            warn!("Event queue full, dropped {:?}", event);
            Err(Error::QueueFull)
        }
    }

    /// Drain the queue in FIFO order.
    ///
    /// Stops at the first error; events still queued are processed by the
    /// next call.
    pub fn run_pending(&mut self, hw: &mut impl OvenHardware, sink: &mut impl EventSink) -> Result<()> {
        while let Some(event) = self.queue.pop() {
            if let Err(e) = self.dispatch(event, hw, sink) {
                sink.emit(&AppEvent::Fault(e));
                return Err(e);
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current UI state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Current UI state with its selection.
    pub fn oven_state(&self) -> OvenState {
        self.fsm.oven_state(&self.ctx)
    }

    pub fn door_open(&self) -> bool {
        self.ctx.door_open
    }

    /// The running cook session, if any.
    pub fn cook_session(&self) -> Option<CookSession> {
        self.cook.session()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn config(&self) -> &OvenConfig {
        &self.ctx.config
    }

    /// Build a status snapshot from the current context.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            state: self.oven_state(),
            door_open: self.ctx.door_open,
            remaining_secs: self.cook.session().map(|s| s.remaining_secs),
            sessions_started: self.sessions_started,
            sessions_completed: self.sessions_completed,
            sessions_cancelled: self.sessions_cancelled,
            ui_events: self.fsm.event_count(),
            ignored_events: self.ctx.ignored_events,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn dispatch(
        &mut self,
        event: Event,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if event.is_timer() {
            self.dispatch_timer(event, hw, sink)
        } else {
            self.dispatch_ui(event, hw, sink)
        }
    }

    /// Timer events belong to the cook controller, not the UI.
    fn dispatch_timer(
        &mut self,
        event: Event,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if event == Event::TimerTick {
            return self.cook.on_tick(hw);
        }
        let session = self.cook.on_expired(hw, &mut self.queue)?;
        self.sessions_completed += 1;
        sink.emit(&AppEvent::CookingFinished {
            power_watts: session.power_watts,
        });
        Ok(())
    }

    fn dispatch_ui(
        &mut self,
        event: Event,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        debug!("UI event {:?} in {:?}", event, self.fsm.current_state());
        let prev = self.fsm.current_state();
        if let Some(next) = self.fsm.handle(event, &mut self.ctx) {
            sink.emit(&AppEvent::StateChanged { from: prev, to: next });
        }
        self.apply_directives(hw, sink)
    }

    /// Translate UI directives into port calls, in the order they were queued.
    fn apply_directives(&mut self, hw: &mut impl OvenHardware, sink: &mut impl EventSink) -> Result<()> {
        let directives = core::mem::take(&mut self.ctx.directives);

        for directive in directives {
            match directive {
                Directive::ShowPower(watts) => hw.show_power(watts),
                Directive::ShowTime { minutes, seconds } => hw.show_time(minutes, seconds),
                Directive::ClearDisplay => hw.clear_display(),
                Directive::LightOn => hw.light_on(),
                Directive::LightOff => hw.light_off(),
                Directive::StartCooking {
                    power_watts,
                    seconds,
                } => {
                    if let Err(e) = self.cook.start_cooking(power_watts, seconds, hw) {
                        self.abort_start(hw, sink);
                        return Err(e);
                    }
                    self.sessions_started += 1;
                    sink.emit(&AppEvent::CookingStarted {
                        power_watts,
                        seconds,
                    });
                }
                Directive::StopCooking => {
                    if let Some(session) = self.cook.stop(hw) {
                        self.sessions_cancelled += 1;
                        sink.emit(&AppEvent::CookingStopped {
                            remaining_secs: session.remaining_secs,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// The heater refused to start: put the panel back to a clean `Ready`.
    fn abort_start(&mut self, hw: &mut impl OvenHardware, sink: &mut impl EventSink) {
        warn!("Cook start refused, returning to Ready");
        let prev = self.fsm.current_state();
        self.fsm.force_transition(StateId::Ready, &mut self.ctx);
        self.ctx.directives.clear();
        hw.light_off();
        hw.clear_display();
        if prev != StateId::Ready {
            sink.emit(&AppEvent::StateChanged {
                from: prev,
                to: StateId::Ready,
            });
        }
    }
}
