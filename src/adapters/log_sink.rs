//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events
//! through the `log` facade.  On the host binary that lands in the
//! `tracing-subscriber` formatter on stderr, keeping stdout for the
//! appliance's own console lines.

use log::{error, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::CookingStarted {
                power_watts,
                seconds,
            } => {
                info!("COOK  | started {}W for {}s", power_watts, seconds);
            }
            AppEvent::CookingStopped { remaining_secs } => {
                info!("COOK  | stopped with {}s remaining", remaining_secs);
            }
            AppEvent::CookingFinished { power_watts } => {
                info!("COOK  | finished at {}W", power_watts);
            }
            AppEvent::Fault(e) => {
                error!("FAULT | {}", e);
            }
            AppEvent::Status(s) => {
                info!(
                    "STATUS | state={:?} | door={} | remaining={} | \
                     sessions started={} completed={} cancelled={} | \
                     ui_events={} ignored={}",
                    s.state,
                    if s.door_open { "open" } else { "closed" },
                    s.remaining_secs
                        .map_or_else(|| "-".to_string(), |r| format!("{r}s")),
                    s.sessions_started,
                    s.sessions_completed,
                    s.sessions_cancelled,
                    s.ui_events,
                    s.ignored_events,
                );
            }
        }
    }
}
