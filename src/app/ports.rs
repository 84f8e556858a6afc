//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OvenService (domain)
//! ```
//!
//! Driven adapters (display, light, heating element, timer, event sinks,
//! config storage) implement these traits.  The
//! [`OvenService`](super::service::OvenService) consumes them via generics,
//! so the domain core never touches hardware directly.
//!
//! Method names are distinct across the hardware ports so a single adapter
//! can implement all of them without ambiguity.

use crate::config::OvenConfig;
use crate::error::ActuatorError;

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → front panel)
// ───────────────────────────────────────────────────────────────

pub trait DisplayPort {
    /// Show the selected power level in watts.
    fn show_power(&mut self, watts: u32);

    /// Show a `minutes:seconds` time.
    fn show_time(&mut self, minutes: u32, seconds: u32);

    /// Blank the display.
    fn clear_display(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Light port
// ───────────────────────────────────────────────────────────────

/// Cavity light.
pub trait LightPort {
    fn light_on(&mut self);
    fn light_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Heating element port
// ───────────────────────────────────────────────────────────────

/// The heating actuator.  Only the cook controller talks to it.
pub trait HeatingElementPort {
    /// Energise at `watts`.  Implementations reject levels they cannot run.
    fn heater_on(&mut self, watts: u32) -> Result<(), ActuatorError>;

    /// De-energise.  Must be safe to call when already off.
    fn heater_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Timer port
// ───────────────────────────────────────────────────────────────

/// Cook timer.  Once started it delivers one
/// [`Event::TimerTick`](crate::events::Event::TimerTick) per second and a
/// final [`Event::TimerExpired`](crate::events::Event::TimerExpired),
/// serially, through the dispatch queue.
pub trait TimerPort {
    fn start_timer(&mut self, seconds: u32);
    fn stop_timer(&mut self);
}

/// Everything the service drives.  Blanket-implemented, so an adapter only
/// needs to implement the four ports.
pub trait OvenHardware: DisplayPort + LightPort + HeatingElementPort + TimerPort {}

impl<T: DisplayPort + LightPort + HeatingElementPort + TimerPort> OvenHardware for T {}

// ───────────────────────────────────────────────────────────────
// Output port (simulated peripherals → console)
// ───────────────────────────────────────────────────────────────

/// Line-oriented text output used by the simulated peripherals.
pub trait OutputPort {
    fn output_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists oven configuration.
///
/// Implementations MUST validate before persisting and after loading.
/// Invalid ranges are rejected with [`ConfigError::ValidationFailed`],
/// not silently clamped.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    fn load(&self) -> Result<OvenConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &OvenConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config failed to deserialize.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
