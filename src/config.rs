//! Oven configuration parameters
//!
//! All tunable parameters for the oven controller.
//! Values can be overridden from a JSON file via [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core oven configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvenConfig {
    // --- Power selection ---
    /// First power level and the wrap target (W)
    pub min_power_watts: u32,
    /// Last power level before wrapping (W)
    pub max_power_watts: u32,
    /// Increment per power-button press (W)
    pub power_step_watts: u32,

    // --- Timing ---
    /// Period of the simulated cook timer (milliseconds)
    pub tick_interval_ms: u64,

    // --- Heating element ---
    /// Highest power the heating element accepts (W)
    pub heater_max_power_watts: u32,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            // Power: 50..=700 in 50 W steps, 14 levels
            min_power_watts: 50,
            max_power_watts: 700,
            power_step_watts: 50,

            // 1 Hz
            tick_interval_ms: 1000,

            heater_max_power_watts: 700,
        }
    }
}

impl OvenConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.power_step_watts == 0 {
            return Err(ConfigError::ValidationFailed("power_step_watts must be > 0"));
        }
        if self.min_power_watts == 0 {
            return Err(ConfigError::ValidationFailed("min_power_watts must be > 0"));
        }
        if self.min_power_watts > self.max_power_watts {
            return Err(ConfigError::ValidationFailed(
                "min_power_watts must not exceed max_power_watts",
            ));
        }
        if (self.max_power_watts - self.min_power_watts) % self.power_step_watts != 0 {
            return Err(ConfigError::ValidationFailed(
                "power range must be a whole number of steps",
            ));
        }
        if self.max_power_watts > self.heater_max_power_watts {
            return Err(ConfigError::ValidationFailed(
                "max_power_watts exceeds heater_max_power_watts",
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// Number of selectable power levels.
    pub fn power_levels(&self) -> u32 {
        (self.max_power_watts - self.min_power_watts) / self.power_step_watts + 1
    }

    /// Power after one more press, wrapping back to the minimum past the top.
    pub fn next_power(&self, watts: u32) -> u32 {
        match watts.checked_add(self.power_step_watts) {
            Some(next) if next <= self.max_power_watts => next,
            _ => self.min_power_watts,
        }
    }
}
