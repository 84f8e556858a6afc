//! `embedded-hal` backed light and heating element.
//!
//! For boards where the lamp sits on a GPIO and the magnetron driver takes
//! an enable line plus a PWM power reference.  Both implement the same
//! ports as the console simulation, so the service does not care which is
//! wired in.
//!
//! Heater power maps linearly onto duty: `watts / max_power_watts`.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::{error, warn};

use crate::app::ports::{HeatingElementPort, LightPort};
use crate::error::ActuatorError;

/// Lamp on a single active-high output.
pub struct HalLight<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> HalLight<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> LightPort for HalLight<P> {
    fn light_on(&mut self) {
        if self.pin.set_high().is_err() {
            error!("light: GPIO set_high failed");
            return;
        }
        self.on = true;
    }

    fn light_off(&mut self) {
        if self.pin.set_low().is_err() {
            error!("light: GPIO set_low failed");
            return;
        }
        self.on = false;
    }
}

/// Heating element behind an enable line and a PWM power reference.
pub struct HalHeatingElement<EN: OutputPin, PWM: SetDutyCycle> {
    enable: EN,
    pwm: PWM,
    max_power_watts: u32,
    watts: Option<u32>,
}

impl<EN: OutputPin, PWM: SetDutyCycle> HalHeatingElement<EN, PWM> {
    pub fn new(enable: EN, pwm: PWM, max_power_watts: u32) -> Self {
        Self {
            enable,
            pwm,
            max_power_watts,
            watts: None,
        }
    }

    /// Power currently applied, if on.
    pub fn power_watts(&self) -> Option<u32> {
        self.watts
    }

    pub fn release(self) -> (EN, PWM) {
        (self.enable, self.pwm)
    }

    fn duty_percent(&self, watts: u32) -> u8 {
        let pct = u64::from(watts) * 100 / u64::from(self.max_power_watts.max(1));
        pct.clamp(1, 100) as u8
    }
}

impl<EN: OutputPin, PWM: SetDutyCycle> HeatingElementPort for HalHeatingElement<EN, PWM> {
    fn heater_on(&mut self, watts: u32) -> Result<(), ActuatorError> {
        if watts == 0 || watts > self.max_power_watts {
            return Err(ActuatorError::InvalidPowerLevel(watts));
        }
        if self.watts.is_some() {
            return Err(ActuatorError::AlreadyOn);
        }

        let pct = self.duty_percent(watts);
        self.pwm
            .set_duty_cycle_percent(pct)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        if self.enable.set_high().is_err() {
            // Power reference back to zero before reporting.
            let _ = self.pwm.set_duty_cycle_fully_off();
            return Err(ActuatorError::GpioWriteFailed);
        }
        self.watts = Some(watts);
        Ok(())
    }

    /// Off only once the enable line is low; a failed write leaves the
    /// heater reported on.
    fn heater_off(&mut self) {
        if self.pwm.set_duty_cycle_fully_off().is_err() {
            warn!("heater: PWM fully-off write failed");
        }
        if self.enable.set_low().is_err() {
            error!("heater: enable set_low failed, heater may still be energised");
            return;
        }
        self.watts = None;
    }
}
