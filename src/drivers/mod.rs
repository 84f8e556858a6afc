//! Actuator and input drivers.
//!
//! The console simulation drivers render to an [`OutputPort`]; the
//! [`hal`] drivers sit on `embedded-hal` pins instead.
//!
//! [`OutputPort`]: crate::app::ports::OutputPort

pub mod display;
pub mod hal;
pub mod heating_element;
pub mod light;
pub mod panel;
pub mod timer;
