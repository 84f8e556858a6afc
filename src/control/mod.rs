//! Actuator control loops.

pub mod cook;
