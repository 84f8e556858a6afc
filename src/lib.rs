//! Microwave oven control core.
//!
//! Exposes the pure-logic modules (state machine, cook controller,
//! service) together with the simulated and `embedded-hal` drivers and
//! the adapters the host binary wires up.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
