//! Concrete state handler functions and table builder.
//!
//! Each state is defined by three plain `fn` pointers: no closures, no
//! dynamic dispatch, no heap.  Handlers never touch hardware: they update
//! the [`UiContext`] selection and queue [`Directive`]s.
//!
//! ```text
//!  READY ──[power]──▶ SET_POWER ──[time]──▶ SET_TIME ──[start]──▶ COOKING
//!    ▲                  │  ▲ [power]          │  ▲ [time]             │
//!    │                  │  └────┘             │  └───┘                │
//!    ├──[cancel / door]─┘                     │                       │
//!    ├──[cancel / door]───────────────────────┘                       │
//!    └──────────────[cancel / door / cooking finished]────────────────┘
//!
//!  READY ──[door open]──▶ READY (door open) ──[door close]──▶ READY
//! ```

use super::context::{Directive, UiContext};
use super::{StateDescriptor, StateId};
use crate::events::Event;
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Ready
        StateDescriptor {
            id: StateId::Ready,
            name: "Ready",
            on_enter: Some(ready_enter),
            on_exit: None,
            on_event: ready_event,
        },
        // Index 1: SetPower
        StateDescriptor {
            id: StateId::SetPower,
            name: "SetPower",
            on_enter: Some(set_power_enter),
            on_exit: None,
            on_event: set_power_event,
        },
        // Index 2: SetTime
        StateDescriptor {
            id: StateId::SetTime,
            name: "SetTime",
            on_enter: Some(set_time_enter),
            on_exit: None,
            on_event: set_time_event,
        },
        // Index 3: Cooking
        StateDescriptor {
            id: StateId::Cooking,
            name: "Cooking",
            on_enter: Some(cooking_enter),
            on_exit: Some(cooking_exit),
            on_event: cooking_event,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared edges
// ═══════════════════════════════════════════════════════════════════════════

fn open_door(ctx: &mut UiContext) {
    ctx.door_open = true;
    ctx.emit(Directive::LightOn);
}

fn show_selected_time(ctx: &mut UiContext) {
    ctx.emit(Directive::ShowTime {
        minutes: ctx.minutes,
        seconds: 0,
    });
}

// ═══════════════════════════════════════════════════════════════════════════
//  READY state
// ═══════════════════════════════════════════════════════════════════════════

fn ready_enter(ctx: &mut UiContext) {
    ctx.reset_selection();
}

fn ready_event(ctx: &mut UiContext, event: Event) -> Option<StateId> {
    match event {
        Event::DoorOpened if !ctx.door_open => {
            open_door(ctx);
            None
        }
        Event::DoorClosed if ctx.door_open => {
            ctx.door_open = false;
            ctx.emit(Directive::LightOff);
            None
        }
        // Buttons do nothing with the door open.
        Event::PowerPressed if !ctx.door_open => Some(StateId::SetPower),
        _ => {
            ctx.ignore("Ready", event);
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SET_POWER state: cycling through power levels
// ═══════════════════════════════════════════════════════════════════════════

fn set_power_enter(ctx: &mut UiContext) {
    ctx.power_watts = ctx.config.min_power_watts;
    ctx.emit(Directive::ShowPower(ctx.power_watts));
}

fn set_power_event(ctx: &mut UiContext, event: Event) -> Option<StateId> {
    match event {
        Event::PowerPressed => {
            ctx.power_watts = ctx.config.next_power(ctx.power_watts);
            ctx.emit(Directive::ShowPower(ctx.power_watts));
            None
        }
        Event::TimePressed => Some(StateId::SetTime),
        Event::StartCancelPressed => {
            ctx.emit(Directive::ClearDisplay);
            Some(StateId::Ready)
        }
        Event::DoorOpened => {
            ctx.emit(Directive::ClearDisplay);
            open_door(ctx);
            Some(StateId::Ready)
        }
        _ => {
            ctx.ignore("SetPower", event);
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SET_TIME state: accumulating minutes
// ═══════════════════════════════════════════════════════════════════════════

fn set_time_enter(ctx: &mut UiContext) {
    ctx.minutes = 1;
    show_selected_time(ctx);
}

fn set_time_event(ctx: &mut UiContext, event: Event) -> Option<StateId> {
    match event {
        Event::TimePressed => {
            // No upper bound on accumulated time.
            ctx.minutes = ctx.minutes.saturating_add(1);
            show_selected_time(ctx);
            None
        }
        Event::StartCancelPressed => Some(StateId::Cooking),
        Event::DoorOpened => {
            ctx.emit(Directive::ClearDisplay);
            open_door(ctx);
            Some(StateId::Ready)
        }
        _ => {
            ctx.ignore("SetTime", event);
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOKING state: heater running under the cook controller
// ═══════════════════════════════════════════════════════════════════════════

fn cooking_enter(ctx: &mut UiContext) {
    let seconds = ctx.cook_seconds();
    ctx.emit(Directive::LightOn);
    ctx.emit(Directive::StartCooking {
        power_watts: ctx.power_watts,
        seconds,
    });
    info!("COOKING: {} W for {}s", ctx.power_watts, seconds);
}

fn cooking_exit(ctx: &mut UiContext) {
    info!("COOKING: leaving {} W session", ctx.power_watts);
}

fn cooking_event(ctx: &mut UiContext, event: Event) -> Option<StateId> {
    match event {
        Event::StartCancelPressed => {
            ctx.emit(Directive::StopCooking);
            ctx.emit(Directive::LightOff);
            ctx.emit(Directive::ClearDisplay);
            Some(StateId::Ready)
        }
        Event::DoorOpened => {
            // Light is already on from cooking; it stays on while the door is
            // open.  The display keeps the last countdown value.
            ctx.door_open = true;
            ctx.emit(Directive::StopCooking);
            Some(StateId::Ready)
        }
        // The controller has already shut itself down; no StopCooking here.
        Event::CookingFinished => {
            ctx.emit(Directive::LightOff);
            ctx.emit(Directive::ClearDisplay);
            Some(StateId::Ready)
        }
        _ => {
            ctx.ignore("Cooking", event);
            None
        }
    }
}
