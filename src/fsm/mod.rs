//! Function-pointer finite state machine engine for the oven front panel.
//!
//! Classic embedded FSM pattern, driven by events instead of ticks:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateTable                                                  │
//! │  ┌──────────┬───────────┬──────────┬───────────────────────┐ │
//! │  │ StateId  │ on_enter  │ on_exit  │ on_event              │ │
//! │  ├──────────┼───────────┼──────────┼───────────────────────┤ │
//! │  │ Ready    │ fn(ctx)   │ -        │ fn(ctx, ev)->Option<> │ │
//! │  │ SetPower │ fn(ctx)   │ -        │ fn(ctx, ev)->Option<> │ │
//! │  │ SetTime  │ fn(ctx)   │ -        │ fn(ctx, ev)->Option<> │ │
//! │  │ Cooking  │ fn(ctx)   │ fn(ctx)  │ fn(ctx, ev)->Option<> │ │
//! │  └──────────┴───────────┴──────────┴───────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! For each event the engine calls `on_event` for the **current** state.
//! If it returns `Some(next_id)`, the engine runs `on_exit` for the
//! current state, then `on_enter` for the next, and updates the current
//! pointer.  Every event has a defined effect in every state; events a
//! state has no use for are counted and dropped.

pub mod context;
pub mod states;

use context::UiContext;
use log::info;

use crate::events::Event;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all UI states.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Ready = 0,
    SetPower = 1,
    SetTime = 2,
    Cooking = 3,
}

impl StateId {
    /// Total number of states: used to size the table array.
    pub const COUNT: usize = 4;

    /// Convert a table index back to `StateId`.  Panics on out-of-range in
    /// debug builds; returns `Ready` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Ready,
            1 => Self::SetPower,
            2 => Self::SetTime,
            3 => Self::Cooking,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Ready
            }
        }
    }
}

/// The operating state together with the data it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvenState {
    Ready,
    SettingPower { watts: u32 },
    SettingTime { watts: u32, minutes: u32 },
    Cooking { watts: u32, seconds_total: u32 },
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut UiContext);

/// Signature for the per-event handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateEventFn = fn(&mut UiContext, Event) -> Option<StateId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single UI state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_event: StateEventFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    /// Index of the currently active state.
    current: usize,
    /// Events handled since start.
    event_count: u64,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
            event_count: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `handle()`.
    pub fn start(&mut self, ctx: &mut UiContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Feed one event through the current state's handler.
    ///
    /// Returns the new state if a transition happened.
    pub fn handle(&mut self, event: Event, ctx: &mut UiContext) -> Option<StateId> {
        self.event_count += 1;

        let next = (self.table[self.current].on_event)(ctx, event)?;
        self.transition(next, ctx);
        Some(next)
    }

    /// Force an immediate transition (used by the service to recover from
    /// an actuator refusing to start).
    pub fn force_transition(&mut self, next: StateId, ctx: &mut UiContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    /// The current state with its selection data.
    pub fn oven_state(&self, ctx: &UiContext) -> OvenState {
        match self.current_state() {
            StateId::Ready => OvenState::Ready,
            StateId::SetPower => OvenState::SettingPower {
                watts: ctx.power_watts,
            },
            StateId::SetTime => OvenState::SettingTime {
                watts: ctx.power_watts,
                minutes: ctx.minutes,
            },
            StateId::Cooking => OvenState::Cooking {
                watts: ctx.power_watts,
                seconds_total: ctx.cook_seconds(),
            },
        }
    }

    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: StateId, ctx: &mut UiContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
