//! Integration tests for the OvenService → FSM → cook controller pipeline.
//!
//! Drive the service the way the host binary does: panel events in, timer
//! seconds from the mock's countdown, and assert on the recorded port
//! calls.

use crate::mock_hw::{HwCall, LogSink, MockHardware};

use microwave::app::events::AppEvent;
use microwave::app::service::OvenService;
use microwave::config::OvenConfig;
use microwave::control::cook::CookController;
use microwave::error::{ContractViolation, Error};
use microwave::events::Event;
use microwave::fsm::{OvenState, StateId};

fn make_app() -> (OvenService, MockHardware, LogSink) {
    let mut app = OvenService::new(OvenConfig::default());
    let hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

fn press(app: &mut OvenService, hw: &mut MockHardware, sink: &mut LogSink, events: &[Event]) {
    for &event in events {
        app.handle(event, hw, sink).unwrap();
    }
}

fn run_seconds(app: &mut OvenService, hw: &mut MockHardware, sink: &mut LogSink, secs: u32) {
    for _ in 0..secs {
        for event in hw.elapse_second() {
            app.handle(event, hw, sink).unwrap();
        }
    }
}

// ── One-minute cook, start to finish ──────────────────────────

#[test]
fn one_minute_at_50w_runs_to_completion() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::PowerPressed, Event::TimePressed, Event::StartCancelPressed],
    );

    assert_eq!(
        hw.calls,
        [
            HwCall::ShowPower(50),
            HwCall::ShowTime(1, 0),
            HwCall::LightOn,
            HwCall::HeaterOn(50),
            HwCall::TimerStart(60),
        ]
    );
    assert_eq!(app.state(), StateId::Cooking);
    assert_eq!(
        app.oven_state(),
        OvenState::Cooking {
            watts: 50,
            seconds_total: 60
        }
    );

    run_seconds(&mut app, &mut hw, &mut sink, 59);
    assert_eq!(hw.last_call(), Some(&HwCall::ShowTime(0, 1)));
    assert!(hw.heater_is_on());
    assert_eq!(app.cook_session().map(|s| s.remaining_secs), Some(1));

    hw.clear();
    run_seconds(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(
        hw.calls,
        [
            HwCall::HeaterOff,
            HwCall::TimerStop,
            HwCall::LightOff,
            HwCall::ClearDisplay,
        ]
    );
    assert_eq!(app.state(), StateId::Ready);
    assert!(app.cook_session().is_none());
    assert!(sink
        .events
        .contains(&AppEvent::CookingFinished { power_watts: 50 }));
    assert_eq!(app.status().sessions_completed, 1);
}

#[test]
fn countdown_shows_minutes_and_seconds() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[
            Event::PowerPressed,
            Event::TimePressed,
            Event::TimePressed,
            Event::StartCancelPressed,
        ],
    );
    run_seconds(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(hw.last_call(), Some(&HwCall::ShowTime(1, 59)));
    run_seconds(&mut app, &mut hw, &mut sink, 60);
    assert_eq!(hw.last_call(), Some(&HwCall::ShowTime(0, 59)));
}

// ── Power selection ───────────────────────────────────────────

#[test]
fn fourteen_presses_show_700w_and_fifteenth_wraps() {
    let (mut app, mut hw, mut sink) = make_app();
    press(&mut app, &mut hw, &mut sink, &[Event::PowerPressed; 14]);
    assert_eq!(hw.last_display(), Some(HwCall::ShowPower(700)));

    press(&mut app, &mut hw, &mut sink, &[Event::PowerPressed]);
    assert_eq!(hw.last_display(), Some(HwCall::ShowPower(50)));
    assert_eq!(app.oven_state(), OvenState::SettingPower { watts: 50 });
}

#[test]
fn cook_uses_selected_power_and_minutes() {
    let (mut app, mut hw, mut sink) = make_app();
    press(&mut app, &mut hw, &mut sink, &[Event::PowerPressed; 4]);
    press(&mut app, &mut hw, &mut sink, &[Event::TimePressed; 3]);
    assert_eq!(hw.last_display(), Some(HwCall::ShowTime(3, 0)));

    press(&mut app, &mut hw, &mut sink, &[Event::StartCancelPressed]);
    assert_eq!(hw.count(HwCall::HeaterOn(200)), 1);
    assert_eq!(hw.count(HwCall::TimerStart(180)), 1);
    assert!(sink.events.contains(&AppEvent::CookingStarted {
        power_watts: 200,
        seconds: 180
    }));
}

// ── Door handling ─────────────────────────────────────────────

#[test]
fn door_in_ready_toggles_light_only() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::DoorOpened, Event::DoorClosed],
    );
    assert_eq!(hw.calls, [HwCall::LightOn, HwCall::LightOff]);
    assert!(hw.last_display().is_none());
    assert_eq!(app.state(), StateId::Ready);
}

#[test]
fn duplicate_door_events_are_no_ops() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[
            Event::DoorClosed,
            Event::DoorOpened,
            Event::DoorOpened,
            Event::DoorClosed,
            Event::DoorClosed,
        ],
    );
    assert_eq!(hw.calls, [HwCall::LightOn, HwCall::LightOff]);
}

#[test]
fn buttons_ignored_while_door_open() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[
            Event::DoorOpened,
            Event::PowerPressed,
            Event::TimePressed,
            Event::StartCancelPressed,
        ],
    );
    assert_eq!(hw.calls, [HwCall::LightOn]);
    assert_eq!(app.state(), StateId::Ready);
    assert!(app.door_open());
}

#[test]
fn door_during_setup_clears_and_lights() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::PowerPressed, Event::TimePressed, Event::DoorOpened],
    );
    assert_eq!(
        &hw.calls[2..],
        [HwCall::ClearDisplay, HwCall::LightOn]
    );
    assert_eq!(app.oven_state(), OvenState::Ready);
    assert!(hw.heater_on_count() == 0);
}

#[test]
fn door_during_cooking_stops_heater_once() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::PowerPressed, Event::TimePressed, Event::StartCancelPressed],
    );
    run_seconds(&mut app, &mut hw, &mut sink, 10);
    hw.clear();
    press(&mut app, &mut hw, &mut sink, &[Event::DoorOpened]);

    // Stop only: the light stays on and the display is left alone.
    assert_eq!(hw.calls, [HwCall::HeaterOff, HwCall::TimerStop]);
    assert_eq!(hw.count(HwCall::HeaterOff), 1);
    assert!(!hw.timer_running());
    assert!(hw.light_is_on());
    assert_eq!(app.state(), StateId::Ready);
    assert!(sink
        .events
        .contains(&AppEvent::CookingStopped { remaining_secs: 50 }));

    // Nothing more happens once the session is gone.
    run_seconds(&mut app, &mut hw, &mut sink, 60);
    assert_eq!(hw.count(HwCall::HeaterOff), 1);

    press(&mut app, &mut hw, &mut sink, &[Event::DoorClosed]);
    assert_eq!(hw.last_call(), Some(&HwCall::LightOff));
}

// ── Cancel ────────────────────────────────────────────────────

#[test]
fn cancel_during_setup_clears_display() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::PowerPressed, Event::StartCancelPressed],
    );
    assert_eq!(hw.last_call(), Some(&HwCall::ClearDisplay));
    assert_eq!(app.state(), StateId::Ready);
}

#[test]
fn cancel_during_cooking_stops_heater_once() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[
            Event::PowerPressed,
            Event::TimePressed,
            Event::StartCancelPressed,
            Event::StartCancelPressed,
            Event::StartCancelPressed,
        ],
    );
    assert_eq!(hw.count(HwCall::HeaterOff), 1);
    assert!(!hw.heater_is_on());
    assert!(!hw.light_is_on());
    assert_eq!(hw.last_display(), Some(HwCall::ClearDisplay));
    assert_eq!(app.status().sessions_cancelled, 1);
}

#[test]
fn stop_twice_turns_heater_off_once() {
    let mut hw = MockHardware::new();
    let mut cook = CookController::new();
    cook.start_cooking(300, 120, &mut hw).unwrap();
    assert!(cook.stop(&mut hw).is_some());
    assert!(cook.stop(&mut hw).is_none());
    assert_eq!(hw.count(HwCall::HeaterOff), 1);
    assert_eq!(hw.count(HwCall::TimerStop), 1);
}

// ── Round trip ────────────────────────────────────────────────

#[test]
fn full_cycle_returns_to_initial_ready() {
    let (mut app, mut hw, mut sink) = make_app();
    let initial = app.oven_state();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::PowerPressed, Event::TimePressed, Event::StartCancelPressed],
    );
    run_seconds(&mut app, &mut hw, &mut sink, 60);

    assert_eq!(app.oven_state(), initial);
    assert!(!hw.light_is_on());
    assert!(!hw.heater_is_on());
    assert!(!hw.timer_running());
    assert_eq!(hw.last_display(), Some(HwCall::ClearDisplay));
    assert_eq!(app.pending_events(), 0);

    // And the next session starts from scratch.
    hw.clear();
    press(&mut app, &mut hw, &mut sink, &[Event::PowerPressed]);
    assert_eq!(hw.calls, [HwCall::ShowPower(50)]);
}

// ── Ignored events and contract breaches ──────────────────────

#[test]
fn meaningless_events_are_silently_ignored() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[
            Event::TimePressed,
            Event::StartCancelPressed,
            Event::CookingFinished,
        ],
    );
    assert!(hw.calls.is_empty());
    assert_eq!(app.state(), StateId::Ready);
    assert_eq!(app.status().ignored_events, 3);
    assert_eq!(sink.faults(), 0);
}

#[test]
fn stray_expiry_surfaces_as_fault() {
    let (mut app, mut hw, mut sink) = make_app();
    let err = app
        .handle(Event::TimerExpired, &mut hw, &mut sink)
        .unwrap_err();
    assert_eq!(
        err,
        Error::Contract(ContractViolation::ExpiryWithoutSession)
    );
    assert_eq!(sink.faults(), 1);
    assert!(hw.calls.is_empty());
}

#[test]
fn status_reports_remaining_time() {
    let (mut app, mut hw, mut sink) = make_app();
    press(
        &mut app,
        &mut hw,
        &mut sink,
        &[Event::PowerPressed, Event::TimePressed, Event::StartCancelPressed],
    );
    run_seconds(&mut app, &mut hw, &mut sink, 15);
    let status = app.status();
    assert_eq!(status.remaining_secs, Some(45));
    assert_eq!(status.sessions_started, 1);
    assert!(!status.door_open);
}
