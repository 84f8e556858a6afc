//! Fuzz target: `OvenService` event dispatch
//!
//! Each input byte becomes one panel input or one elapsed timer second,
//! driven through the console hardware adapter exactly as the host
//! binary does.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - No faults: a correctly wired oven never reports one
//! - The heating element is on exactly while the UI is `Cooking`
//! - The heating element is never on with the door open
//!
//! cargo fuzz run fuzz_event_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use microwave::adapters::console::ConsoleHardware;
use microwave::adapters::log_sink::LogEventSink;
use microwave::app::ports::OutputPort;
use microwave::app::service::OvenService;
use microwave::config::OvenConfig;
use microwave::drivers::heating_element::HeaterState;
use microwave::events::Event;
use microwave::fsm::StateId;

struct Discard;

impl OutputPort for Discard {
    fn output_line(&mut self, _line: &str) {}
}

fuzz_target!(|data: &[u8]| {
    let config = OvenConfig::default();
    let mut hw = ConsoleHardware::new(Discard, &config);
    let mut sink = LogEventSink::new();
    let mut app = OvenService::new(config);
    app.start(&mut sink);

    for &byte in data {
        let inputs: heapless::Vec<Event, 2> = match byte % 8 {
            0 => heapless::Vec::from_slice(&[Event::PowerPressed]).unwrap(),
            1 => heapless::Vec::from_slice(&[Event::TimePressed]).unwrap(),
            2 => heapless::Vec::from_slice(&[Event::StartCancelPressed]).unwrap(),
            3 => heapless::Vec::from_slice(&[Event::DoorOpened]).unwrap(),
            4 => heapless::Vec::from_slice(&[Event::DoorClosed]).unwrap(),
            _ => hw.elapse_second(),
        };

        for event in inputs {
            app.handle(event, &mut hw, &mut sink)
                .expect("correct wiring never faults");
        }

        let heating = hw.heater_state() != HeaterState::Off;
        assert_eq!(heating, app.state() == StateId::Cooking);
        assert!(!(heating && app.door_open()), "heater on with door open");
    }
});
