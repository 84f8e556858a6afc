//! Fuzz target: `OvenConfig` JSON parsing and validation
//!
//! Arbitrary bytes are parsed as a config document.  Anything that parses
//! and validates must be usable by the power-selection logic.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - A validated config cycles power within `min..=max` and wraps to `min`
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use microwave::config::OvenConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<OvenConfig>(data) else {
        return;
    };
    if config.validate().is_err() {
        return;
    }

    let levels = config.power_levels();
    assert!(levels >= 1);

    let mut watts = config.min_power_watts;
    for _ in 0..levels.min(1024) {
        assert!((config.min_power_watts..=config.max_power_watts).contains(&watts));
        watts = config.next_power(watts);
    }
    if levels <= 1024 {
        assert_eq!(watts, config.min_power_watts);
    }
});
