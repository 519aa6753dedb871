//! Shared fixtures for integration tests
//!
//! Provides a scripted analog source and the calibration used by the
//! reference scenarios (empty at 0.5 V, multiplier 0.5, 10 L tank).

#![allow(dead_code)]

use std::collections::VecDeque;

use fuelsense_core::{AnalogSource, FuelLevelConfig};

/// Pin used by every scenario
pub const TEST_PIN: i16 = 14;

/// Tank volume used by every scenario (mL)
pub const TEST_CAPACITY: f32 = 10_000.0;

/// Analog source with a scripted voltage sequence
///
/// Once the script runs out the last voltage repeats. Selection can be
/// failed on demand to simulate a missing or unclaimable channel.
#[derive(Debug, Default)]
pub struct MockAnalog {
    script: VecDeque<f32>,
    current: f32,
    pub fail_select: bool,
    pub selects: usize,
    pub samples: usize,
    pub last_pin: Option<i16>,
}

impl MockAnalog {
    /// Source that always reads `voltage`
    pub fn constant(voltage: f32) -> Self {
        Self {
            current: voltage,
            ..Self::default()
        }
    }

    /// Source that reads `voltages` in order, then holds the last one
    pub fn scripted(voltages: &[f32]) -> Self {
        Self {
            script: voltages.iter().copied().collect(),
            current: voltages.last().copied().unwrap_or(0.0),
            ..Self::default()
        }
    }

    /// Change the held voltage
    pub fn set_voltage(&mut self, voltage: f32) {
        self.script.clear();
        self.current = voltage;
    }
}

impl AnalogSource for MockAnalog {
    fn select_channel(&mut self, pin: i16) -> bool {
        self.selects += 1;
        self.last_pin = Some(pin);
        !self.fail_select
    }

    fn voltage_average(&mut self) -> f32 {
        self.samples += 1;
        self.script.pop_front().unwrap_or(self.current)
    }
}

/// Reference calibration: identity fit, empty 0.5 V, full 2.5 V
pub fn reference_config() -> FuelLevelConfig {
    FuelLevelConfig::default()
        .with_pin(TEST_PIN)
        .with_level_calibration(0.5, 0.5)
        .with_capacity(TEST_CAPACITY)
}

/// Consumed volume expected for a given used voltage under `config`
pub fn expected_consumed(config: &FuelLevelConfig, voltage_used: f32) -> f32 {
    let remaining = (voltage_used - config.empty_voltage) * config.voltage_mult;
    (1.0 - remaining) * config.capacity
}

/// Approximate float comparison
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr, $tol:expr) => {{
        let (a, e): (f32, f32) = ($actual, $expected);
        assert!(
            (a - e).abs() <= $tol,
            "expected {} within {} of {}",
            a,
            $tol,
            e
        );
    }};
}
