//! Integration tests for the fuel level read cycle
//!
//! Drives `FuelLevelEstimator` through a scripted analog source and a mock
//! clock, covering:
//! - Full and empty tank reference points
//! - Health handling when the channel cannot be selected
//! - Filter bypass when `FL_FLTR` is negative
//! - Timing across clock wraparound
//! - Unclamped and degenerate calibrations

#[macro_use]
mod common;

use fuelsense_core::{
    FuelLevelEstimator, MockClock, MonitorBackend, MonitorState, PolynomialFit,
};
use proptest::prelude::*;

use common::{expected_consumed, reference_config, MockAnalog, TEST_CAPACITY, TEST_PIN};

/// 10 Hz scheduler tick
const TICK_US: u32 = 100_000;

#[test]
fn full_tank_reports_zero_consumed() {
    let clock = MockClock::new(5_000);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(2.5), &clock);

    est.read();

    let state = est.state();
    assert!(state.healthy);
    assert_eq!(state.voltage, 2.5);
    assert_eq!(state.consumed_mah(), 0.0);
    assert_eq!(state.consumed_wh(), 0.0);
    assert_eq!(state.current_amps, 0.0);
    assert_eq!(state.last_time_micros, Some(5_000));
    assert_eq!(est.analog().last_pin, Some(TEST_PIN));
}

#[test]
fn empty_tank_reports_full_capacity() {
    let clock = MockClock::new(0);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(0.5), &clock);

    est.read();

    assert_eq!(est.state().consumed_mah(), TEST_CAPACITY);
    assert_eq!(est.state().consumed_wh(), TEST_CAPACITY);
}

#[test]
fn failed_selection_keeps_last_good_snapshot() {
    let clock = MockClock::new(0);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(1.5), &clock);

    est.read();
    let before = *est.state();
    assert!(before.healthy);

    est.analog_mut().fail_select = true;
    est.analog_mut().set_voltage(0.7);
    clock.advance(TICK_US);
    est.read();

    let after = *est.state();
    assert!(!after.healthy);
    assert_eq!(after.voltage, before.voltage);
    assert_eq!(after.consumed_mah(), before.consumed_mah());
    assert_eq!(after.consumed_wh(), before.consumed_wh());
    assert_eq!(after.current_amps, before.current_amps);
    assert_eq!(after.last_time_micros, before.last_time_micros);
    assert_eq!(est.analog().samples, 1, "failed cycle must not sample");
}

#[test]
fn health_recovers_on_next_successful_selection() {
    let clock = MockClock::new(0);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(1.5), &clock);

    est.read();
    est.analog_mut().fail_select = true;
    for _ in 0..3 {
        clock.advance(TICK_US);
        est.read();
        assert!(!est.state().healthy);
    }

    est.analog_mut().fail_select = false;
    clock.advance(TICK_US);
    est.read();

    assert!(est.state().healthy);
    // dt spans the failed cycles back to the last good one
    assert_eq!(est.last_report().unwrap().dt_us, 4 * TICK_US);
    assert_eq!(est.state().last_time_micros, Some(4 * TICK_US));
}

#[test]
fn unhealthy_from_start_leaves_record_empty() {
    let clock = MockClock::new(0);
    let mut analog = MockAnalog::constant(1.5);
    analog.fail_select = true;
    let mut est = FuelLevelEstimator::new(reference_config(), analog, &clock);

    est.read();

    assert_eq!(*est.state(), MonitorState::default());
    assert_eq!(est.capacity_remaining_pct(), None);
}

#[test]
fn disabled_pin_is_inert() {
    let clock = MockClock::new(0);
    let config = reference_config().with_pin(-1);
    let mut est = FuelLevelEstimator::new(config, MockAnalog::constant(1.5), &clock);

    for _ in 0..5 {
        clock.advance(TICK_US);
        est.read();
    }

    assert_eq!(est.analog().selects, 0);
    assert_eq!(est.analog().samples, 0);
    assert_eq!(*est.state(), MonitorState::default());
}

#[test]
fn negative_cutoff_uses_unfiltered_voltage() {
    let clock = MockClock::new(0);
    let config = reference_config().with_filter_hz(-1.0);
    let mut est = FuelLevelEstimator::new(config, MockAnalog::scripted(&[1.0, 2.0]), &clock);

    est.read();
    clock.advance(TICK_US);
    est.read();

    let report = *est.last_report().unwrap();
    assert_eq!(report.calibrated_voltage, 2.0);
    assert_eq!(report.voltage_used, 2.0);
    // Diagnostic field still carries the smoothed trace
    assert!(est.state().voltage > 1.0 && est.state().voltage < 2.0);
    assert_eq!(est.state().voltage, report.filtered_voltage);
    assert_close!(est.state().consumed_mah(), expected_consumed(&config, 2.0), 1e-3);
}

#[test]
fn positive_cutoff_uses_filtered_voltage() {
    let clock = MockClock::new(0);
    let config = reference_config().with_filter_hz(0.3);
    let mut est = FuelLevelEstimator::new(config, MockAnalog::scripted(&[1.0, 2.0]), &clock);

    est.read();
    clock.advance(TICK_US);
    est.read();

    let report = *est.last_report().unwrap();
    assert_eq!(report.voltage_used, report.filtered_voltage);
    assert!(report.voltage_used < 2.0);
    assert_close!(
        est.state().consumed_mah(),
        expected_consumed(&config, report.filtered_voltage),
        1e-3
    );
}

#[test]
fn slosh_step_settles_monotonically() {
    let clock = MockClock::new(0);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(2.5), &clock);
    est.read();

    est.analog_mut().set_voltage(1.5);
    let mut last_voltage = est.state().voltage;
    let mut last_consumed = est.state().consumed_mah();
    for _ in 0..100 {
        clock.advance(TICK_US);
        est.read();
        let state = est.state();
        assert!(state.voltage <= last_voltage);
        assert!(state.consumed_mah() >= last_consumed);
        last_voltage = state.voltage;
        last_consumed = state.consumed_mah();
    }

    assert_close!(last_voltage, 1.5, 1e-3);
    assert_close!(last_consumed, expected_consumed(&reference_config(), 1.5), 1.0);
}

#[test]
fn dt_survives_clock_wraparound() {
    let clock = MockClock::new(u32::MAX - 50_000);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(1.5), &clock);

    est.read();
    clock.advance(TICK_US);
    est.read();

    assert_eq!(est.last_report().unwrap().dt_us, TICK_US);
    assert_eq!(est.state().last_time_micros, Some(TICK_US - 50_001));
}

#[test]
fn calibration_fit_applies_before_level_math() {
    let clock = MockClock::new(0);
    // Sender reads half the calibrated voltage
    let config = reference_config().with_fit(PolynomialFit::new(0.0, 0.0, 2.0, 0.0));
    let mut est = FuelLevelEstimator::new(config, MockAnalog::constant(1.25), &clock);

    est.read();

    let report = est.last_report().unwrap();
    assert_eq!(report.raw_voltage, 1.25);
    assert_eq!(report.calibrated_voltage, 2.5);
    assert_eq!(est.state().consumed_mah(), 0.0);
}

#[test]
fn out_of_band_levels_are_not_clamped() {
    let clock = MockClock::new(0);
    let mut est = FuelLevelEstimator::new(reference_config(), MockAnalog::constant(3.0), &clock);

    est.read();

    let report = est.last_report().unwrap();
    assert_eq!(report.fuel_level_ratio, 1.25);
    assert_eq!(report.used_ratio, -0.25);
    assert_eq!(est.state().consumed_mah(), -2500.0);
    // Consumer view is clamped, the record is not
    assert_eq!(est.capacity_remaining_pct(), Some(100));
}

#[test]
fn nan_first_sample_is_not_published_as_a_reading() {
    let clock = MockClock::new(0);
    let mut est = FuelLevelEstimator::new(
        reference_config(),
        MockAnalog::scripted(&[f32::NAN, 1.5]),
        &clock,
    );

    est.read();

    let report = *est.last_report().unwrap();
    assert!(report.filtered_voltage.is_nan());
    assert!(report.voltage_used.is_nan());
    assert!(est.state().voltage.is_nan());
    assert!(est.state().consumed_mah().is_nan());
    assert_eq!(est.capacity_remaining_pct(), None);

    // The first finite sample seeds the filter
    clock.advance(TICK_US);
    est.read();

    assert_eq!(est.state().voltage, 1.5);
    assert_eq!(est.state().consumed_mah(), expected_consumed(&reference_config(), 1.5));
}

#[test]
fn zero_multiplier_is_degenerate_but_safe() {
    let clock = MockClock::new(0);
    let config = reference_config().with_level_calibration(0.5, 0.0);
    let mut est = FuelLevelEstimator::new(config, MockAnalog::constant(1.7), &clock);

    est.read();

    assert!(est.state().healthy);
    assert_eq!(est.state().consumed_mah(), TEST_CAPACITY);
}

proptest! {
    #[test]
    fn every_cycle_keeps_record_invariants(
        voltages in prop::collection::vec(0.0f32..3.3, 1..40),
        ticks in prop::collection::vec(1u32..2_000_000, 40),
        filter_hz in prop_oneof![Just(-1.0f32), 0.0f32..1.0],
    ) {
        let clock = MockClock::new(0);
        let config = reference_config().with_filter_hz(filter_hz);
        let mut est = FuelLevelEstimator::new(config, MockAnalog::scripted(&voltages), &clock);

        let mut last_time = None;
        for tick in ticks.iter().take(voltages.len()) {
            est.read();
            let state = *est.state();
            let report = *est.last_report().unwrap();

            prop_assert!(state.healthy);
            prop_assert_eq!(state.current_amps, 0.0);
            prop_assert_eq!(state.consumed_wh(), state.consumed_mah());
            prop_assert_eq!(report.used_ratio, 1.0 - report.fuel_level_ratio);
            prop_assert_eq!(state.consumed_mah(), report.used_ratio * TEST_CAPACITY);
            prop_assert_eq!(state.voltage, report.filtered_voltage);
            prop_assert_ne!(state.last_time_micros, last_time);

            last_time = state.last_time_micros;
            clock.advance(*tick);
        }
    }
}
