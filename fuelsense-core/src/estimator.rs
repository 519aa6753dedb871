//! Fuel Level Estimator
//!
//! Runs one read cycle per call and publishes the result into the shared
//! [`MonitorState`].
//!
//! ## Read Cycle
//!
//! ```text
//! select pin ──fail──▶ healthy = false, nothing else touched
//!     │
//!     ▼
//! raw = averaged pin voltage
//! calibrated = c3·raw³ + c2·raw² + c1·raw + c0
//! filtered = low-pass(calibrated, dt)
//! used = filtered if FL_FLTR >= 0 else calibrated
//! fuel_level_ratio = (used - FL_VLT_MIN) · FL_V_MULT      remaining share
//! used_ratio = 1 - fuel_level_ratio                        consumed share
//! consumed = used_ratio · CAPACITY
//! ```
//!
//! The ratios are deliberately left unclamped: a drifting sender or a loose
//! calibration shows up as a level above full or below empty, and deciding
//! what to do with that belongs to whoever consumes the state.
//!
//! ## Timing
//!
//! `dt` is measured from the last *successful* cycle with wrapping 32-bit
//! arithmetic. The first successful cycle has no baseline, so it runs with
//! `dt = 0` and the filter seeds itself from that sample.
//!
//! ## Example
//!
//! ```rust
//! use fuelsense_core::{AnalogSource, FuelLevelConfig, FuelLevelEstimator, MockClock};
//!
//! struct Sender(f32);
//!
//! impl AnalogSource for Sender {
//!     fn select_channel(&mut self, _pin: i16) -> bool { true }
//!     fn voltage_average(&mut self) -> f32 { self.0 }
//! }
//!
//! let config = FuelLevelConfig::default()
//!     .with_pin(14)
//!     .with_level_points(0.5, 2.5)
//!     .with_capacity(10_000.0);
//! let clock = MockClock::new(0);
//! let mut estimator = FuelLevelEstimator::new(config, Sender(2.5), &clock);
//!
//! estimator.read();
//! assert!(estimator.state().healthy);
//! assert_eq!(estimator.state().consumed_mah(), 0.0); // full tank
//! ```

use crate::{
    config::FuelLevelConfig,
    filter::LowPassFilter,
    state::{ConsumedCapacity, MonitorState},
    time::{elapsed_micros, micros_to_seconds, MicrosClock},
    traits::{AnalogSource, MonitorBackend},
};

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// Every intermediate value of one successful cycle
///
/// Handy for tuning the filter and the fit: it shows how far the used
/// voltage sits from the raw pin reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// Microseconds since the previous successful cycle (0 on the first)
    pub dt_us: u32,
    /// Averaged pin voltage
    pub raw_voltage: f32,
    /// Voltage after the polynomial fit
    pub calibrated_voltage: f32,
    /// Calibrated voltage after the low-pass filter
    pub filtered_voltage: f32,
    /// Voltage the level was computed from
    pub voltage_used: f32,
    /// Remaining share of the tank, unclamped
    pub fuel_level_ratio: f32,
    /// Consumed share of the tank, `1 - fuel_level_ratio`
    pub used_ratio: f32,
    /// `used_ratio · capacity`
    pub consumed: ConsumedCapacity,
}

/// Analog fuel level sensor presented as a battery-monitor backend
pub struct FuelLevelEstimator<A, C> {
    config: FuelLevelConfig,
    analog: A,
    clock: C,
    filter: LowPassFilter,
    state: MonitorState,
    last_report: Option<CycleReport>,
    logged_health: Option<bool>,
}

impl<A: AnalogSource, C: MicrosClock> FuelLevelEstimator<A, C> {
    /// Build an estimator around an analog source and a clock
    ///
    /// The filter cutoff is taken from `config` here and never re-read, so a
    /// changed `FL_FLTR` needs a new estimator.
    pub fn new(config: FuelLevelConfig, analog: A, clock: C) -> Self {
        Self {
            filter: LowPassFilter::new(config.filter_cutoff_hz()),
            config,
            analog,
            clock,
            state: MonitorState::default(),
            last_report: None,
            logged_health: None,
        }
    }

    /// Run one read cycle
    ///
    /// Does nothing while the pin is disabled. If the channel cannot be
    /// selected only `healthy` is cleared and the previous values stay as
    /// the last known good snapshot.
    pub fn read(&mut self) {
        if !self.config.is_enabled() {
            return;
        }

        if !self.analog.select_channel(self.config.pin) {
            self.state.healthy = false;
            self.log_health(false);
            return;
        }
        self.log_health(true);

        let now = self.clock.now_micros();
        let dt_us = match self.state.last_time_micros {
            Some(last) => elapsed_micros(last, now),
            None => 0,
        };

        let raw_voltage = self.analog.voltage_average();
        let calibrated_voltage = self.config.fit.evaluate(raw_voltage);
        let filtered_voltage = self.filter.apply(calibrated_voltage, micros_to_seconds(dt_us));

        let voltage_used = if self.config.filter_enabled() {
            filtered_voltage
        } else {
            calibrated_voltage
        };

        let fuel_level_ratio = (voltage_used - self.config.empty_voltage) * self.config.voltage_mult;
        let used_ratio = 1.0 - fuel_level_ratio;
        let consumed = ConsumedCapacity::new(used_ratio * self.config.capacity);

        self.state = MonitorState {
            healthy: true,
            voltage: filtered_voltage,
            current_amps: 0.0,
            consumed,
            last_time_micros: Some(now),
        };

        self.last_report = Some(CycleReport {
            dt_us,
            raw_voltage,
            calibrated_voltage,
            filtered_voltage,
            voltage_used,
            fuel_level_ratio,
            used_ratio,
            consumed,
        });

        log_trace!(
            "fuel level: raw {}V used {}V level {} consumed {}",
            raw_voltage,
            voltage_used,
            fuel_level_ratio,
            consumed.volume()
        );
    }

    /// Shared state record
    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Configuration the estimator was built with
    pub fn config(&self) -> &FuelLevelConfig {
        &self.config
    }

    /// Intermediate values of the last successful cycle
    pub fn last_report(&self) -> Option<&CycleReport> {
        self.last_report.as_ref()
    }

    /// A sensor pin is configured
    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Cutoff the internal filter is running at
    pub fn filter_cutoff_hz(&self) -> f32 {
        self.filter.cutoff_frequency()
    }

    /// Injected analog source
    pub fn analog(&self) -> &A {
        &self.analog
    }

    /// Injected analog source, mutably
    pub fn analog_mut(&mut self) -> &mut A {
        &mut self.analog
    }

    /// Log health changes once per transition rather than every cycle
    fn log_health(&mut self, healthy: bool) {
        if self.logged_health == Some(healthy) {
            return;
        }
        if healthy {
            log_info!("fuel level sensor on pin {} online", self.config.pin);
        } else {
            log_warn!("fuel level sensor: cannot select pin {}", self.config.pin);
        }
        self.logged_health = Some(healthy);
    }
}

impl<A: AnalogSource, C: MicrosClock> MonitorBackend for FuelLevelEstimator<A, C> {
    fn read(&mut self) {
        FuelLevelEstimator::read(self);
    }

    fn state(&self) -> &MonitorState {
        &self.state
    }

    fn has_current(&self) -> bool {
        false
    }

    fn has_consumed_energy(&self) -> bool {
        true
    }

    fn capacity(&self) -> f32 {
        self.config.capacity
    }
}
