//! Core fuel level estimation for FuelSense
//!
//! Turns a single analog fuel sender into a battery-monitor backend: the
//! pin voltage goes through a cubic calibration fit and a low-pass filter,
//! then becomes a consumed share of the tank scaled by the tank capacity.
//!
//! Key constraints:
//! - Runs on bare-metal flight controllers (`no_std`)
//! - No heap allocation, bounded constant-time read cycle
//! - Hardware and clock are injected, never global
//!
//! ```no_run
//! use fuelsense_core::{AnalogSource, FuelLevelConfig, FuelLevelEstimator, MockClock};
//!
//! # struct Adc;
//! # impl AnalogSource for Adc {
//! #     fn select_channel(&mut self, _pin: i16) -> bool { true }
//! #     fn voltage_average(&mut self) -> f32 { 1.2 }
//! # }
//! let config = FuelLevelConfig::default().with_pin(14);
//! let clock = MockClock::new(0);
//! let mut estimator = FuelLevelEstimator::new(config, Adc, &clock);
//!
//! // Called by the monitor scheduler, typically at 10 Hz
//! estimator.read();
//! let consumed_ml = estimator.state().consumed_mah();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calibration;
pub mod config;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod filter;
pub mod state;
pub mod time;
pub mod traits;

// Public API
pub use calibration::PolynomialFit;
pub use config::{FuelLevelConfig, ParamId, ParamInfo, PARAMS};
pub use errors::{ConfigError, ConfigResult};
pub use estimator::{CycleReport, FuelLevelEstimator};
pub use filter::LowPassFilter;
pub use state::{ConsumedCapacity, MonitorState};
pub use time::{MicrosClock, Micros, MockClock};
pub use traits::{AnalogSource, MonitorBackend};

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
