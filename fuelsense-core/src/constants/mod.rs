//! Constants for FuelSense Core
//!
//! Centralized constants used by the fuel level pipeline. Every numeric
//! default, range and conversion factor lives here so the estimator and the
//! parameter table never disagree.
//!
//! ## Organization
//!
//! - **Filter**: low-pass filter defaults and guard limits
//! - **Params**: parameter defaults and valid ranges
//! - **Time**: clock unit conversions

/// Low-pass filter defaults and guard limits.
pub mod filter;

/// Parameter defaults, ranges and names.
pub mod params;

/// Clock unit conversions.
pub mod time;

pub use filter::{DEFAULT_DIAGNOSTIC_CUTOFF_HZ, MAX_FILTER_DT_S};

pub use params::{
    DEFAULT_CAPACITY, DEFAULT_EMPTY_VOLTAGE, DEFAULT_FILTER_HZ, DEFAULT_PIN,
    DEFAULT_VOLTAGE_MULT, PIN_DISABLED,
};

pub use time::{SECONDS_PER_US, US_PER_SECOND};
