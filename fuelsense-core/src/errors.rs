//! Error Types for Parameter Configuration
//!
//! The read cycle has no error path: a disabled sensor is silently inert and
//! a missing sensor shows up only as `healthy = false` in the monitor state.
//! Errors exist solely for the configuration side, where the parameter store
//! asks whether a named value is acceptable before committing it.
//!
//! Like the rest of the crate these errors are small, `Copy`, and carry only
//! `&'static str` data so they can be returned from `no_std` code without
//! allocating.
//!
//! ```rust
//! use fuelsense_core::{ConfigError, FuelLevelConfig};
//!
//! let mut config = FuelLevelConfig::default();
//! match config.set("FL_FLTR", 2.0) {
//!     Ok(()) => {}
//!     Err(ConfigError::OutOfRange { min, max, .. }) => {
//!         // Reject and tell the ground station the valid range
//!         assert_eq!((min, max), (-1.0, 1.0));
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// No parameter with the requested name exists in the fuel level group
    #[error("Unknown fuel level parameter")]
    UnknownParam,

    /// Value outside the advertised range for the parameter
    #[error("{name} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f32,
        /// Minimum accepted value
        min: f32,
        /// Maximum accepted value
        max: f32,
    },

    /// Value is NaN, infinite, or not representable (e.g. a fractional pin)
    #[error("{name}: invalid value")]
    InvalidValue {
        /// Parameter name
        name: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownParam =>
                defmt::write!(fmt, "Unknown fuel level parameter"),
            Self::OutOfRange { name, value, min, max } =>
                defmt::write!(fmt, "{} = {} outside [{}, {}]", name, value, min, max),
            Self::InvalidValue { name } =>
                defmt::write!(fmt, "{}: invalid value", name),
        }
    }
}
