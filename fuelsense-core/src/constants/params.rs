//! Parameter Defaults and Ranges
//!
//! Defaults and limits for the fuel level parameter group. Ranges are the
//! ones advertised to ground stations; they are enforced by
//! [`FuelLevelConfig::set`](crate::config::FuelLevelConfig::set), never by
//! the estimator.

// ===== SENSOR PIN =====

/// Pin value meaning "no fuel level sensor fitted".
pub const PIN_DISABLED: i16 = -1;

/// Default analog pin (`FL_PIN`). Disabled until the user picks a port.
pub const DEFAULT_PIN: i16 = PIN_DISABLED;

/// Highest analog pin number accepted (`FL_PIN`).
///
/// Board pin numbers top out at 103 (PX4-v1 uses 100); 127 leaves headroom
/// without accepting garbage.
pub const PIN_MAX: i16 = 127;

// ===== LEVEL CALIBRATION =====

/// Sender voltage seen with an empty tank (`FL_VLT_MIN`, volts).
pub const DEFAULT_EMPTY_VOLTAGE: f32 = 0.5;

/// Voltage multiplier (`FL_V_MULT`), calculated by the user as
/// `1 / (full_voltage - empty_voltage)`.
pub const DEFAULT_VOLTAGE_MULT: f32 = 0.5;

/// Valid range for `FL_VLT_MIN` and `FL_V_MULT`.
pub const LEVEL_CAL_MIN: f32 = 0.01;

/// Valid range for `FL_VLT_MIN` and `FL_V_MULT`.
pub const LEVEL_CAL_MAX: f32 = 10.0;

// ===== FILTER =====

/// Level filter cutoff (`FL_FLTR`, Hz).
///
/// Suggested values are 0.2 to 0.5 Hz, slow enough to hide tank slosh.
pub const DEFAULT_FILTER_HZ: f32 = 0.3;

/// Lowest accepted `FL_FLTR`. Any negative value disables level filtering.
pub const FILTER_HZ_MIN: f32 = -1.0;

/// Highest accepted `FL_FLTR`.
pub const FILTER_HZ_MAX: f32 = 1.0;

// ===== POLYNOMIAL FIT =====

/// Lower bound for every polynomial fit term (`FL_FF`, `FL_FS`, `FL_FT`, `FL_OFF`).
pub const FIT_TERM_MIN: f32 = -10.0;

/// Upper bound for every polynomial fit term.
pub const FIT_TERM_MAX: f32 = 10.0;

// ===== CAPACITY =====

/// Default tank capacity (`CAPACITY`).
///
/// Shared with the battery pack capacity parameter, so it starts at the
/// pack default and is reinterpreted as tank volume (typically millilitres).
pub const DEFAULT_CAPACITY: f32 = 3300.0;

/// Smallest accepted capacity.
pub const CAPACITY_MIN: f32 = 1.0;

/// Largest accepted capacity.
pub const CAPACITY_MAX: f32 = 1.0e7;
