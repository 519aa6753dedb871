//! Fuel level parameter group
//!
//! The configuration is owned by the external parameter store: it is loaded
//! once at startup (defaults plus user overrides) and only ever changed
//! through that store. The estimator reads it and never writes it.
//!
//! ## Parameters
//!
//! | Name | Field | Default | Range | Units |
//! |---|---|---|---|---|
//! | `FL_PIN` | `pin` | -1 | -1..=127 | |
//! | `FL_VLT_MIN` | `empty_voltage` | 0.5 | 0.01..=10 | V |
//! | `FL_V_MULT` | `voltage_mult` | 0.5 | 0.01..=10 | |
//! | `FL_FLTR` | `filter_hz` | 0.3 | -1..=1 | Hz |
//! | `FL_FF` | `fit.first_order` | 1 | -10..=10 | |
//! | `FL_FS` | `fit.second_order` | 0 | -10..=10 | |
//! | `FL_FT` | `fit.third_order` | 0 | -10..=10 | |
//! | `FL_OFF` | `fit.offset` | 0 | -10..=10 | |
//! | `CAPACITY` | `capacity` | 3300 | 1..=1e7 | tank volume |
//!
//! `FL_FLTR` only takes effect after a restart because it seeds the filter
//! when the estimator is built.
//!
//! ```rust
//! use fuelsense_core::FuelLevelConfig;
//!
//! let mut config = FuelLevelConfig::default();
//! config.set("FL_PIN", 14.0)?;
//! config.set("FL_VLT_MIN", 0.4)?;
//! assert_eq!(config.pin, 14);
//! assert_eq!(config.get("FL_VLT_MIN"), Some(0.4));
//! # Ok::<(), fuelsense_core::ConfigError>(())
//! ```

use crate::{
    calibration::PolynomialFit,
    constants::{filter::DEFAULT_DIAGNOSTIC_CUTOFF_HZ, params::*},
    errors::{ConfigError, ConfigResult},
};

/// Identifies one parameter of the group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    /// `FL_PIN`
    Pin,
    /// `FL_VLT_MIN`
    EmptyVoltage,
    /// `FL_V_MULT`
    VoltageMult,
    /// `FL_FLTR`
    FilterHz,
    /// `FL_FF`
    FirstOrder,
    /// `FL_FS`
    SecondOrder,
    /// `FL_FT`
    ThirdOrder,
    /// `FL_OFF`
    Offset,
    /// `CAPACITY`
    Capacity,
}

/// Metadata for one named parameter, as advertised to a ground station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamInfo {
    /// Which field this describes
    pub id: ParamId,
    /// Stored parameter name
    pub name: &'static str,
    /// Short human readable name
    pub display_name: &'static str,
    /// Longer description
    pub description: &'static str,
    /// Units, if any
    pub units: Option<&'static str>,
    /// Value used when nothing is stored
    pub default: f32,
    /// Smallest accepted value
    pub min: f32,
    /// Largest accepted value
    pub max: f32,
    /// Whether a change only applies after a restart
    pub reboot_required: bool,
}

impl ParamInfo {
    /// Check `value` against this parameter's range and type
    pub fn check(&self, value: f32) -> ConfigResult<()> {
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue { name: self.name });
        }
        if value < self.min || value > self.max {
            return Err(ConfigError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.id == ParamId::Pin && value != (value as i16) as f32 {
            return Err(ConfigError::InvalidValue { name: self.name });
        }
        Ok(())
    }
}

/// Every parameter in the group, in [`ParamId`] order
pub const PARAMS: &[ParamInfo] = &[
    ParamInfo {
        id: ParamId::Pin,
        name: "FL_PIN",
        display_name: "Fuel level analog pin number",
        description: "Analog input pin the fuel level sensor is connected to. -1 disables the sensor.",
        units: None,
        default: DEFAULT_PIN as f32,
        min: PIN_DISABLED as f32,
        max: PIN_MAX as f32,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::EmptyVoltage,
        name: "FL_VLT_MIN",
        display_name: "Empty fuel level voltage",
        description: "Voltage seen on the analog pin when the fuel tank is empty.",
        units: Some("V"),
        default: DEFAULT_EMPTY_VOLTAGE,
        min: LEVEL_CAL_MIN,
        max: LEVEL_CAL_MAX,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::VoltageMult,
        name: "FL_V_MULT",
        display_name: "Fuel level voltage multiplier",
        description: "Calculated as 1 / (full voltage - empty voltage).",
        units: None,
        default: DEFAULT_VOLTAGE_MULT,
        min: LEVEL_CAL_MIN,
        max: LEVEL_CAL_MAX,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::FilterHz,
        name: "FL_FLTR",
        display_name: "Fuel level filter frequency",
        description: "Low pass filter cutoff used to remove tank slosh. -1 uses the unfiltered voltage. Suggested 0.2 to 0.5 Hz.",
        units: Some("Hz"),
        default: DEFAULT_FILTER_HZ,
        min: FILTER_HZ_MIN,
        max: FILTER_HZ_MAX,
        reboot_required: true,
    },
    ParamInfo {
        id: ParamId::FirstOrder,
        name: "FL_FF",
        display_name: "First order term",
        description: "First order polynomial fit term.",
        units: None,
        default: 1.0,
        min: FIT_TERM_MIN,
        max: FIT_TERM_MAX,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::SecondOrder,
        name: "FL_FS",
        display_name: "Second order term",
        description: "Second order polynomial fit term.",
        units: None,
        default: 0.0,
        min: FIT_TERM_MIN,
        max: FIT_TERM_MAX,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::ThirdOrder,
        name: "FL_FT",
        display_name: "Third order term",
        description: "Third order polynomial fit term.",
        units: None,
        default: 0.0,
        min: FIT_TERM_MIN,
        max: FIT_TERM_MAX,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::Offset,
        name: "FL_OFF",
        display_name: "Offset term",
        description: "Offset polynomial fit term.",
        units: None,
        default: 0.0,
        min: FIT_TERM_MIN,
        max: FIT_TERM_MAX,
        reboot_required: false,
    },
    ParamInfo {
        id: ParamId::Capacity,
        name: "CAPACITY",
        display_name: "Tank capacity",
        description: "Shared pack capacity, read as tank volume in the unit reported as consumed.",
        units: Some("mL"),
        default: DEFAULT_CAPACITY,
        min: CAPACITY_MIN,
        max: CAPACITY_MAX,
        reboot_required: false,
    },
];

/// Look up a parameter by name
pub fn find_param(name: &str) -> Option<&'static ParamInfo> {
    PARAMS.iter().find(|info| info.name == name)
}

/// Metadata for a parameter id
pub fn param_info(id: ParamId) -> &'static ParamInfo {
    // PARAMS is laid out in ParamId order
    &PARAMS[id as usize]
}

/// Configuration for one fuel level sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FuelLevelConfig {
    /// Analog pin, negative when no sensor is fitted
    pub pin: i16,
    /// Calibrated voltage at an empty tank
    pub empty_voltage: f32,
    /// `1 / (full - empty)`
    pub voltage_mult: f32,
    /// Level filter cutoff in Hz, negative to use the unfiltered voltage
    pub filter_hz: f32,
    /// Raw to calibrated voltage fit
    pub fit: PolynomialFit,
    /// Tank volume, in the unit the consumed figure is reported in
    pub capacity: f32,
}

impl Default for FuelLevelConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            empty_voltage: DEFAULT_EMPTY_VOLTAGE,
            voltage_mult: DEFAULT_VOLTAGE_MULT,
            filter_hz: DEFAULT_FILTER_HZ,
            fit: PolynomialFit::IDENTITY,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl FuelLevelConfig {
    /// Use analog `pin`
    pub fn with_pin(mut self, pin: i16) -> Self {
        self.pin = pin;
        self
    }

    /// Set the empty voltage and multiplier from the two calibration points
    ///
    /// Equal voltages produce an infinite multiplier; [`validate`](Self::validate)
    /// rejects that.
    pub fn with_level_points(mut self, empty_voltage: f32, full_voltage: f32) -> Self {
        self.empty_voltage = empty_voltage;
        self.voltage_mult = 1.0 / (full_voltage - empty_voltage);
        self
    }

    /// Set the empty voltage and multiplier directly
    pub fn with_level_calibration(mut self, empty_voltage: f32, voltage_mult: f32) -> Self {
        self.empty_voltage = empty_voltage;
        self.voltage_mult = voltage_mult;
        self
    }

    /// Set the filter cutoff, negative to disable level filtering
    pub fn with_filter_hz(mut self, filter_hz: f32) -> Self {
        self.filter_hz = filter_hz;
        self
    }

    /// Set the polynomial fit
    pub fn with_fit(mut self, fit: PolynomialFit) -> Self {
        self.fit = fit;
        self
    }

    /// Set the tank capacity
    pub fn with_capacity(mut self, capacity: f32) -> Self {
        self.capacity = capacity;
        self
    }

    /// A sensor pin is configured
    pub fn is_enabled(&self) -> bool {
        self.pin >= 0
    }

    /// The level is computed from the filtered voltage
    pub fn filter_enabled(&self) -> bool {
        self.filter_hz >= 0.0
    }

    /// Cutoff the filter should run at
    ///
    /// Falls back to [`DEFAULT_DIAGNOSTIC_CUTOFF_HZ`] when level filtering is
    /// off, so the reported voltage stays smoothed either way.
    pub fn filter_cutoff_hz(&self) -> f32 {
        if self.filter_enabled() {
            self.filter_hz
        } else {
            DEFAULT_DIAGNOSTIC_CUTOFF_HZ
        }
    }

    /// Read a parameter by name
    pub fn get(&self, name: &str) -> Option<f32> {
        find_param(name).map(|info| self.get_param(info.id))
    }

    /// Read a parameter by id
    pub fn get_param(&self, id: ParamId) -> f32 {
        match id {
            ParamId::Pin => self.pin as f32,
            ParamId::EmptyVoltage => self.empty_voltage,
            ParamId::VoltageMult => self.voltage_mult,
            ParamId::FilterHz => self.filter_hz,
            ParamId::FirstOrder => self.fit.first_order,
            ParamId::SecondOrder => self.fit.second_order,
            ParamId::ThirdOrder => self.fit.third_order,
            ParamId::Offset => self.fit.offset,
            ParamId::Capacity => self.capacity,
        }
    }

    /// Write a parameter by name after checking its range
    ///
    /// The config is left unchanged when an error is returned.
    pub fn set(&mut self, name: &str, value: f32) -> ConfigResult<()> {
        let info = find_param(name).ok_or(ConfigError::UnknownParam)?;
        self.set_param(info.id, value)
    }

    /// Write a parameter by id after checking its range
    pub fn set_param(&mut self, id: ParamId, value: f32) -> ConfigResult<()> {
        param_info(id).check(value)?;
        match id {
            ParamId::Pin => self.pin = value as i16,
            ParamId::EmptyVoltage => self.empty_voltage = value,
            ParamId::VoltageMult => self.voltage_mult = value,
            ParamId::FilterHz => self.filter_hz = value,
            ParamId::FirstOrder => self.fit.first_order = value,
            ParamId::SecondOrder => self.fit.second_order = value,
            ParamId::ThirdOrder => self.fit.third_order = value,
            ParamId::Offset => self.fit.offset = value,
            ParamId::Capacity => self.capacity = value,
        }
        Ok(())
    }

    /// Check every parameter against its advertised range
    ///
    /// Returns the first failure in table order.
    pub fn validate(&self) -> ConfigResult<()> {
        for info in PARAMS {
            // Any negative pin just means disabled
            if info.id == ParamId::Pin && self.pin < 0 {
                continue;
            }
            info.check(self.get_param(info.id))?;
        }
        Ok(())
    }
}
