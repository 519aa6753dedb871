//! Shared monitor state record
//!
//! The record the battery-monitor framework reads after every cycle. It is
//! created once with the estimator and updated in place for the life of the
//! vehicle session. On a failed cycle only `healthy` changes; on a
//! successful cycle every field is rewritten from the same sample.

use crate::time::Micros;

/// Consumed share of the tank, in the capacity's unit
///
/// The battery-monitor record has two consumption slots, `consumed_mah` and
/// `consumed_wh`. A fuel sender has neither charge nor energy, so:
///
/// - the mAh slot carries consumed *volume* in the capacity unit (usually mL)
/// - the Wh slot mirrors it, as if the "pack" ran at a fixed 1 V
///
/// Neither is a physical electrical quantity. Keeping one value and deriving
/// both slots from it guarantees they are always equal and always from the
/// same cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumedCapacity(f32);

impl ConsumedCapacity {
    /// Wrap a consumed volume
    pub const fn new(volume: f32) -> Self {
        Self(volume)
    }

    /// Consumed volume in the capacity's unit
    pub fn volume(&self) -> f32 {
        self.0
    }

    /// Value for the record's mAh slot (volume)
    pub fn as_mah(&self) -> f32 {
        self.0
    }

    /// Value for the record's Wh slot (volume at an assumed 1 V)
    pub fn as_wh(&self) -> f32 {
        self.0
    }
}

/// Battery-monitor style state written by the estimator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorState {
    /// Last channel selection succeeded
    pub healthy: bool,
    /// Filtered calibrated voltage, reported whether or not it drives the level
    pub voltage: f32,
    /// Always zero, a fuel sender has no current channel
    pub current_amps: f32,
    /// Consumed share of the tank
    pub consumed: ConsumedCapacity,
    /// Time of the last successful cycle, `None` before the first one
    pub last_time_micros: Option<Micros>,
}

impl MonitorState {
    /// Consumed volume as published in the mAh slot
    pub fn consumed_mah(&self) -> f32 {
        self.consumed.as_mah()
    }

    /// Consumed volume as published in the Wh slot
    pub fn consumed_wh(&self) -> f32 {
        self.consumed.as_wh()
    }

    /// A successful cycle has happened at least once
    pub fn has_sample(&self) -> bool {
        self.last_time_micros.is_some()
    }

    /// Remaining capacity in percent, clamped to 0..=100
    ///
    /// This is the consumer's view: the consumed figure itself may sit
    /// outside the tank (sender drift, loose calibration) and is never
    /// clipped. Returns `None` while unhealthy, before the first sample, or
    /// when `capacity` is not positive.
    pub fn capacity_remaining_pct(&self, capacity: f32) -> Option<u8> {
        if !self.healthy || !self.has_sample() || capacity.is_nan() || capacity <= 0.0 {
            return None;
        }
        let remaining = 100.0 * (capacity - self.consumed.volume()) / capacity;
        if !remaining.is_finite() {
            return None;
        }
        Some(remaining.clamp(0.0, 100.0) as u8)
    }
}
