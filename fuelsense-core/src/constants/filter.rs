//! Low-Pass Filter Constants
//!
//! Values governing the single-pole smoothing filter applied to the
//! calibrated sender voltage.

/// Cutoff used internally when level filtering is disabled (Hz).
///
/// A negative `FL_FLTR` means the level is computed from the unfiltered
/// voltage, but the filter still runs at this pole so the diagnostic
/// voltage field keeps showing a smoothed trace. Matches the default
/// `FL_FLTR` value.
pub const DEFAULT_DIAGNOSTIC_CUTOFF_HZ: f32 = 0.3;

/// Largest time step the filter will integrate (seconds).
///
/// A longer gap between samples means the clock jumped or the scheduler
/// stalled. The filter re-seeds from the incoming sample instead of
/// blending across the gap.
pub const MAX_FILTER_DT_S: f32 = 60.0;
