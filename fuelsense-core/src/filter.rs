//! Single-Pole Low-Pass Filter
//!
//! Exponential smoothing on an irregular time base. Fuel senders read the
//! float position, so the raw signal carries every slosh and bump; the
//! filter keeps the trend over tens of seconds and drops the rest.
//!
//! ## Filter Math
//!
//! ```text
//! rc    = 1 / (2·π·fc)
//! alpha = dt / (dt + rc)          clamped to [0, 1]
//! y[n]  = y[n-1] + alpha · (x[n] - y[n-1])
//! ```
//!
//! Because `alpha` is recomputed from `dt` on every call, the filter keeps
//! the same time constant whether the scheduler runs it at 10 Hz or 1 Hz.
//!
//! ## Edge Cases
//!
//! | Input | Behaviour |
//! |---|---|
//! | first sample | output = sample, no ramp from zero |
//! | `dt <= 0`, NaN | output unchanged |
//! | `dt > MAX_FILTER_DT_S` | re-seeded from the sample |
//! | non-finite sample before seeding | returned as is, filter stays unseeded |
//! | non-finite sample after seeding | ignored |
//! | `fc <= 0` | pass-through |

use core::f32::consts::PI;

use crate::constants::filter::MAX_FILTER_DT_S;

/// Smoothing coefficient for a single-pole filter
///
/// Returns 1.0 (pass-through) when the cutoff is not positive, and 0.0 when
/// `dt` is not positive, so callers can never divide by zero.
pub fn lowpass_alpha(dt_s: f32, cutoff_hz: f32) -> f32 {
    if cutoff_hz.is_nan() || cutoff_hz <= 0.0 {
        return 1.0;
    }
    if dt_s.is_nan() || dt_s <= 0.0 {
        return 0.0;
    }
    let rc = 1.0 / (2.0 * PI * cutoff_hz);
    (dt_s / (dt_s + rc)).clamp(0.0, 1.0)
}

/// Low-pass filter with a variable time step
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    cutoff_hz: f32,
    output: f32,
    initialised: bool,
}

impl LowPassFilter {
    /// Create a filter with the given -3 dB cutoff in Hz
    pub fn new(cutoff_hz: f32) -> Self {
        Self {
            cutoff_hz,
            output: 0.0,
            initialised: false,
        }
    }

    /// Change the cutoff. The current output is kept.
    pub fn set_cutoff_frequency(&mut self, cutoff_hz: f32) {
        self.cutoff_hz = cutoff_hz;
    }

    /// Current cutoff in Hz
    pub fn cutoff_frequency(&self) -> f32 {
        self.cutoff_hz
    }

    /// Feed one sample taken `dt_s` seconds after the previous one
    ///
    /// Until a finite sample has seeded the filter there is no output to fall
    /// back on, so a non-finite sample is handed straight back.
    pub fn apply(&mut self, sample: f32, dt_s: f32) -> f32 {
        if !self.initialised {
            if sample.is_finite() {
                self.reset(sample);
            }
            return sample;
        }

        if !sample.is_finite() {
            return self.output;
        }

        if dt_s.is_nan() || dt_s <= 0.0 {
            return self.output;
        }

        if dt_s > MAX_FILTER_DT_S {
            self.reset(sample);
            return self.output;
        }

        let alpha = lowpass_alpha(dt_s, self.cutoff_hz);
        self.output += alpha * (sample - self.output);
        self.output
    }

    /// Last filtered value (0.0 before the first sample)
    pub fn output(&self) -> f32 {
        self.output
    }

    /// Force the output to `value`
    pub fn reset(&mut self, value: f32) {
        self.output = value;
        self.initialised = true;
    }

    /// Whether a sample has been seen since construction
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }
}
