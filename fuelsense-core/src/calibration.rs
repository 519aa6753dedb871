//! Polynomial fit calibration
//!
//! Resistive fuel senders rarely respond linearly across the tank, so the
//! raw pin voltage is remapped through a user-fitted cubic before the level
//! math sees it:
//!
//! ```text
//! v_eff = c3·v³ + c2·v² + c1·v + c0
//! ```
//!
//! The default terms (`c1 = 1`, the rest 0) make this the identity, which is
//! how calibration is switched off.

/// Cubic fit terms (`FL_FT`, `FL_FS`, `FL_FF`, `FL_OFF`)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolynomialFit {
    /// Third order term
    pub third_order: f32,
    /// Second order term
    pub second_order: f32,
    /// First order term
    pub first_order: f32,
    /// Offset term
    pub offset: f32,
}

impl PolynomialFit {
    /// Identity fit: output equals input
    pub const IDENTITY: Self = Self {
        third_order: 0.0,
        second_order: 0.0,
        first_order: 1.0,
        offset: 0.0,
    };

    /// Create a fit from its terms, highest order first
    pub const fn new(third_order: f32, second_order: f32, first_order: f32, offset: f32) -> Self {
        Self {
            third_order,
            second_order,
            first_order,
            offset,
        }
    }

    /// Map a raw sender voltage to the calibrated voltage domain
    #[inline]
    pub fn evaluate(&self, raw_voltage: f32) -> f32 {
        // Horner form: ((c3·v + c2)·v + c1)·v + c0
        let v = raw_voltage;
        let acc = libm::fmaf(self.third_order, v, self.second_order);
        let acc = libm::fmaf(acc, v, self.first_order);
        libm::fmaf(acc, v, self.offset)
    }

    /// Whether this fit leaves voltages untouched
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for PolynomialFit {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Evaluate `fit` at `raw_voltage`
pub fn evaluate(raw_voltage: f32, fit: &PolynomialFit) -> f32 {
    fit.evaluate(raw_voltage)
}
