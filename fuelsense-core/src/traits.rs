//! Capability traits at the hardware and framework seams
//!
//! The estimator never reaches for global hardware handles. The analog input
//! comes in through [`AnalogSource`], time through
//! [`MicrosClock`](crate::time::MicrosClock), and the estimator presents
//! itself to the surrounding battery-monitor framework as a
//! [`MonitorBackend`].

use crate::state::MonitorState;

/// Analog input channel, as provided by the board's ADC driver
///
/// Both calls must return immediately. `voltage_average` hands back the
/// driver's latest averaged reading rather than starting a conversion.
pub trait AnalogSource {
    /// Route this source to `pin`. Returns false if the pin does not exist
    /// or the channel cannot be claimed.
    fn select_channel(&mut self, pin: i16) -> bool;

    /// Averaged voltage on the selected channel
    fn voltage_average(&mut self) -> f32;
}

impl<A: AnalogSource + ?Sized> AnalogSource for &mut A {
    fn select_channel(&mut self, pin: i16) -> bool {
        (**self).select_channel(pin)
    }

    fn voltage_average(&mut self) -> f32 {
        (**self).voltage_average()
    }
}

/// One backend of the battery-monitor framework
///
/// The framework calls [`read`](Self::read) on its schedule and then reads
/// [`state`](Self::state). Capability flags tell it which parts of the state
/// mean anything for this backend.
pub trait MonitorBackend {
    /// Run one read cycle
    fn read(&mut self);

    /// Current state record
    fn state(&self) -> &MonitorState;

    /// Backend measures current
    fn has_current(&self) -> bool;

    /// Backend reports consumed energy (the Wh slot)
    fn has_consumed_energy(&self) -> bool;

    /// Backend reports individual cell voltages
    fn has_cell_voltages(&self) -> bool {
        false
    }

    /// Capacity the consumption figure is measured against
    fn capacity(&self) -> f32;

    /// Remaining capacity in percent, if the backend can tell
    fn capacity_remaining_pct(&self) -> Option<u8> {
        if !self.has_consumed_energy() {
            return None;
        }
        self.state().capacity_remaining_pct(self.capacity())
    }
}
