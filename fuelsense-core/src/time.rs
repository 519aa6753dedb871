//! Time management for the read cycle
//!
//! The estimator only needs a monotonic microsecond counter to work out how
//! long it has been since the last successful sample. The counter is 32 bits
//! and wraps roughly every 71 minutes, so deltas are always taken with
//! wrapping subtraction.

use core::cell::Cell;

use crate::constants::time::SECONDS_PER_US;

/// Timestamp in microseconds since boot. Wraps at `u32::MAX`.
pub type Micros = u32;

/// Monotonic microsecond clock
///
/// Injected into the estimator instead of being read from a global timer,
/// so tests and simulators can drive time explicitly.
pub trait MicrosClock {
    /// Current time in microseconds
    fn now_micros(&self) -> Micros;
}

impl<C: MicrosClock + ?Sized> MicrosClock for &C {
    fn now_micros(&self) -> Micros {
        (**self).now_micros()
    }
}

/// Elapsed microseconds from `earlier` to `later`, safe across wraparound
pub fn elapsed_micros(earlier: Micros, later: Micros) -> u32 {
    later.wrapping_sub(earlier)
}

/// Convert a microsecond delta to seconds
pub fn micros_to_seconds(dt_us: u32) -> f32 {
    dt_us as f32 * SECONDS_PER_US
}

/// Controllable clock for tests and simulation
///
/// Interior mutability lets a test keep a shared reference to the clock
/// while the estimator holds another one.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<Micros>,
}

impl MockClock {
    /// Create a clock reading `start`
    pub fn new(start: Micros) -> Self {
        Self { now: Cell::new(start) }
    }

    /// Jump to an absolute time
    pub fn set(&self, micros: Micros) {
        self.now.set(micros);
    }

    /// Move forward by `micros`, wrapping like the hardware counter
    pub fn advance(&self, micros: u32) {
        self.now.set(self.now.get().wrapping_add(micros));
    }

    /// Move forward by whole milliseconds
    pub fn advance_ms(&self, ms: u32) {
        self.advance(ms.wrapping_mul(1000));
    }
}

impl MicrosClock for MockClock {
    fn now_micros(&self) -> Micros {
        self.now.get()
    }
}

/// Clock backed by `std::time::Instant` (requires std)
///
/// Counts from construction and truncates to 32 bits, matching the
/// wraparound behaviour of a hardware timer.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Start counting from now
    pub fn new() -> Self {
        Self { start: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MicrosClock for SystemClock {
    fn now_micros(&self) -> Micros {
        self.start.elapsed().as_micros() as Micros
    }
}
