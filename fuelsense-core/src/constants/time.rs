//! Time-Related Constants

/// Microseconds per second.
pub const US_PER_SECOND: u32 = 1_000_000;

/// Seconds per microsecond, for converting clock deltas to filter time steps.
pub const SECONDS_PER_US: f32 = 1.0 / US_PER_SECOND as f32;
