//! Time abstraction traits for platform-agnostic polling.
//!
//! The debounce logic only ever asks "how long has the raw level been
//! stable". These traits let it ask that against any monotonic clock: a
//! hardware timer, an RTOS tick counter, or a controllable mock in tests.

/// Trait for abstracting monotonic time sources.
///
/// Instants returned by [`now`](TimeSource::now) must be non-decreasing
/// across calls. A clock that stalls (returns the same instant twice) is
/// fine and simply means no time has elapsed; a clock that goes backwards
/// violates the contract.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// `earlier` must not be later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
