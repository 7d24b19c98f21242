//! Tick sources for EzId generation
//!
//! A tick is the number of milliseconds elapsed since 1970-01-01T00:00:00Z.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

/// Source of the current tick.
///
/// Generators read the tick through this trait so tests can drive the clock
/// (regressions, exhausted milliseconds) without waiting on real time.
pub trait TickSource: Send + Sync {
    /// Milliseconds since 1970-01-01T00:00:00Z
    fn tick(&self) -> u64;
}

impl<T: TickSource + ?Sized> TickSource for Arc<T> {
    #[inline]
    fn tick(&self) -> u64 {
        (**self).tick()
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    #[inline]
    fn tick(&self) -> u64 {
        (**self).tick()
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch, clamped at 0
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Wall-clock anchored at construction, advanced by a monotonic stopwatch.
///
/// Wall-clock adjustments after start-up (NTP steps, DST changes) do not move
/// it backwards.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin_ms: u64,
    started: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin_ms: unix_time_ms(),
            started: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    #[inline]
    fn tick(&self) -> u64 {
        self.origin_ms + self.started.elapsed().as_millis() as u64
    }
}

/// Raw wall clock. Can move backwards when the system time is adjusted.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TickSource for SystemClock {
    #[inline]
    fn tick(&self) -> u64 {
        unix_time_ms()
    }
}
