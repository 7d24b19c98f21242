//! Bit layout and wait tuning for the EzId generator

mod builder;

use thiserror::Error;

pub use builder::EzIdConfigBuilder;
use builder::{
    DEFAULT_MAX_BACKOFF_MS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS, DEFAULT_SPIN_YIELD_EVERY,
};

/// Milliseconds since 1970-01-01T00:00:00Z; bits 62..22
pub const TIMESTAMP_BITS: u8 = 41;
/// Generator identity; bits 21..12
pub const GENERATOR_ID_BITS: u8 = 10;
/// Per-millisecond counter; bits 11..0
pub const SEQUENCE_BITS: u8 = 12;

pub const GENERATOR_ID_SHIFT: u8 = SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u8 = GENERATOR_ID_BITS + SEQUENCE_BITS;

pub const MAX_GENERATOR_ID: u16 = (1 << GENERATOR_ID_BITS) - 1;
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;
/// Largest tick that fits the timestamp field (2039-09-07T15:47:35.551Z)
pub const MAX_TICK: u64 = (1 << TIMESTAMP_BITS) - 1;

/// Errors related to `EzIdConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EzIdConfigError {
    /// Backoff cap must allow at least one millisecond of sleep
    #[error("Max backoff {ms}ms must be at least 1ms")]
    InvalidMaxBackoff { ms: u64 },
}

/// Tuning for the wait performed when a millisecond runs out of sequence numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EzIdConfig {
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
    max_backoff_ms: u64,
}

impl EzIdConfig {
    pub(crate) fn from_builder(b: EzIdConfigBuilder) -> Self {
        Self {
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
            max_backoff_ms: b.max_backoff_ms,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> EzIdConfigBuilder {
        EzIdConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn max_backoff_ms(&self) -> u64 {
        self.max_backoff_ms
    }
}

impl Default for EzIdConfig {
    fn default() -> Self {
        Self {
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }
}
