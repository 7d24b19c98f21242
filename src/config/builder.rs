//! EzIdConfig builder for constructing configuration

use super::{EzIdConfig, EzIdConfigError};

/// Default configuration values
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;
pub(super) const DEFAULT_MAX_BACKOFF_MS: u64 = 100;

/// Builder for EzIdConfig
#[derive(Debug)]
pub struct EzIdConfigBuilder {
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
    pub(super) max_backoff_ms: u64,
}

impl EzIdConfigBuilder {
    /// Create a new EzIdConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }

    /// Enable or disable micro spin before sleeping on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Cap for the exponential sleep backoff, at least 1 ms
    pub fn max_backoff_ms(mut self, ms: u64) -> Result<Self, EzIdConfigError> {
        if ms == 0 {
            return Err(EzIdConfigError::InvalidMaxBackoff { ms });
        }
        self.max_backoff_ms = ms;
        Ok(self)
    }

    /// Build the final EzIdConfig
    pub fn build(self) -> EzIdConfig {
        EzIdConfig::from_builder(self)
    }
}

impl Default for EzIdConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
