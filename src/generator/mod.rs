//! Core EzId generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last tick and sequence counter behind the lock
//! - `time` - Tick sources
//! - `wait` - Spin and backoff strategies
//! - `generate` - ID generation logic
//! - `typed` - Generators of typed identifiers

mod generate;
mod state;
pub(crate) mod time;
mod typed;
mod wait;

use parking_lot::Mutex;

use crate::config::{EzIdConfig, GENERATOR_ID_SHIFT, MAX_GENERATOR_ID, TIMESTAMP_SHIFT};
use crate::error::EzIdError;
use crate::extractor::IdExtractor;

use state::State;
use time::{MonotonicClock, TickSource};
use wait::{sleep_until_next_ms, spin_wait};

pub use typed::EzIdGenerator;

/// Snowflake-style generator for one generator identity.
///
/// Layout, most significant bit first: 1 unused bit, 41 bits of milliseconds
/// since 1970, 10 bits of generator ID, 12 bits of sequence.
///
/// Share one instance (e.g. behind an `Arc`) between the threads of a lane.
/// Two live generators with the same ID will mint duplicates.
#[derive(Debug)]
pub struct IdGenerator<T = MonotonicClock> {
    state: Mutex<State>,
    generator_prefix: u64,
    generator_id: u16,
    config: EzIdConfig,
    ticks: T,

    /// Extractor for decomposing IDs
    pub extract: IdExtractor,
}

impl IdGenerator<MonotonicClock> {
    /// Create with default configuration and the monotonic clock
    pub fn new(generator_id: i64) -> Result<Self, EzIdError> {
        Self::with_config(generator_id, EzIdConfig::default())
    }

    /// Create with custom configuration and the monotonic clock
    pub fn with_config(generator_id: i64, config: EzIdConfig) -> Result<Self, EzIdError> {
        Self::with_config_and_ticks(generator_id, config, MonotonicClock::new())
    }
}

impl<T: TickSource> IdGenerator<T> {
    /// Create with default configuration reading ticks from `ticks`
    pub fn with_ticks(generator_id: i64, ticks: T) -> Result<Self, EzIdError> {
        Self::with_config_and_ticks(generator_id, EzIdConfig::default(), ticks)
    }

    pub fn with_config_and_ticks(
        generator_id: i64,
        config: EzIdConfig,
        ticks: T,
    ) -> Result<Self, EzIdError> {
        let generator_id = Self::validate_generator_id(generator_id)?;
        Ok(Self {
            state: Mutex::new(State::default()),
            generator_prefix: (generator_id as u64) << GENERATOR_ID_SHIFT,
            generator_id,
            config,
            ticks,
            extract: IdExtractor,
        })
    }

    /// Accepts `0..=1023`
    fn validate_generator_id(generator_id: i64) -> Result<u16, EzIdError> {
        u16::try_from(generator_id)
            .ok()
            .filter(|id| *id <= MAX_GENERATOR_ID)
            .ok_or(EzIdError::GeneratorIdOutOfRange {
                generator_id,
                max: MAX_GENERATOR_ID,
            })
    }

    #[inline]
    pub fn generator_id(&self) -> u16 {
        self.generator_id
    }

    #[inline]
    pub fn config(&self) -> &EzIdConfig {
        &self.config
    }

    #[inline]
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    /// Tick of the most recently issued id, 0 before the first one
    pub fn last_tick(&self) -> u64 {
        self.state.lock().last_tick()
    }

    #[inline(always)]
    pub(crate) fn now(&self) -> u64 {
        self.ticks.tick()
    }

    pub(crate) fn wait_next_millis(&self, from_tick: u64, backoff_ms: u64) -> u64 {
        if let Some(new_tick) = spin_wait(from_tick, &self.config, || self.now()) {
            return new_tick;
        }
        sleep_until_next_ms(
            from_tick,
            backoff_ms,
            self.config.max_backoff_ms(),
            || self.now(),
        )
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, tick: u64, sequence: u16) -> i64 {
        ((tick << TIMESTAMP_SHIFT) | self.generator_prefix | sequence as u64) as i64
    }
}
