//! ID generation logic
//!
//! The tick is read and applied under the lock. Waiting for the next
//! millisecond after sequence exhaustion happens with the lock released.

use tracing::{debug, instrument, warn};

use super::state::Step;
use super::time::TickSource;
use super::wait::next_backoff;
use super::IdGenerator;
use crate::config::MAX_TICK;
use crate::error::EzIdError;

impl<T: TickSource> IdGenerator<T> {
    /// Generate the next id.
    ///
    /// Fails with [`EzIdError::ClockMovedBackwards`] when the tick source
    /// reports a tick before the last recorded one; the generator keeps its
    /// state and a later call succeeds once the clock catches up.
    #[instrument(level = "trace", skip(self), fields(generator_id = self.generator_id))]
    pub fn next_id(&self) -> Result<i64, EzIdError> {
        let mut backoff_ms = 1u64;

        loop {
            match self.try_step()? {
                Step::Ready { tick, sequence } => return Ok(self.assemble_id(tick, sequence)),
                Step::Exhausted { tick } => {
                    debug!(tick, generator_id = self.generator_id, "sequence exhausted");
                    self.wait_next_millis(tick, backoff_ms);
                    backoff_ms = next_backoff(backoff_ms, self.config.max_backoff_ms());
                }
            }
        }
    }

    /// One locked pass of the algorithm
    #[inline]
    fn try_step(&self) -> Result<Step, EzIdError> {
        let mut state = self.state.lock();
        let now = self.now();
        if now > MAX_TICK {
            return Err(EzIdError::TickOutOfRange {
                tick: now,
                max: MAX_TICK,
            });
        }

        state.step(now).inspect_err(|err| {
            if let EzIdError::ClockMovedBackwards { now, last } = err {
                warn!(
                    now,
                    last,
                    generator_id = self.generator_id,
                    "clock moved backwards, refusing to generate id"
                );
            }
        })
    }
}
