//! Last observed tick and sequence counter of one generator
//!
//! Mutated only while the generator's lock is held.

use std::cmp::Ordering;

use crate::config::MAX_SEQUENCE;
use crate::error::EzIdError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    last_tick: u64,
    sequence: u16,
}

/// Outcome of one step of the generation algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Sequence slot claimed for `tick`
    Ready { tick: u64, sequence: u16 },
    /// Every sequence number of `tick` is used; wait for a later tick
    Exhausted { tick: u64 },
}

impl State {
    #[cfg(test)]
    pub(crate) const fn new(last_tick: u64, sequence: u16) -> Self {
        Self {
            last_tick,
            sequence,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_tick(self) -> u64 {
        self.last_tick
    }

    #[cfg(test)]
    pub(crate) const fn sequence(self) -> u16 {
        self.sequence
    }

    /// Apply the tick read under the lock.
    ///
    /// A new tick resets the counter, so the first id of a tick carries
    /// sequence 1. A regressed tick leaves the state untouched.
    #[inline]
    pub(crate) fn step(&mut self, now: u64) -> Result<Step, EzIdError> {
        match now.cmp(&self.last_tick) {
            Ordering::Greater => {
                self.last_tick = now;
                self.sequence = 0;
            }
            Ordering::Less => {
                return Err(EzIdError::ClockMovedBackwards {
                    now,
                    last: self.last_tick,
                });
            }
            Ordering::Equal => {}
        }

        if self.sequence >= MAX_SEQUENCE {
            return Ok(Step::Exhausted {
                tick: self.last_tick,
            });
        }

        self.sequence += 1;
        Ok(Step::Ready {
            tick: self.last_tick,
            sequence: self.sequence,
        })
    }
}
