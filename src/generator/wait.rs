//! Wait and backoff strategies for sequence exhaustion
//!
//! Polls the tick source until it moves past the exhausted tick. This is not a
//! blocking wait on a clock event: it spins, yields, then sleeps.

use std::thread;
use std::time::Duration;

use crate::config::EzIdConfig;

/// Perform spin-wait loop, checking for tick advancement
///
/// Returns Some(new_tick) if the tick advanced, None if spin loops exhausted
#[inline]
pub fn spin_wait<F>(from_tick: u64, config: &EzIdConfig, get_tick: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_tick = get_tick();
        if new_tick > from_tick {
            return Some(new_tick);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning the new tick once advanced
#[inline]
pub fn sleep_until_next_ms<F>(
    from_tick: u64,
    mut backoff_ms: u64,
    max_backoff_ms: u64,
    get_tick: F,
) -> u64
where
    F: Fn() -> u64,
{
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let new_tick = get_tick();
        if new_tick > from_tick {
            return new_tick;
        }
        backoff_ms = next_backoff(backoff_ms, max_backoff_ms);
    }
}

/// Next backoff duration: doubles, capped at `max_ms`
#[inline(always)]
pub const fn next_backoff(current: u64, max_ms: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > max_ms {
        max_ms
    } else {
        next
    }
}
