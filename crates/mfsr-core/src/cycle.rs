//! Orbit structure of a register.
//!
//! The state space is finite and [`step`] is a function on it, so every
//! orbit is a tail followed by a cycle. The tail can be non-empty: the
//! transition drops bit 0, and when bit 0 does not decide the vote two
//! states share the same successor.
//!
//! Detection uses Brent's algorithm: constant memory, and at most
//! `tail + 2 * period` evaluations of [`step`] (rounded up to a power of two
//! in the first phase).

use crate::register::step;
use crate::taps::TapSet;
use crate::word::RegisterWord;

/// Tail and cycle length of the orbit from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cycle {
    /// Steps taken before the orbit first enters its cycle.
    pub tail: u64,
    /// Length of the cycle (at least 1).
    pub period: u64,
}

impl Cycle {
    /// Whether the seed itself lies on the cycle.
    pub fn is_pure(&self) -> bool {
        self.tail == 0
    }

    /// Number of distinct states visited from the seed.
    pub fn distinct_states(&self) -> u64 {
        self.tail + self.period
    }
}

/// Find the tail and period of the orbit starting at `seed`.
///
/// Gives up and returns `None` once `max_steps` evaluations of [`step`] have
/// been spent without pinning the cycle down, which matters for wide
/// registers where a period may be astronomically long.
///
/// # Examples
///
/// ```
/// use mfsr_core::{detect_cycle, TapSet};
///
/// let taps = TapSet::<u8>::new([0, 3, 6]).unwrap();
/// let cycle = detect_cycle(0x5Au8, &taps, 1 << 10).unwrap();
/// assert!(cycle.period >= 1);
/// assert!(cycle.distinct_states() <= 256);
/// ```
pub fn detect_cycle<W: RegisterWord>(seed: W, taps: &TapSet<W>, max_steps: u64) -> Option<Cycle> {
    let mut spent = 0u64;
    let mut advance = |value: W| -> Option<W> {
        if spent >= max_steps {
            return None;
        }
        spent += 1;
        Some(step(value, taps))
    };

    // Phase 1: find the period.
    let mut power = 1u64;
    let mut period = 1u64;
    let mut tortoise = seed;
    let mut hare = advance(seed)?;
    while tortoise != hare {
        if power == period {
            tortoise = hare;
            power *= 2;
            period = 0;
        }
        hare = advance(hare)?;
        period += 1;
    }

    // Phase 2: hare runs `period` ahead, then both walk until they meet at
    // the cycle entry.
    let mut tortoise = seed;
    let mut hare = seed;
    for _ in 0..period {
        hare = advance(hare)?;
    }
    let mut tail = 0u64;
    while tortoise != hare {
        tortoise = advance(tortoise)?;
        hare = advance(hare)?;
        tail += 1;
    }

    tracing::debug!(
        seed = format_args!("{:#x}", seed),
        tail,
        period,
        steps = spent,
        "cycle detected"
    );

    Some(Cycle { tail, period })
}
