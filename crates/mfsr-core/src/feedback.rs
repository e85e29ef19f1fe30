//! Inverted majority-vote feedback.
//!
//! The feedback bit is the complement of the majority among the tapped bits:
//!
//! ```text
//! ones = popcount(value & mask)
//! n    = number of taps (odd)
//!
//! feedback = 1  if 2 * ones <= n   (zeros win)
//!            0  if 2 * ones >  n   (ones win)
//! ```
//!
//! `n` is odd, so `2 * ones == n` never happens and the vote never ties.
//! The inversion is part of the output sequence definition and must not be
//! "fixed" into a majority-follows-majority rule.

use crate::error::Result;
use crate::taps::TapSet;
use crate::word::{popcount, RegisterWord};

/// Compute the feedback bit for `value` under `taps`.
///
/// Returns `true` for a 1 bit.
///
/// # Examples
///
/// ```
/// use mfsr_core::{evaluate, TapSet};
///
/// let taps = TapSet::<u16>::new([0, 4, 7]).unwrap();
///
/// // Bits 0 and 7 of 0x95C1 are set, bit 4 is clear: ones win, feedback 0
/// assert!(!evaluate(0x95C1, &taps));
///
/// // Nothing tapped is set: zeros win, feedback 1
/// assert!(evaluate(0x0000, &taps));
/// ```
#[inline]
pub fn evaluate<W: RegisterWord>(value: W, taps: &TapSet<W>) -> bool {
    let ones = popcount(value & taps.mask()) as usize;
    ones * 2 <= taps.len()
}

/// Compute the feedback bit from a raw list of positions.
///
/// The positions are validated exactly as [`TapSet::new`] does first; a
/// caller that evaluates repeatedly should build the [`TapSet`] once instead.
pub fn evaluate_positions<W: RegisterWord>(value: W, positions: &[u32]) -> Result<bool> {
    let taps = TapSet::<W>::new(positions.iter().copied())?;
    Ok(evaluate(value, &taps))
}

/// Number of tapped bits that are set in `value`.
#[inline]
pub fn tapped_ones<W: RegisterWord>(value: W, taps: &TapSet<W>) -> u32 {
    popcount(value & taps.mask())
}
