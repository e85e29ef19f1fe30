//! Register transition: shift right, insert feedback at the top.
//!
//! ```text
//!            feedback = evaluate(value, taps)
//!                │
//!                ▼
//!   next = [ fb | b(W-1) ... b2 b1 ]     b0 falls off
//! ```
//!
//! One bit of history is discarded per step and exactly one new bit enters.
//! The transition is a total function on `[0, 2^W)`, so iterating it from any
//! seed is deterministic and eventually periodic.

use crate::feedback::evaluate;
use crate::taps::TapSet;
use crate::word::RegisterWord;

/// Next register value: `(feedback << (W-1)) | (value >> 1)`.
///
/// # Examples
///
/// ```
/// use mfsr_core::{step, TapSet};
///
/// let taps = TapSet::<u16>::new([0, 4, 7]).unwrap();
/// assert_eq!(step(0x95C1, &taps), 0x4AE0);
/// ```
#[inline]
pub fn step<W: RegisterWord>(value: W, taps: &TapSet<W>) -> W {
    insert(value, evaluate(value, taps))
}

/// In-place variant of [`step`]. Returns the inserted feedback bit.
#[inline]
pub fn step_mut<W: RegisterWord>(register: &mut W, taps: &TapSet<W>) -> bool {
    let feedback = evaluate(*register, taps);
    *register = insert(*register, feedback);
    feedback
}

#[inline]
fn insert<W: RegisterWord>(value: W, feedback: bool) -> W {
    let top = if feedback { W::top_bit() } else { W::ZERO };
    top | (value >> 1)
}

/// A majority feedback shift register: a seed, a tap set and the current state.
///
/// As an [`Iterator`] it yields the state after each step, forever.
///
/// ```
/// use mfsr_core::{Mfsr, TapSet};
///
/// let taps = TapSet::<u16>::new([0, 4, 7]).unwrap();
/// let mut mfsr = Mfsr::new(0x95C1, taps);
///
/// assert_eq!(mfsr.next(), Some(0x4AE0));
/// assert_eq!(mfsr.state(), 0x4AE0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mfsr<W: RegisterWord> {
    seed: W,
    state: W,
    taps: TapSet<W>,
}

impl<W: RegisterWord> Mfsr<W> {
    /// Start a register at `seed`. Any seed is accepted, including zero.
    pub fn new(seed: W, taps: TapSet<W>) -> Self {
        Self {
            seed,
            state: seed,
            taps,
        }
    }

    /// The seed this register started from.
    pub fn seed(&self) -> W {
        self.seed
    }

    /// Current register contents.
    pub fn state(&self) -> W {
        self.state
    }

    pub fn taps(&self) -> &TapSet<W> {
        &self.taps
    }

    /// Advance one step and return the feedback bit that was inserted.
    pub fn advance(&mut self) -> bool {
        let feedback = step_mut(&mut self.state, &self.taps);
        tracing::trace!(
            state = format_args!("{:#x}", self.state),
            feedback,
            "mfsr step"
        );
        feedback
    }

    /// Return to the seed.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Infinite stream of inserted feedback bits.
    pub fn bits(&mut self) -> Bits<'_, W> {
        Bits { mfsr: self }
    }

    /// Infinite stream of states, starting with the current one.
    ///
    /// This is the print-then-step order: the first item is the state before
    /// any step is taken.
    pub fn snapshots(&mut self) -> Snapshots<'_, W> {
        Snapshots { mfsr: self }
    }
}

impl<W: RegisterWord> Iterator for Mfsr<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        self.advance();
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Feedback bits of an [`Mfsr`], one per step.
#[derive(Debug)]
pub struct Bits<'a, W: RegisterWord> {
    mfsr: &'a mut Mfsr<W>,
}

impl<W: RegisterWord> Iterator for Bits<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.mfsr.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// States of an [`Mfsr`], current state first.
#[derive(Debug)]
pub struct Snapshots<'a, W: RegisterWord> {
    mfsr: &'a mut Mfsr<W>,
}

impl<W: RegisterWord> Iterator for Snapshots<'_, W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        let current = self.mfsr.state;
        self.mfsr.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_taps() -> TapSet<u16> {
        TapSet::new([0, 4, 7]).unwrap()
    }

    #[test]
    fn reference_transition() {
        let taps = reference_taps();
        assert_eq!(step(0x95C1, &taps), 0x4AE0);

        let mut register = 0x95C1u16;
        let feedback = step_mut(&mut register, &taps);
        assert!(!feedback);
        assert_eq!(register, 0x4AE0);
    }

    #[test]
    fn reference_first_steps() {
        // 0x4AE0: bits 0, 4 clear, bit 7 set -> zeros win, insert 1
        // 0xA570: bits 4, 5, 6 set, bit 0 clear, bit 7 clear -> insert 1
        let taps = reference_taps();
        let states: Vec<u16> = Mfsr::new(0x95C1, taps).take(3).collect();
        assert_eq!(states[0], 0x4AE0);
        assert_eq!(states[1], 0xA570);
        assert_eq!(states[2], 0xD2B8);
    }

    #[test]
    fn zero_is_not_a_fixed_point() {
        let taps = reference_taps();
        assert_eq!(step(0u16, &taps), 0x8000);

        let taps8 = TapSet::<u8>::new([0, 3, 6]).unwrap();
        assert_eq!(step(0u8, &taps8), 0x80);

        let taps64 = TapSet::<u64>::new([1, 2, 3]).unwrap();
        assert_eq!(step(0u64, &taps64), 1 << 63);
    }

    #[test]
    fn all_ones_is_not_a_fixed_point() {
        // Every tapped bit is 1, so feedback is 0 and the top bit clears
        fn check<W: RegisterWord>(taps: TapSet<W>) {
            let next = step(W::ALL_ONES, &taps);
            assert_eq!(next, W::ALL_ONES >> 1);
            assert_ne!(next, W::ALL_ONES);
        }

        check(TapSet::<u8>::new([0, 3, 6]).unwrap());
        check(reference_taps());
        check(TapSet::<u32>::new([0, 31, 16]).unwrap());
        check(TapSet::<u64>::new([5]).unwrap());
        check(TapSet::<u128>::new([0, 1, 127]).unwrap());
    }

    #[test]
    fn all_ones_shifts_down_while_ones_win() {
        // Feedback stays 0 while at least two of bits 0, 4, 7 are still set,
        // so the run of 1s just shifts down.
        let taps = reference_taps();
        let mut mfsr = Mfsr::new(u16::MAX, taps);
        let states: Vec<u16> = mfsr.by_ref().take(9).collect();
        assert_eq!(states[0], 0x7FFF);
        assert_eq!(states[7], 0x00FF);
        assert_eq!(states[8], 0x007F);
    }

    #[test]
    fn iterator_matches_free_function() {
        let taps = reference_taps();
        let mut expected = 0x95C1u16;
        for state in Mfsr::new(0x95C1, taps.clone()).take(100) {
            expected = step(expected, &taps);
            assert_eq!(state, expected);
        }
    }

    #[test]
    fn snapshots_start_with_seed() {
        let mut mfsr = Mfsr::new(0x95C1u16, reference_taps());
        let snaps: Vec<u16> = mfsr.snapshots().take(3).collect();
        assert_eq!(snaps, vec![0x95C1, 0x4AE0, 0xA570]);
        // Three snapshots advanced the register three times
        assert_eq!(mfsr.state(), 0xD2B8);
    }

    #[test]
    fn bits_are_top_bits_of_states() {
        let taps = reference_taps();
        let bits: Vec<bool> = Mfsr::new(0x95C1, taps.clone()).bits().take(64).collect();
        let states: Vec<u16> = Mfsr::new(0x95C1, taps).take(64).collect();
        for (bit, state) in bits.iter().zip(states) {
            assert_eq!(*bit, state & 0x8000 != 0);
        }
        assert_eq!(&bits[..3], &[false, true, true]);
    }

    #[test]
    fn reset_returns_to_seed() {
        let mut mfsr = Mfsr::new(0x95C1u16, reference_taps());
        mfsr.by_ref().take(10).for_each(drop);
        assert_ne!(mfsr.state(), 0x95C1);
        mfsr.reset();
        assert_eq!(mfsr.state(), 0x95C1);
        assert_eq!(mfsr.seed(), 0x95C1);
        assert_eq!(mfsr.next(), Some(0x4AE0));
    }

    #[test]
    fn independent_registers_do_not_interact() {
        let taps = reference_taps();
        let mut a = Mfsr::new(0x95C1u16, taps.clone());
        let mut b = Mfsr::new(0x95C1u16, taps);
        a.by_ref().take(5).for_each(drop);
        assert_eq!(b.state(), 0x95C1);
        b.by_ref().take(5).for_each(drop);
        assert_eq!(a.state(), b.state());
    }

    proptest! {
        #[test]
        fn step_is_deterministic(value in any::<u16>()) {
            let taps = reference_taps();
            prop_assert_eq!(step(value, &taps), step(value, &taps));
        }

        #[test]
        fn step_conserves_shifted_bits(value in any::<u32>(), top in 0u32..32) {
            let taps = TapSet::<u32>::new([0, 9, top.max(10)]).unwrap();
            let next = step(value, &taps);
            prop_assert_eq!(next & !(1u32 << 31), value >> 1);
        }

        #[test]
        fn top_bit_is_feedback(value in any::<u16>()) {
            let taps = reference_taps();
            let next = step(value, &taps);
            prop_assert_eq!(next & 0x8000 != 0, evaluate(value, &taps));
        }
    }
}
