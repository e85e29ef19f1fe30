//! Majority Feedback Shift Register
//!
//! An MFSR is an LFSR whose XOR feedback is replaced by a vote. An odd number
//! of tap positions is sampled from the register and the bit that is shifted
//! in is the **complement** of the majority among them.
//!
//! # Transition
//!
//! ```text
//! ones     = popcount(state & mask)
//! feedback = 1 if 2 * ones <= taps else 0
//! next     = (feedback << (W - 1)) | (state >> 1)
//! ```
//!
//! The register width W is the bit count of the word type (`u8` through
//! `u128`, see [`RegisterWord`]).
//!
//! # Configuration
//!
//! Tap positions are validated once, when the [`TapSet`] is built: odd
//! count, distinct, inside `[0, W)`. After that, [`step`] cannot fail and a
//! register is never left half-updated.
//!
//! # Example
//!
//! ```
//! use mfsr_core::{Mfsr, TapSet};
//!
//! let taps = TapSet::<u16>::new([0, 4, 7])?;
//! let states: Vec<u16> = Mfsr::new(0x95C1, taps).take(3).collect();
//! assert_eq!(states, vec![0x4AE0, 0xA570, 0xD2B8]);
//! # Ok::<(), mfsr_core::Error>(())
//! ```

mod cycle;
mod error;
mod feedback;
mod register;
mod taps;
mod word;

pub use cycle::{detect_cycle, Cycle};
pub use error::{Error, Result};
pub use feedback::{evaluate, evaluate_positions, tapped_ones};
pub use register::{step, step_mut, Bits, Mfsr, Snapshots};
pub use taps::TapSet;
pub use word::{popcount, RegisterWord};

/// Register width of the reference configuration.
pub const REFERENCE_WIDTH: u32 = 16;

/// Tap positions of the reference configuration.
pub const REFERENCE_TAPS: [u32; 3] = [0, 4, 7];

/// Seed of the reference configuration.
pub const REFERENCE_SEED: u16 = 0x95C1;

const _: () = assert!(REFERENCE_WIDTH == u16::BITS);
const _: () = assert!(REFERENCE_TAPS.len() % 2 == 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration() {
        let taps = TapSet::<u16>::new(REFERENCE_TAPS).unwrap();
        assert_eq!(step(REFERENCE_SEED, &taps), 0x4AE0);
    }

    #[test]
    fn registers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TapSet<u16>>();
        assert_send_sync::<Mfsr<u64>>();
    }

    #[test]
    fn parallel_streams_are_independent() {
        let taps = TapSet::<u16>::new(REFERENCE_TAPS).unwrap();
        let handles: Vec<_> = (0..4u16)
            .map(|i| {
                let taps = taps.clone();
                std::thread::spawn(move || {
                    Mfsr::new(REFERENCE_SEED ^ i, taps).nth(999).unwrap()
                })
            })
            .collect();
        let results: Vec<u16> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for (i, result) in results.into_iter().enumerate() {
            let expected = Mfsr::new(REFERENCE_SEED ^ i as u16, taps.clone())
                .nth(999)
                .unwrap();
            assert_eq!(result, expected);
        }
    }
}
