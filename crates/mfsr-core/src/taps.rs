//! Validated tap configuration.
//!
//! A tap set is the list of register bit positions that vote on the feedback
//! bit. It is checked once, when built, so a long-running sequence can never
//! start from a configuration that makes the vote ambiguous:
//!
//! - at least one tap
//! - every position inside the register, `[0, W)`
//! - no position listed twice
//! - an odd number of taps, so the vote cannot tie
//!
//! The bit mask (1s exactly at the tap positions) is derived at construction
//! and reused by every evaluation.

use std::fmt;

use crate::error::{Error, Result};
use crate::word::RegisterWord;

/// An immutable, validated set of tap positions for a `W`-bit register.
///
/// Positions keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>", bound = "")
)]
pub struct TapSet<W: RegisterWord> {
    positions: Vec<u32>,
    mask: W,
}

impl<W: RegisterWord> TapSet<W> {
    /// Build a tap set, rejecting any configuration that is not an odd number
    /// of distinct in-range positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use mfsr_core::{Error, TapSet};
    ///
    /// let taps = TapSet::<u16>::new([0, 4, 7]).unwrap();
    /// assert_eq!(taps.mask(), 0x0091);
    ///
    /// assert_eq!(
    ///     TapSet::<u16>::new([0, 4]),
    ///     Err(Error::EvenTapCount { count: 2 })
    /// );
    /// ```
    pub fn new(positions: impl IntoIterator<Item = u32>) -> Result<Self> {
        let positions: Vec<u32> = positions.into_iter().collect();

        if positions.is_empty() {
            return Err(Error::EmptyTapSet);
        }

        let mut mask = W::ZERO;
        for &position in &positions {
            if position >= W::BITS {
                return Err(Error::TapOutOfRange {
                    position,
                    width: W::BITS,
                });
            }
            let bit = W::bit(position);
            if mask & bit != W::ZERO {
                return Err(Error::DuplicateTap { position });
            }
            mask = mask | bit;
        }

        if positions.len() % 2 == 0 {
            return Err(Error::EvenTapCount {
                count: positions.len(),
            });
        }

        tracing::debug!(
            width = W::BITS,
            taps = ?positions,
            mask = format_args!("{:#x}", mask),
            "tap set accepted"
        );

        Ok(Self { positions, mask })
    }

    /// Tap positions, in construction order.
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    /// Word with 1s exactly at the tap positions.
    #[inline]
    pub fn mask(&self) -> W {
        self.mask
    }

    /// Number of taps (always odd).
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a valid tap set has at least one tap.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether `position` is one of the taps.
    pub fn contains(&self, position: u32) -> bool {
        position < W::BITS && self.mask.test_bit(position)
    }

    /// Smallest number of agreeing taps that forms a majority: `len / 2 + 1`.
    pub fn majority(&self) -> usize {
        self.positions.len() / 2 + 1
    }
}

impl<W: RegisterWord> TryFrom<Vec<u32>> for TapSet<W> {
    type Error = Error;

    fn try_from(positions: Vec<u32>) -> Result<Self> {
        Self::new(positions)
    }
}

impl<W: RegisterWord> From<TapSet<W>> for Vec<u32> {
    fn from(taps: TapSet<W>) -> Self {
        taps.positions
    }
}

impl<W: RegisterWord> fmt::Display for TapSet<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "}}")
    }
}
