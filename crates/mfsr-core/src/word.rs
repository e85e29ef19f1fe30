//! Fixed-width register words.
//!
//! The register width is the bit count of the unsigned primitive backing it.
//! Everything the shift register needs from that primitive (masks, shifts,
//! population count) goes through [`RegisterWord`], so the same feedback and
//! transition code serves every width.

use std::fmt::{Binary, Debug, LowerHex, UpperHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

/// An unsigned fixed-width integer usable as shift register contents.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`.
pub trait RegisterWord:
    Copy
    + Eq
    + Hash
    + Debug
    + Binary
    + LowerHex
    + UpperHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Register width W.
    const BITS: u32;
    /// All bits clear.
    const ZERO: Self;
    /// Only bit 0 set.
    const ONE: Self;
    /// All W bits set.
    const ALL_ONES: Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Widen to `u128`, used for parsing and display independent of width.
    fn to_u128(self) -> u128;

    /// Narrow from `u128`, `None` if the value does not fit in W bits.
    fn from_u128(value: u128) -> Option<Self>;

    /// Single-bit word with bit `position` set.
    #[inline]
    fn bit(position: u32) -> Self {
        Self::ONE << position
    }

    /// Word with only the most significant bit (W-1) set.
    #[inline]
    fn top_bit() -> Self {
        Self::ONE << (Self::BITS - 1)
    }

    /// Whether bit `position` is set.
    #[inline]
    fn test_bit(self, position: u32) -> bool {
        (self >> position) & Self::ONE == Self::ONE
    }
}

macro_rules! impl_register_word {
    ($($t:ty),*) => {
        $(
            impl RegisterWord for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL_ONES: Self = <$t>::MAX;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_u128(value: u128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_register_word!(u8, u16, u32, u64, u128);

/// Population count: the number of set bits in `x`.
///
/// ```
/// use mfsr_core::popcount;
///
/// assert_eq!(popcount(0u16), 0);
/// assert_eq!(popcount(0x95C1u16), 7);
/// assert_eq!(popcount(u64::MAX), 64);
/// ```
#[inline]
pub fn popcount<W: RegisterWord>(x: W) -> u32 {
    x.count_ones()
}
