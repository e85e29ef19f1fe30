//! Error types for mfsr-core.

use thiserror::Error;

/// Result type for mfsr-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid tap configuration.
///
/// Every variant is a caller mistake detected when the tap set is built.
/// Nothing is truncated, deduplicated or clamped to make a bad set usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No taps at all.
    #[error("invalid configuration: tap set is empty")]
    EmptyTapSet,

    /// An even number of taps allows a tied vote.
    #[error("invalid configuration: tap count must be odd, got {count}")]
    EvenTapCount { count: usize },

    /// Tap position outside the register.
    #[error("invalid configuration: tap position {position} out of range for {width}-bit register")]
    TapOutOfRange { position: u32, width: u32 },

    /// The same position listed twice.
    #[error("invalid configuration: duplicate tap position {position}")]
    DuplicateTap { position: u32 },
}

impl Error {
    /// All core errors belong to the invalid-configuration class.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::EmptyTapSet
                | Error::EvenTapCount { .. }
                | Error::TapOutOfRange { .. }
                | Error::DuplicateTap { .. }
        )
    }
}
