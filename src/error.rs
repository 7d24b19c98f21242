use thiserror::Error;

use crate::base32::DecodeError;

/// Represents errors that can occur during EzId operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EzIdError {
    /// Generator ID is outside `[0, max]`
    #[error("Generator ID {generator_id} is out of range. Allowed values are 0 to {max}")]
    GeneratorIdOutOfRange { generator_id: i64, max: u16 },

    /// Rendered identifier does not have the fixed length
    #[error("Identifier must be {expected} characters long, got {length}")]
    InvalidLength { length: usize, expected: usize },

    /// A separator is missing or sits at the wrong position
    #[error("Unexpected character '{found}' at position {position} of identifier")]
    InvalidSeparator { position: usize, found: char },

    /// Identifier body contains a character outside the alphabet
    #[error(transparent)]
    InvalidFormat(#[from] DecodeError),

    /// Clock moved backwards relative to the last recorded tick
    #[error("Clock moved backwards. Time now: {now} - last generated: {last}")]
    ClockMovedBackwards { now: u64, last: u64 },

    /// Tick does not fit in the timestamp field
    #[error("Tick {tick} does not fit in the timestamp field. Maximum is {max}")]
    TickOutOfRange { tick: u64, max: u64 },

    /// A typed identifier refused to be built from a raw value
    #[error("Cannot build identifier from value {value}: {reason}")]
    InvalidIdentifier { value: i64, reason: String },
}

impl EzIdError {
    /// Bad input or configuration: generator ID or identifier text
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::GeneratorIdOutOfRange { .. }
                | Self::InvalidLength { .. }
                | Self::InvalidSeparator { .. }
                | Self::InvalidFormat(_)
        )
    }

    /// Transient clock anomaly; the caller decides whether to retry
    pub fn is_clock_regression(&self) -> bool {
        matches!(self, Self::ClockMovedBackwards { .. })
    }
}
