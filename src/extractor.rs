use crate::config::{
    GENERATOR_ID_SHIFT, MAX_GENERATOR_ID, MAX_SEQUENCE, MAX_TICK, TIMESTAMP_SHIFT,
};

/// EzId component extractor
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct IdExtractor;

impl IdExtractor {
    /// Extract timestamp component (milliseconds since 1970) from an id
    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> u64 {
        ((id as u64) >> TIMESTAMP_SHIFT) & MAX_TICK
    }

    /// Extract generator component from an id
    #[inline(always)]
    pub fn generator_id(&self, id: i64) -> u16 {
        (((id as u64) >> GENERATOR_ID_SHIFT) & MAX_GENERATOR_ID as u64) as u16
    }

    /// Extract sequence component from an id
    #[inline(always)]
    pub fn sequence(&self, id: i64) -> u16 {
        ((id as u64) & MAX_SEQUENCE as u64) as u16
    }

    /// Decompose an id into timestamp, generator ID and sequence
    #[inline]
    pub fn decompose(&self, id: i64) -> (u64, u16, u16) {
        (self.timestamp(id), self.generator_id(id), self.sequence(id))
    }

    /// Inverse of [`IdExtractor::decompose`]; components are masked to their fields
    #[inline]
    pub fn compose(&self, timestamp: u64, generator_id: u16, sequence: u16) -> i64 {
        (((timestamp & MAX_TICK) << TIMESTAMP_SHIFT)
            | (((generator_id & MAX_GENERATOR_ID) as u64) << GENERATOR_ID_SHIFT)
            | (sequence & MAX_SEQUENCE) as u64) as i64
    }
}
