//! # EzId
//!
//! Snowflake-style 64-bit identifiers rendered as human friendly Crockford
//! base32 text, e.g. `2Q6-NP1R000-000`.
//!
//! Identifiers are:
//! - 📈 Time-sorted (41-bit millisecond timestamp since 1970)
//! - 🔢 Unique per generator ID (10 bits, 0-1023) and millisecond (12-bit sequence)
//! - 🔒 Thread-safe
//! - 👀 Readable: no I, L, O or U in the text form
//!
//! ```
//! use ezid::{EzId, IdGenerator};
//!
//! let generator = IdGenerator::new(1).unwrap();
//! let id = generator.next_ez_id().unwrap();
//! assert_eq!(EzId::parse(id.as_str()).unwrap(), id);
//! ```

#![forbid(unsafe_code)]

mod alphabet;
pub mod base32;
mod config;
mod error;
mod extractor;
mod generator;
mod id;

#[cfg(test)]
pub mod tests;

pub use alphabet::{Alphabet, CROCKFORD_SYMBOLS};
pub use base32::{AlphabetError, Base32, DecodeError};
pub use config::{
    EzIdConfig, EzIdConfigBuilder, EzIdConfigError, GENERATOR_ID_BITS, GENERATOR_ID_SHIFT,
    MAX_GENERATOR_ID, MAX_SEQUENCE, MAX_TICK, SEQUENCE_BITS, TIMESTAMP_BITS, TIMESTAMP_SHIFT,
};
pub use error::EzIdError;
pub use extractor::IdExtractor;
pub use generator::time::{unix_time_ms, MonotonicClock, SystemClock, TickSource};
pub use generator::{EzIdGenerator, IdGenerator};
pub use id::{format_id, parse_id, EzId, Identifier, ID_LENGTH, SEPARATOR, SEPARATOR_POSITIONS};
