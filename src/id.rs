//! Identifier values and their `XXX-XXXXXXX-XXX` text form

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::base32;
use crate::error::EzIdError;
use crate::extractor::IdExtractor;

/// Separator inserted for readability; never part of the alphabet
pub const SEPARATOR: char = '-';

/// Rendered length: 13 symbols plus 2 separators
pub const ID_LENGTH: usize = base32::I64_SYMBOLS + SEPARATOR_POSITIONS.len();

/// Character positions of the separators in the rendered text
pub const SEPARATOR_POSITIONS: [usize; 2] = [3, 11];

/// Render `value` as 13 Crockford symbols split 3-7-3
pub fn format_id(value: i64) -> String {
    let body = base32::encode_i64(value);
    let mut out = String::with_capacity(ID_LENGTH);
    for symbol in body.chars() {
        if SEPARATOR_POSITIONS.contains(&out.len()) {
            out.push(SEPARATOR);
        }
        out.push(symbol);
    }
    out
}

/// Parse the `XXX-XXXXXXX-XXX` form back to its value.
///
/// The text must be exactly [`ID_LENGTH`] characters with separators at
/// [`SEPARATOR_POSITIONS`] and alphabet symbols everywhere else.
pub fn parse_id(input: &str) -> Result<i64, EzIdError> {
    let length = input.chars().count();
    if length != ID_LENGTH {
        return Err(EzIdError::InvalidLength {
            length,
            expected: ID_LENGTH,
        });
    }

    let mut body = String::with_capacity(base32::I64_SYMBOLS);
    for (position, found) in input.chars().enumerate() {
        let separator_slot = SEPARATOR_POSITIONS.contains(&position);
        match (separator_slot, found == SEPARATOR) {
            (true, true) => {}
            (false, false) => body.push(found),
            _ => return Err(EzIdError::InvalidSeparator { position, found }),
        }
    }

    Ok(base32::decode_i64(&body)?)
}

/// A 64-bit identifier with its cached text rendering.
///
/// Equality, ordering and hashing use the integer value only.
#[derive(Debug, Clone)]
pub struct EzId {
    value: i64,
    text: String,
}

impl EzId {
    /// Value carried by the identifier returned from a failed [`EzId::try_parse`]
    pub const ERROR_VALUE: i64 = -1;

    pub fn new(value: i64) -> Self {
        Self {
            value,
            text: format_id(value),
        }
    }

    /// The sentinel identifier (value −1)
    pub fn error_id() -> Self {
        Self::new(Self::ERROR_VALUE)
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn parse(input: &str) -> Result<Self, EzIdError> {
        parse_id(input).map(Self::new)
    }

    /// Non-failing parse: `(true, id)` on success, `(false, EzId::error_id())`
    /// otherwise
    pub fn try_parse(input: &str) -> (bool, Self) {
        match Self::parse(input) {
            Ok(id) => (true, id),
            Err(_) => (false, Self::error_id()),
        }
    }

    /// Milliseconds since 1970 stored in the id
    #[inline]
    pub fn timestamp_millis(&self) -> u64 {
        IdExtractor.timestamp(self.value)
    }

    #[inline]
    pub fn generator_id(&self) -> u16 {
        IdExtractor.generator_id(self.value)
    }

    #[inline]
    pub fn sequence(&self) -> u16 {
        IdExtractor.sequence(self.value)
    }

    /// Creation time encoded in the id
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_millis() as i64)
    }
}

impl PartialEq for EzId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EzId {}

impl Hash for EzId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for EzId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EzId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for EzId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for EzId {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for EzId {
    type Err = EzIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EzId {
    type Error = EzIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<i64> for EzId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<EzId> for i64 {
    fn from(id: EzId) -> Self {
        id.value
    }
}

/// An identifier variant built from a raw 64-bit value.
///
/// Variants share the integer and its rendering; they differ only by type.
/// Implement by hand to validate raw values, or declare with [`ez_id_type!`].
///
/// [`ez_id_type!`]: crate::ez_id_type
pub trait Identifier: Sized {
    /// Build the variant, failing with [`EzIdError::InvalidIdentifier`] when
    /// the value is not acceptable for it
    fn from_raw(value: i64) -> Result<Self, EzIdError>;

    fn ez_id(&self) -> &EzId;
}

impl Identifier for EzId {
    fn from_raw(value: i64) -> Result<Self, EzIdError> {
        Ok(Self::new(value))
    }

    fn ez_id(&self) -> &EzId {
        self
    }
}

/// Declare a typed identifier backed by [`EzId`].
///
/// ```
/// ezid::ez_id_type! {
///     /// Identifies an order
///     pub struct OrderId;
/// }
///
/// let id = OrderId::new(123456789);
/// assert_eq!(id.to_string(), "2Q6-NP1R000-000");
/// assert_eq!("2Q6-NP1R000-000".parse::<OrderId>().unwrap(), id);
/// ```
#[macro_export]
macro_rules! ez_id_type {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name($crate::EzId);

        #[allow(dead_code)]
        impl $name {
            pub fn new(value: i64) -> Self {
                Self($crate::EzId::new(value))
            }

            pub fn value(&self) -> i64 {
                self.0.value()
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn parse(input: &str) -> ::std::result::Result<Self, $crate::EzIdError> {
                $crate::EzId::parse(input).map(Self)
            }

            pub fn try_parse(input: &str) -> (bool, Self) {
                let (parsed, id) = $crate::EzId::try_parse(input);
                (parsed, Self(id))
            }
        }

        impl $crate::Identifier for $name {
            fn from_raw(value: i64) -> ::std::result::Result<Self, $crate::EzIdError> {
                Ok(Self::new(value))
            }

            fn ez_id(&self) -> &$crate::EzId {
                &self.0
            }
        }

        impl ::std::convert::From<$crate::EzId> for $name {
            fn from(id: $crate::EzId) -> Self {
                Self(id)
            }
        }

        impl ::std::convert::From<$name> for $crate::EzId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::EzIdError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}
