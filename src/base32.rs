//! Base32 encoding and decoding for EzId
//!
//! Bytes are consumed as a continuous MSB-first bit stream and emitted five
//! bits per symbol. The free functions use the Crockford alphabet; other
//! alphabets go through [`Base32::new`].

use once_cell::sync::Lazy;

use crate::alphabet::{Alphabet, CROCKFORD_SYMBOLS};

const BYTE_BITS: u32 = 8;
const SYMBOL_BITS: u32 = 5;
const SYMBOL_MASK: u32 = 0x1F;

/// Symbols needed to render one i64 (64 / 5, rounded up)
pub const I64_SYMBOLS: usize = 13;

/// Shared Crockford codec
pub static CROCKFORD: Lazy<Base32> = Lazy::new(|| Base32 {
    alphabet: Alphabet::new(CROCKFORD_SYMBOLS),
});

/// Errors that can occur during base32 decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input contains a character outside the alphabet
    #[error("Invalid character '{character}' is not part of the alphabet [{alphabet}]")]
    InvalidCharacter { character: char, alphabet: String },
}

/// Errors raised when building a codec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("Alphabet has {len} symbols, base32 needs at least 32")]
    TooShort { len: usize },
}

/// Radix-32 codec over an immutable alphabet
#[derive(Debug, Clone)]
pub struct Base32 {
    alphabet: Alphabet,
}

impl Base32 {
    /// Build a codec. Only the first 32 symbols are ever emitted.
    pub fn new(alphabet: Alphabet) -> Result<Self, AlphabetError> {
        if alphabet.len() < 32 {
            return Err(AlphabetError::TooShort {
                len: alphabet.len(),
            });
        }
        Ok(Self { alphabet })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encode bytes, padding the trailing partial symbol with zero bits
    pub fn encode(&self, input: &[u8]) -> String {
        let mut out = String::with_capacity((input.len() * 8).div_ceil(5));
        let mut acc = 0u32;
        let mut bits = 0u32;

        for &byte in input {
            acc = (acc << BYTE_BITS) | u32::from(byte);
            bits += BYTE_BITS;
            while bits >= SYMBOL_BITS {
                bits -= SYMBOL_BITS;
                self.push_symbol(&mut out, (acc >> bits) & SYMBOL_MASK);
            }
        }

        if bits > 0 {
            self.push_symbol(&mut out, (acc << (SYMBOL_BITS - bits)) & SYMBOL_MASK);
        }
        out
    }

    /// Encode the little-endian bytes of `value` (13 symbols)
    pub fn encode_i64(&self, value: i64) -> String {
        self.encode(&value.to_le_bytes())
    }

    /// Decode text back to bytes. Trailing bits that do not fill a byte are
    /// encoder padding and are dropped.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
        let mut acc = 0u32;
        let mut bits = 0u32;

        for character in encoded.chars() {
            let value = self.symbol_value(character)?;
            acc = (acc << SYMBOL_BITS) | value;
            bits += SYMBOL_BITS;
            if bits >= BYTE_BITS {
                bits -= BYTE_BITS;
                out.push(((acc >> bits) & 0xFF) as u8);
            }
        }

        Ok(out)
    }

    /// Decode text to an i64 using the byte order of [`Base32::encode_i64`].
    ///
    /// Length is not validated here: missing bytes read as zero and bytes past
    /// the eighth are ignored.
    pub fn decode_i64(&self, encoded: &str) -> Result<i64, DecodeError> {
        let bytes = self.decode(encoded)?;
        let mut le = [0u8; 8];
        let n = bytes.len().min(le.len());
        le[..n].copy_from_slice(&bytes[..n]);
        Ok(i64::from_le_bytes(le))
    }

    /// `index` is masked to 5 bits and `new` guarantees 32 symbols
    #[inline]
    fn push_symbol(&self, out: &mut String, index: u32) {
        out.push(self.alphabet.symbols()[index as usize]);
    }

    #[inline]
    fn symbol_value(&self, character: char) -> Result<u32, DecodeError> {
        match self.alphabet.index_of(character) {
            Some(index) if u32::from(index) <= SYMBOL_MASK => Ok(u32::from(index)),
            _ => Err(DecodeError::InvalidCharacter {
                character,
                alphabet: self.alphabet.to_string(),
            }),
        }
    }
}

/// Encode bytes with the Crockford alphabet
pub fn encode(input: &[u8]) -> String {
    CROCKFORD.encode(input)
}

/// Decode Crockford text to bytes
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    CROCKFORD.decode(encoded)
}

/// Encode an i64 with the Crockford alphabet
pub fn encode_i64(value: i64) -> String {
    CROCKFORD.encode_i64(value)
}

/// Decode Crockford text to an i64
pub fn decode_i64(encoded: &str) -> Result<i64, DecodeError> {
    CROCKFORD.decode_i64(encoded)
}
