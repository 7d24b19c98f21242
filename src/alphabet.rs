//! Ordered symbol set with its inverse lookup

use std::collections::HashMap;

/// Crockford base32 symbols, excluding I, L, O and U
pub const CROCKFORD_SYMBOLS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Ordered symbols plus the symbol -> index mapping used for decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    reverse: HashMap<char, u8>,
}

impl Alphabet {
    /// Build an alphabet from the given symbols.
    ///
    /// A symbol that appears more than once keeps the index of its first
    /// occurrence; later duplicates cannot be decoded. Positions past 255 are
    /// not reachable by the 8-bit index and are left out of the inverse map.
    pub fn new(symbols: &str) -> Self {
        Self::from_symbols(symbols.chars())
    }

    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();
        let mut reverse = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if let Ok(index) = u8::try_from(index) {
                reverse.entry(symbol).or_insert(index);
            }
        }
        Self { symbols, reverse }
    }

    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, if any
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Index of `symbol`, if it belongs to the alphabet
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        self.reverse.get(&symbol).copied()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_match_input() {
        let alphabet = Alphabet::new("0123456789ABCDEF");
        assert_eq!(alphabet.symbols(), "0123456789ABCDEF".chars().collect::<Vec<_>>());
        assert_eq!(alphabet.len(), 16);
    }

    #[test]
    fn test_reverse_lookup() {
        let alphabet = Alphabet::new("XYZ123");
        assert_eq!(alphabet.index_of('X'), Some(0));
        assert_eq!(alphabet.index_of('Y'), Some(1));
        assert_eq!(alphabet.index_of('Z'), Some(2));
        assert_eq!(alphabet.index_of('1'), Some(3));
        assert_eq!(alphabet.index_of('2'), Some(4));
        assert_eq!(alphabet.index_of('3'), Some(5));
        assert_eq!(alphabet.index_of('A'), None);
    }

    #[test]
    fn test_empty_alphabet() {
        let alphabet = Alphabet::new("");
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.index_of('0'), None);
        assert_eq!(alphabet.symbol(0), None);
    }

    #[test]
    fn test_duplicates_keep_first_index() {
        let alphabet = Alphabet::new("ABA");
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.index_of('A'), Some(0));
        assert_eq!(alphabet.symbol(2), Some('A'));
    }

    #[test]
    fn test_crockford_excludes_ambiguous_letters() {
        let alphabet = Alphabet::new(CROCKFORD_SYMBOLS);
        assert_eq!(alphabet.len(), 32);
        for c in ['I', 'L', 'O', 'U'] {
            assert_eq!(alphabet.index_of(c), None, "{c} should not be in the alphabet");
        }
        assert_eq!(alphabet.to_string(), CROCKFORD_SYMBOLS);
    }
}
