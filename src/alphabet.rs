use crate::error::{EnigmaError, Result};
use std::collections::HashSet;
use std::fmt;

/// The standard 26-letter Latin alphabet used when nothing else is supplied
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fold `n` into the cycle `[0, cycle)`, negative values included.
///
/// Panics when `cycle` is zero.
pub fn wrap(n: i64, cycle: usize) -> usize {
    debug_assert!(cycle > 0, "wrap called with an empty cycle");
    n.rem_euclid(cycle as i64) as usize
}

/// First symbol that occurs twice, scanning left to right
pub fn first_duplicate(symbols: &[char]) -> Option<char> {
    let mut seen = HashSet::with_capacity(symbols.len());
    symbols.iter().copied().find(|&symbol| !seen.insert(symbol))
}

/// True if no two positions hold the same symbol. An empty sequence qualifies.
pub fn has_no_duplicates(symbols: &[char]) -> bool {
    first_duplicate(symbols).is_none()
}

/// Ordered set of distinct symbols a rotor, reflector or scrambler operates over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet suitable for a rotor: non-empty, no duplicates
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(EnigmaError::Empty);
        }
        if let Some(dup) = first_duplicate(&symbols) {
            return Err(EnigmaError::DuplicateSymbols(dup));
        }
        Ok(Self { symbols })
    }

    /// Build an alphabet a reflector can pair up: non-empty, even length, no duplicates
    pub fn reflectable(symbols: &str) -> Result<Self> {
        let count = symbols.chars().count();
        if count == 0 {
            return Err(EnigmaError::Empty);
        }
        if count % 2 != 0 {
            return Err(EnigmaError::OddLength(count));
        }
        Self::new(symbols)
    }

    pub fn latin() -> Self {
        Self {
            symbols: LATIN.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether a fixed-point-free pairing of this alphabet can exist
    pub fn is_reflectable(&self) -> bool {
        !self.symbols.is_empty() && self.symbols.len() % 2 == 0
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Index of `symbol`, or `UnknownSymbol`
    pub fn require(&self, symbol: char) -> Result<usize> {
        self.index_of(symbol).ok_or(EnigmaError::UnknownSymbol(symbol))
    }

    /// Check that `candidate` has exactly one symbol per alphabet position
    /// and uses only alphabet symbols.
    pub(crate) fn check_table(&self, candidate: &[char]) -> Result<()> {
        if candidate.len() != self.len() {
            return Err(EnigmaError::LengthMismatch {
                expected: self.len(),
                actual: candidate.len(),
            });
        }
        for &symbol in candidate {
            self.require(symbol)?;
        }
        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
