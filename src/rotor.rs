use crate::alphabet::{first_duplicate, wrap, Alphabet};
use crate::error::{EnigmaError, Result};
use crate::seed::Seed;
use rand::seq::SliceRandom;
use std::fmt;
use std::sync::Arc;

/// Rotating substitution wheel.
///
/// The wiring is a permutation of the alphabet. The offset shifts the
/// entry point into the wiring and advances by one on every [`Rotor::step`].
#[derive(Debug, Clone)]
pub struct Rotor {
    alphabet: Arc<Alphabet>,
    wiring: Vec<char>,
    offset: usize,
}

impl Rotor {
    /// Create a rotor at offset 0 with a random permutation of `alphabet`
    pub fn new(seed: Seed, alphabet: Arc<Alphabet>) -> Self {
        let mut rng = seed.rng();
        let mut wiring = alphabet.symbols().to_vec();
        wiring.shuffle(&mut rng);

        Self {
            alphabet,
            wiring,
            offset: 0,
        }
    }

    /// Like [`Rotor::new`], falling back to the Latin alphabet when
    /// `symbols` is absent, empty or has duplicates.
    pub fn from_symbols(seed: Seed, symbols: Option<&str>) -> Self {
        let alphabet = symbols
            .and_then(|s| Alphabet::new(s).ok())
            .unwrap_or_default();
        Self::new(seed, Arc::new(alphabet))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn wiring(&self) -> &[char] {
        &self.wiring
    }

    /// Replace the wiring with a permutation of the alphabet.
    ///
    /// Rejects tables of the wrong length, with foreign symbols, or with a
    /// repeated symbol. The rotor is untouched on error.
    pub fn set_wiring(&mut self, candidate: &str) -> Result<()> {
        let candidate: Vec<char> = candidate.chars().collect();
        self.alphabet.check_table(&candidate)?;
        if let Some(dup) = first_duplicate(&candidate) {
            return Err(EnigmaError::DuplicateSymbols(dup));
        }

        self.wiring = candidate;
        Ok(())
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Alphabet symbol at the current offset
    pub fn offset_symbol(&self) -> char {
        self.alphabet.symbols()[self.offset]
    }

    /// Set the offset, folding any value into range. Returns the stored offset.
    pub fn set_offset(&mut self, offset: i64) -> usize {
        self.offset = wrap(offset, self.alphabet.len());
        self.offset
    }

    /// Set the offset to the position of `symbol` in the alphabet
    pub fn set_offset_symbol(&mut self, symbol: char) -> Result<()> {
        self.offset = self.alphabet.require(symbol)?;
        Ok(())
    }

    /// Advance by one position. Returns true when the rotor wrapped back to 0.
    pub fn step(&mut self) -> bool {
        self.offset += 1;
        if self.offset >= self.alphabet.len() {
            self.offset = 0;
            true
        } else {
            false
        }
    }

    /// Alphabet side to wiring side
    pub fn forward(&self, symbol: char) -> Option<char> {
        let index = self.alphabet.index_of(symbol)?;
        let len = self.wiring.len();
        Some(self.wiring[wrap((index + self.offset) as i64, len)])
    }

    /// Wiring side back to alphabet side; inverse of [`Rotor::forward`]
    pub fn backward(&self, symbol: char) -> Option<char> {
        let index = self.wiring.iter().position(|&s| s == symbol)?;
        let len = self.alphabet.len();
        Some(self.alphabet.symbols()[wrap(index as i64 - self.offset as i64, len)])
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.alphabet)?;
        writeln!(f, "{}", "|".repeat(self.alphabet.len()))?;
        writeln!(f, "{}", self.wiring.iter().collect::<String>())?;
        write!(f, "{}@", "-".repeat(self.offset))
    }
}
