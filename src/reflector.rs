use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::seed::Seed;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Fixed reflecting wheel: an involution over an even-length alphabet.
///
/// A generated pairing never maps a symbol to itself. A pairing installed
/// through [`Reflector::set_pairing`] is only required to be symmetric.
#[derive(Debug, Clone)]
pub struct Reflector {
    alphabet: Arc<Alphabet>,
    pairing: Vec<char>,
}

impl Reflector {
    /// Generate a random fixed-point-free pairing over `alphabet`.
    /// An odd-length alphabet cannot be paired, so the Latin alphabet is used instead.
    pub fn new(seed: Seed, alphabet: Arc<Alphabet>) -> Self {
        let alphabet = if alphabet.is_reflectable() {
            alphabet
        } else {
            Arc::new(Alphabet::latin())
        };
        let pairing = generate_pairing(seed, &alphabet);
        Self { alphabet, pairing }
    }

    /// Like [`Reflector::new`], falling back to the Latin alphabet when
    /// `symbols` is absent or not a valid reflector alphabet.
    pub fn from_symbols(seed: Seed, symbols: Option<&str>) -> Self {
        let alphabet = symbols
            .and_then(|s| Alphabet::reflectable(s).ok())
            .unwrap_or_default();
        Self::new(seed, Arc::new(alphabet))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn pairing(&self) -> &[char] {
        &self.pairing
    }

    /// Replace the pairing. Nothing changes unless every check passes.
    pub fn set_pairing(&mut self, candidate: &str) -> Result<()> {
        let candidate: Vec<char> = candidate.chars().collect();
        self.alphabet.check_table(&candidate)?;

        for (i, &partner) in candidate.iter().enumerate() {
            let back = candidate[self.alphabet.require(partner)?];
            if back != self.alphabet.symbols()[i] {
                return Err(EnigmaError::NotInvolution(self.alphabet.symbols()[i]));
            }
        }

        self.pairing = candidate;
        Ok(())
    }

    /// Partner of `symbol`, or `None` if it is outside the alphabet
    pub fn translate(&self, symbol: char) -> Option<char> {
        self.alphabet.index_of(symbol).map(|i| self.pairing[i])
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.alphabet)?;
        writeln!(f, "{}", "|".repeat(self.alphabet.len()))?;
        write!(f, "{}", self.pairing.iter().collect::<String>())
    }
}

/// Pair each unpaired position with a random partner from the remaining pool
fn generate_pairing(seed: Seed, alphabet: &Alphabet) -> Vec<char> {
    let mut rng = seed.rng();
    let symbols = alphabet.symbols();
    let mut pairing = symbols.to_vec();
    let mut pool: Vec<usize> = (0..symbols.len()).collect();

    for i in 0..symbols.len() {
        match pool.iter().position(|&p| p == i) {
            Some(at) => {
                pool.remove(at);
            }
            None => continue,
        }

        let partner = pool.remove(rng.gen_range(0..pool.len()));
        pairing[i] = symbols[partner];
        pairing[partner] = symbols[i];
    }

    pairing
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFLECTOR_A: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";

    fn latin_reflector(seed: u64) -> Reflector {
        Reflector::new(Seed::Fixed(seed), Arc::new(Alphabet::latin()))
    }

    #[test]
    fn test_generated_pairing_is_fixed_point_free_involution() {
        for seed in 0..32 {
            let reflector = latin_reflector(seed);
            for &symbol in reflector.alphabet().symbols() {
                let partner = reflector.translate(symbol).unwrap();
                assert_ne!(partner, symbol, "seed {} maps {} to itself", seed, symbol);
                assert_eq!(reflector.translate(partner), Some(symbol));
            }
        }
    }

    #[test]
    fn test_same_seed_same_pairing() {
        assert_eq!(latin_reflector(0).pairing(), latin_reflector(0).pairing());
    }

    #[test]
    fn test_two_symbol_alphabet_swaps() {
        let reflector = Reflector::from_symbols(Seed::Entropy, Some("01"));
        assert_eq!(reflector.pairing(), &['1', '0']);
    }

    #[test]
    fn test_invalid_alphabet_falls_back_to_latin() {
        for symbols in [None, Some(""), Some("ABC"), Some("ABAB")] {
            let reflector = Reflector::from_symbols(Seed::Fixed(1), symbols);
            assert_eq!(reflector.alphabet(), &Alphabet::latin());
        }
        let odd = Arc::new(Alphabet::new("XYZ").unwrap());
        assert_eq!(Reflector::new(Seed::Fixed(1), odd).alphabet().len(), 26);
    }

    #[test]
    fn test_set_pairing_accepts_reflector_a() {
        let mut reflector = latin_reflector(0);
        reflector.set_pairing(REFLECTOR_A).unwrap();
        assert_eq!(reflector.translate('A'), Some('E'));
        assert_eq!(reflector.translate('E'), Some('A'));
        assert_eq!(reflector.translate('a'), None);
    }

    #[test]
    fn test_set_pairing_rejects_bad_tables_without_mutation() {
        let mut reflector = latin_reflector(4);
        let before = reflector.pairing().to_vec();

        assert!(matches!(
            reflector.set_pairing("EJM"),
            Err(EnigmaError::LengthMismatch {
                expected: 26,
                actual: 3
            })
        ));
        assert!(matches!(
            reflector.set_pairing("EJMZALYXVBWFCRQUONTSPIKHG#"),
            Err(EnigmaError::UnknownSymbol('#'))
        ));
        // A -> B but B -> A is missing
        assert!(matches!(
            reflector.set_pairing("BCDEFGHIJKLMNOPQRSTUVWXYZA"),
            Err(EnigmaError::NotInvolution('A'))
        ));
        assert_eq!(reflector.pairing(), before.as_slice());
    }

    #[test]
    fn test_set_pairing_allows_fixed_points() {
        let mut reflector = latin_reflector(0);
        reflector.set_pairing("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert_eq!(reflector.translate('Q'), Some('Q'));
    }

    #[test]
    fn test_display_table() {
        let mut reflector = Reflector::from_symbols(Seed::Fixed(0), Some("ABCD"));
        reflector.set_pairing("BADC").unwrap();
        assert_eq!(reflector.to_string(), "ABCD\n||||\nBADC");
    }
}
