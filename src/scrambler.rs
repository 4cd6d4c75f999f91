//! The rotor bank, its reflector and the per-symbol signal path.
//!
//! ```text
//! input ─► step ─► rotor 0 ─► rotor 1 ─► … ─► rotor n-1 ─┐
//!                                                        reflector
//! output ◄──────── rotor 0 ◄─ rotor 1 ◄─ … ◄─ rotor n-1 ◄┘
//! ```
//!
//! Because the reflector is an involution and every rotor pass is undone
//! by the matching backward pass, encoding is its own inverse when both
//! sides start from the same offsets.

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::seed::Seed;
use crate::settings::{MachineSettings, RotorSettings};
use std::sync::Arc;

/// Slot number addressing the reflector in [`Scrambler::slot_wiring`]
pub const REFLECTOR_SLOT: usize = 0;

/// Seed used for the reflector whenever the bank is regenerated
const REFLECTOR_SEED: u64 = 0;

fn rotor_seed(index: usize) -> Seed {
    Seed::Fixed(index as u64 + 1)
}

#[derive(Debug, Clone)]
pub struct Scrambler {
    alphabet: Arc<Alphabet>,
    rotors: Vec<Rotor>,
    reflector: Reflector,
}

impl Scrambler {
    /// Machine over the Latin alphabet with `rotor_count` generated rotors
    pub fn new(rotor_count: usize) -> Self {
        Self::build(Arc::new(Alphabet::latin()), rotor_count)
    }

    /// Machine over a custom alphabet, which must have an even number of distinct symbols
    pub fn with_alphabet(rotor_count: usize, symbols: &str) -> Result<Self> {
        let alphabet = Alphabet::reflectable(symbols)?;
        Ok(Self::build(Arc::new(alphabet), rotor_count))
    }

    /// Rebuild a machine from a settings snapshot. Offsets out of range are folded back in.
    pub fn from_settings(settings: &MachineSettings) -> Result<Self> {
        let mut scrambler = Self::with_alphabet(settings.rotors.len(), &settings.alphabet)?;
        scrambler.set_slot_wiring(REFLECTOR_SLOT, &settings.reflector)?;
        for (i, rotor) in settings.rotors.iter().enumerate() {
            scrambler.set_slot_wiring(i + 1, &rotor.wiring)?;
            scrambler.rotors[i].set_offset(rotor.offset as i64);
        }
        Ok(scrambler)
    }

    fn build(alphabet: Arc<Alphabet>, rotor_count: usize) -> Self {
        let rotors = (0..rotor_count)
            .map(|i| Rotor::new(rotor_seed(i), Arc::clone(&alphabet)))
            .collect();
        let reflector = Reflector::new(Seed::Fixed(REFLECTOR_SEED), Arc::clone(&alphabet));
        Self {
            alphabet,
            rotors,
            reflector,
        }
    }

    /// Regenerate every rotor and the reflector from their fixed slot seeds.
    ///
    /// Rotor `i` is seeded with `i + 1`, the reflector with 0. Any wiring,
    /// pairing or offset set earlier is discarded.
    pub fn configure(&mut self, rotor_count: usize) {
        *self = Self::build(Arc::clone(&self.alphabet), rotor_count);
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Switch to a new alphabet and regenerate the whole bank
    pub fn set_alphabet(&mut self, symbols: &str) -> Result<()> {
        self.alphabet = Arc::new(Alphabet::reflectable(symbols)?);
        self.configure(self.rotors.len());
        Ok(())
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Change the number of rotors. Regenerates the whole bank.
    pub fn set_rotor_count(&mut self, count: i64) -> Result<()> {
        if count < 0 {
            return Err(EnigmaError::NegativeCount(count));
        }
        self.configure(count as usize);
        Ok(())
    }

    /// Wiring of a slot: 0 is the reflector pairing, `k` is rotor `k - 1`
    pub fn slot_wiring(&self, slot: usize) -> Result<String> {
        let table = match slot {
            REFLECTOR_SLOT => self.reflector.pairing(),
            k => self
                .rotors
                .get(k - 1)
                .ok_or(EnigmaError::UnknownSlot(slot))?
                .wiring(),
        };
        Ok(table.iter().collect())
    }

    pub fn set_slot_wiring(&mut self, slot: usize, wiring: &str) -> Result<()> {
        match slot {
            REFLECTOR_SLOT => self.reflector.set_pairing(wiring),
            k => self
                .rotors
                .get_mut(k - 1)
                .ok_or(EnigmaError::UnknownSlot(slot))?
                .set_wiring(wiring),
        }
    }

    /// Offset indices in rotor order
    pub fn offsets(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::offset).collect()
    }

    /// Offsets as alphabet symbols, one per rotor
    pub fn offset_label(&self) -> String {
        self.rotors.iter().map(Rotor::offset_symbol).collect()
    }

    /// Set every rotor's offset from a label of one alphabet symbol per rotor.
    ///
    /// The whole label is resolved before any rotor moves, so a bad label
    /// leaves all offsets as they were.
    pub fn set_offset_label(&mut self, label: &str) -> Result<()> {
        let label: Vec<char> = label.chars().collect();
        if label.len() != self.rotors.len() {
            return Err(EnigmaError::LengthMismatch {
                expected: self.rotors.len(),
                actual: label.len(),
            });
        }
        let indices = label
            .iter()
            .map(|&symbol| self.alphabet.require(symbol))
            .collect::<Result<Vec<_>>>()?;

        for (rotor, index) in self.rotors.iter_mut().zip(indices) {
            rotor.set_offset(index as i64);
        }
        Ok(())
    }

    /// Encode (or, identically, decode) one symbol.
    ///
    /// Symbols outside the alphabet come back unchanged and do not step the rotors.
    pub fn encode(&mut self, symbol: char) -> char {
        if !self.alphabet.contains(symbol) {
            return symbol;
        }

        self.step();

        // Every rotor and the reflector share the alphabet, so each pass maps
        // a member to a member.
        let mut signal = symbol;
        for rotor in &self.rotors {
            signal = rotor.forward(signal).unwrap_or(signal);
        }
        signal = self.reflector.translate(signal).unwrap_or(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.backward(signal).unwrap_or(signal);
        }
        signal
    }

    /// Encode every symbol of `text` in order, carrying rotor state across the call
    pub fn encode_text(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encode(c)).collect()
    }

    /// Odometer carry: step rotor 0, and each following rotor only if the
    /// one before it just wrapped.
    fn step(&mut self) {
        for rotor in &mut self.rotors {
            if !rotor.step() {
                break;
            }
        }
    }

    /// Text rendering of every rotor table and the reflector table
    pub fn status(&self) -> String {
        let mut output = String::new();
        for (i, rotor) in self.rotors.iter().enumerate() {
            output.push_str(&format!("Rotor {}:\n{}\n\n", i + 1, rotor));
        }
        output.push_str(&format!("Reflector:\n{}", self.reflector));
        output
    }

    pub fn settings(&self) -> MachineSettings {
        MachineSettings {
            alphabet: self.alphabet.to_string(),
            rotors: self
                .rotors
                .iter()
                .map(|rotor| RotorSettings {
                    wiring: rotor.wiring().iter().collect(),
                    offset: rotor.offset(),
                })
                .collect(),
            reflector: self.reflector.pairing().iter().collect(),
        }
    }
}
