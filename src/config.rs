use crate::error::Result;
use crate::preset::Preset;
use crate::scrambler::Scrambler;

/// Start-up configuration for a machine and the shell driving it
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Number of rotors in the bank
    pub rotors: usize,
    /// Custom alphabet; `None` means the Latin alphabet
    pub alphabet: Option<String>,
    /// Wiring set installed after the bank is generated
    pub preset: Preset,
    /// Initial offset label, one symbol per rotor
    pub offsets: Option<String>,
    /// Uppercase input before it reaches the machine
    pub uppercase: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotors: 3,
            alphabet: None,
            preset: Preset::EnigmaI,
            offsets: None,
            uppercase: true,
        }
    }
}

impl MachineConfig {
    pub fn build(&self) -> Result<Scrambler> {
        let mut scrambler = match &self.alphabet {
            Some(symbols) => Scrambler::with_alphabet(self.rotors, symbols)?,
            None => Scrambler::new(self.rotors),
        };
        self.preset.apply(&mut scrambler)?;
        if let Some(label) = &self.offsets {
            scrambler.set_offset_label(label)?;
        }
        Ok(scrambler)
    }

    /// Apply the uppercase toggle to a line of input
    pub fn normalize(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}
