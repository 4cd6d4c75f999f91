use crate::error::{EnigmaError, Result};
use crate::scrambler::{Scrambler, REFLECTOR_SLOT};
use serde::{Deserialize, Serialize};

/// Rotors I, II and III of the Enigma I
pub const ENIGMA_I_ROTORS: [&str; 3] = [
    "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    "BDFHJLCPRTXVZNYEIWGAKMUSQO",
];

/// Reflector A (UKW-A)
pub const ENIGMA_I_REFLECTOR: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";

/// Named wiring sets installed on top of a freshly built machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Historical wirings; needs the Latin alphabet
    #[default]
    EnigmaI,
    /// Keep the wirings generated from the slot seeds
    Seeded,
}

impl std::str::FromStr for Preset {
    type Err = EnigmaError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "enigma-i" | "enigmai" | "enigma1" => Ok(Self::EnigmaI),
            "seeded" | "none" => Ok(Self::Seeded),
            _ => Err(EnigmaError::UnknownPreset(s.to_string())),
        }
    }
}

impl Preset {
    /// Install the preset wirings. Rotors beyond the third keep their generated wiring.
    pub fn apply(self, scrambler: &mut Scrambler) -> Result<()> {
        match self {
            Preset::EnigmaI => {
                let count = scrambler.rotor_count().min(ENIGMA_I_ROTORS.len());
                for (i, wiring) in ENIGMA_I_ROTORS.iter().take(count).enumerate() {
                    scrambler.set_slot_wiring(i + 1, wiring)?;
                }
                scrambler.set_slot_wiring(REFLECTOR_SLOT, ENIGMA_I_REFLECTOR)
            }
            Preset::Seeded => Ok(()),
        }
    }
}
