use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Snapshot of a complete machine configuration.
///
/// Enough to build an independent [`Scrambler`](crate::Scrambler) in the
/// same state, e.g. one machine per worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    pub alphabet: String,
    pub rotors: Vec<RotorSettings>,
    pub reflector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSettings {
    pub wiring: String,
    pub offset: usize,
}

impl MachineSettings {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
