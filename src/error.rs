use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("Alphabet is empty")]
    Empty,

    #[error("Alphabet length {0} is odd. A reflector needs an even number of symbols")]
    OddLength(usize),

    #[error("Symbol '{0}' appears more than once")]
    DuplicateSymbols(char),

    #[error("Length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Symbol '{0}' is not in the alphabet")]
    UnknownSymbol(char),

    #[error("Pairing is not an involution: '{0}' does not map back to itself")]
    NotInvolution(char),

    #[error("Slot {0} does not exist")]
    UnknownSlot(usize),

    #[error("Rotor count must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnigmaError>;
