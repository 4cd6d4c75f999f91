//! Enigma - rotor cipher machine simulator
//!
//! A chain of rotating substitution wheels (rotors) terminated by a fixed
//! reflecting wheel. Every symbol steps the rotor bank like an odometer and
//! then travels through the rotors, the reflector, and back out through the
//! rotors in reverse, so the same operation both encodes and decodes.
//!
//! ## Signal Path
//!
//! ```text
//! Symbol → Step → Rotor 1 … Rotor N → Reflector → Rotor N … Rotor 1 → Symbol
//! ```
//!
//! - **Step**: rotor 1 always advances; each next rotor advances only when
//!   the previous one completed a revolution
//! - **Rotor**: permutation of the alphabet, shifted by the rotor's offset
//! - **Reflector**: pairs symbols up (an involution), which makes the whole
//!   machine its own inverse
//!
//! Symbols outside the alphabet pass through untouched and do not step the rotors.
//!
//! ## Example
//!
//! ```
//! use enigma::{Preset, Scrambler};
//!
//! let mut machine = Scrambler::new(3);
//! Preset::EnigmaI.apply(&mut machine).unwrap();
//!
//! let cipher = machine.encode_text("HELLO WORLD");
//! assert_eq!(cipher, "RWXBI YPEAJ");
//!
//! machine.set_offset_label("AAA").unwrap();
//! assert_eq!(machine.encode_text(&cipher), "HELLO WORLD");
//! ```

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod error;
pub mod preset;
pub mod reflector;
pub mod rotor;
pub mod scrambler;
pub mod seed;
pub mod settings;

pub use alphabet::Alphabet;
pub use config::MachineConfig;
pub use error::{EnigmaError, Result};
pub use preset::Preset;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use scrambler::Scrambler;
pub use seed::Seed;
pub use settings::{MachineSettings, RotorSettings};
