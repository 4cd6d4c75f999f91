use crate::config::MachineConfig;
use crate::error::Result;

/// Build a machine from `config` and run `text` through it once
pub fn encode_once(config: &MachineConfig, text: &str) -> Result<String> {
    let mut scrambler = config.build()?;
    Ok(scrambler.encode_text(&config.normalize(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    #[test]
    fn test_encode_once_is_self_inverse() {
        let config = MachineConfig {
            offsets: Some("MCK".into()),
            ..Default::default()
        };
        let cipher = encode_once(&config, "Enigma machine").unwrap();
        assert_eq!(encode_once(&config, &cipher).unwrap(), "ENIGMA MACHINE");
    }

    #[test]
    fn test_encode_once_keeps_case_when_asked() {
        let config = MachineConfig {
            alphabet: Some("abcdefghijklmnopqrstuvwxyz".into()),
            preset: Preset::Seeded,
            uppercase: false,
            ..Default::default()
        };
        let cipher = encode_once(&config, "abc XYZ").unwrap();
        assert!(cipher.ends_with(" XYZ"));
        assert_eq!(encode_once(&config, &cipher).unwrap(), "abc XYZ");
    }
}
