use crate::config::MachineConfig;
use crate::error::Result;

/// Render the machine `config` describes, as tables or as JSON settings
pub fn show_status(config: &MachineConfig, json: bool) -> Result<String> {
    let scrambler = config.build()?;
    if json {
        return scrambler.settings().to_json();
    }

    let mut output = String::new();
    output.push_str(&format!("Alphabet: {}\n", scrambler.alphabet()));
    output.push_str(&format!("Rotors: {}\n", scrambler.rotor_count()));
    output.push_str(&format!("Offsets: {}\n", scrambler.offset_label()));
    output.push('\n');
    output.push_str(&scrambler.status());
    output.push('\n');
    Ok(output)
}
