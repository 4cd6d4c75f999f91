use crate::cli::args::split_arguments;
use crate::config::MachineConfig;
use crate::error::Result;
use crate::scrambler::{Scrambler, REFLECTOR_SLOT};
use std::io::{BufRead, Write};

const BANNER: &str = "\
╔═╗ ╔╗╔ ╦ ╔═╗ ╔╦╗ ╔═╗
╠╣  ║║║ ║ ║ ╦ ║║║ ╠═╣
╚═╝ ╝╚╝ ╩ ╚═╝ ╩ ╩ ╩ ╩
---------------------";

const USAGE_TEXT: &str = "<STRING> ... Encodes and decodes text.";

const PROMPT: &str = "> ";

/// Shell commands, entered as `/NAME args...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    GetAlphabet,
    SetAlphabet,
    Status,
    SetRotorCount,
    SetWiring,
    GetOffsets,
    SetOffsets,
    ToggleUppercase,
    End,
}

impl Command {
    const ALL: [Command; 9] = [
        Command::GetAlphabet,
        Command::SetAlphabet,
        Command::Status,
        Command::SetRotorCount,
        Command::SetWiring,
        Command::GetOffsets,
        Command::SetOffsets,
        Command::ToggleUppercase,
        Command::End,
    ];

    fn parse(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "GCS" => Some(Command::GetAlphabet),
            "SCS" => Some(Command::SetAlphabet),
            "GSI" => Some(Command::Status),
            "SRN" => Some(Command::SetRotorCount),
            "SRP" => Some(Command::SetWiring),
            "GRO" => Some(Command::GetOffsets),
            "SRO" => Some(Command::SetOffsets),
            "TUC" => Some(Command::ToggleUppercase),
            "END" => Some(Command::End),
            _ => None,
        }
    }

    /// Number of arguments after the command name
    fn arity(self) -> usize {
        match self {
            Command::GetAlphabet | Command::Status | Command::GetOffsets | Command::End => 0,
            Command::SetWiring => 2,
            _ => 1,
        }
    }

    fn usage(self) -> &'static str {
        match self {
            Command::GetAlphabet => "/GCS ... Get the character set.",
            Command::SetAlphabet => "/SCS <STRING> ... Set the character set.",
            Command::Status => "/GSI ... Get all rotor / reflector information.",
            Command::SetRotorCount => "/SRN <INT> ... Set the number of rotors.",
            Command::SetWiring => {
                "/SRP <INT> <STRING> ... Set the rotor / reflector character set pair (0th: reflector, 1st~: rotor)."
            }
            Command::GetOffsets => "/GRO ... Get the rotor offset.",
            Command::SetOffsets => "/SRO <STRING> ... Set the rotor offset.",
            Command::ToggleUppercase => {
                "/TUC <BOOLEAN> ... Set the function to convert lowercase to uppercase."
            }
            Command::End => "/END ... End the program.",
        }
    }
}

/// What the shell wants printed after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep reading
    Output(String),
    /// Nothing to print
    Silent,
    /// Print this and stop
    Exit(String),
}

/// Line-oriented command shell around one machine
pub struct Shell {
    scrambler: Scrambler,
    uppercase: bool,
}

impl Shell {
    pub fn new(config: &MachineConfig) -> Result<Self> {
        Ok(Self::with_scrambler(config.build()?, config.uppercase))
    }

    pub fn with_scrambler(scrambler: Scrambler, uppercase: bool) -> Self {
        Self {
            scrambler,
            uppercase,
        }
    }

    pub fn scrambler(&self) -> &Scrambler {
        &self.scrambler
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    /// Banner followed by one usage line per command
    pub fn help() -> String {
        let mut text = format!("{}\n{}\n", BANNER, USAGE_TEXT);
        for command in Command::ALL {
            text.push_str(command.usage());
            text.push('\n');
        }
        text
    }

    /// Handle one line of input
    pub fn execute(&mut self, line: &str) -> Reply {
        if line.is_empty() {
            return Reply::Silent;
        }
        let line = if self.uppercase {
            line.to_uppercase()
        } else {
            line.to_string()
        };

        match line.strip_prefix('/') {
            Some(command) => self.run_command(command),
            None => Reply::Output(self.scrambler.encode_text(&line)),
        }
    }

    /// Read lines until `/END` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        write!(output, "{}", Self::help())?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            match self.execute(line.trim_end_matches(&['\r', '\n'][..])) {
                Reply::Output(text) => writeln!(output, "{}", text)?,
                Reply::Silent => {}
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    return Ok(());
                }
            }
        }
    }

    fn run_command(&mut self, text: &str) -> Reply {
        let args = split_arguments(text);
        let Some(command) = args.first().and_then(|name| Command::parse(name)) else {
            return Reply::Output("Command does not exist.".into());
        };
        if args.len() != command.arity() + 1 {
            // END exits even when misused
            return match command {
                Command::End => Reply::Exit(command.usage().into()),
                _ => Reply::Output(command.usage().into()),
            };
        }

        match command {
            Command::GetAlphabet => Reply::Output(self.scrambler.alphabet().to_string()),
            Command::SetAlphabet => self.set_alphabet(&args[1]),
            Command::Status => Reply::Output(self.scrambler.status()),
            Command::SetRotorCount => self.set_rotor_count(&args[1]),
            Command::SetWiring => self.set_wiring(&args[1], &args[2]),
            Command::GetOffsets => Reply::Output(self.scrambler.offset_label()),
            Command::SetOffsets => self.set_offsets(&args[1]),
            Command::ToggleUppercase => self.toggle_uppercase(&args[1]),
            Command::End => Reply::Exit("Good bye.".into()),
        }
    }

    fn set_alphabet(&mut self, symbols: &str) -> Reply {
        match self.scrambler.set_alphabet(symbols) {
            Ok(()) => Reply::Silent,
            Err(_) => Reply::Output(
                "The character set must be a multiple of 2 in length and contain no duplicate characters."
                    .into(),
            ),
        }
    }

    fn set_rotor_count(&mut self, count: &str) -> Reply {
        let result = parse_digits::<i64>(count).map(|n| self.scrambler.set_rotor_count(n));
        match result {
            Some(Ok(())) => Reply::Silent,
            _ => Reply::Output("The number of rotors must be a positive integer.".into()),
        }
    }

    fn set_wiring(&mut self, slot: &str, wiring: &str) -> Reply {
        let Some(slot) = parse_digits::<usize>(slot) else {
            return Reply::Output(
                "The rotor index must be an integer greater than or equal to 0.".into(),
            );
        };

        match self.scrambler.set_slot_wiring(slot, wiring) {
            Ok(()) => Reply::Silent,
            Err(_) if slot == REFLECTOR_SLOT => Reply::Output(
                "The character set pair consists of the character set, which must have corresponding relationships to each other."
                    .into(),
            ),
            Err(_) => Reply::Output(
                "The character set pair consists of the character set, which must be an unordered string."
                    .into(),
            ),
        }
    }

    fn set_offsets(&mut self, label: &str) -> Reply {
        match self.scrambler.set_offset_label(label) {
            Ok(()) => Reply::Silent,
            Err(_) => Reply::Output(
                "The rotor offset must be a string equal to the number of rotors, composed of characters from the character set."
                    .into(),
            ),
        }
    }

    fn toggle_uppercase(&mut self, value: &str) -> Reply {
        match value.to_uppercase().as_str() {
            "TRUE" | "T" => self.uppercase = true,
            "FALSE" | "F" => self.uppercase = false,
            _ => return Reply::Output("The boolean value must be \"TRUE\" or \"FALSE\".".into()),
        }
        Reply::Silent
    }
}

/// Parse a string made only of ASCII digits
fn parse_digits<T: std::str::FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
