use clap::{Parser, Subcommand};
use enigma::cli::{encode_once, show_status, Shell};
use enigma::{MachineConfig, Preset};
use std::io;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ENIGMA_VERSION");
const PROFILE: &str = env!("ENIGMA_PROFILE");
const GIT_HASH: &str = env!("ENIGMA_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "enigma")]
#[command(author, about = "Rotor cipher machine simulator", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Number of rotors
    #[arg(long, global = true, default_value_t = 3)]
    rotors: usize,

    /// Alphabet (even length, no repeated symbols; default A-Z)
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Wiring preset installed after the rotors are generated
    #[arg(long, global = true, default_value = "enigma-i", value_parser = parse_preset)]
    preset: Preset,

    /// Initial rotor offsets, one alphabet symbol per rotor
    #[arg(long, global = true)]
    offsets: Option<String>,

    /// Do not convert input to uppercase
    #[arg(long, global = true)]
    keep_case: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode or decode text (the operation is its own inverse)
    #[command(alias = "e")]
    Encode {
        /// Text to process; several words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Interactive command shell
    #[command(alias = "s")]
    Shell,

    /// Show rotor and reflector tables
    #[command(alias = "i")]
    Status {
        /// Print the machine settings as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("enigma {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let config = MachineConfig {
        rotors: cli.rotors,
        alphabet: cli.alphabet,
        preset: cli.preset,
        offsets: cli.offsets,
        uppercase: !cli.keep_case,
    };

    let result = match command {
        Commands::Encode { text } => encode_once(&config, &text.join(" ")).map(|cipher| {
            println!("{}", cipher);
        }),

        Commands::Shell => Shell::new(&config).and_then(|mut shell| {
            let stdin = io::stdin();
            shell.run(stdin.lock(), io::stdout())
        }),

        Commands::Status { json } => show_status(&config, json).map(|status| {
            print!("{}", status);
            if json {
                println!();
            }
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
