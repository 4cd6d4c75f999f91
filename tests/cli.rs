use std::error::Error;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn enigma_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_enigma"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(enigma_command().args(args).output()?)
}

fn run_with_input(args: &[&str], input: &str) -> Result<Output, Box<dyn Error>> {
    let mut child = enigma_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(input.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.starts_with("enigma "),
        "unexpected version line: {}",
        stdout
    );
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = run(&[])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage"), "help text missing: {}", stdout);
    assert!(stdout.contains("encode"));
    Ok(())
}

#[test]
fn encode_round_trip() -> Result<(), Box<dyn Error>> {
    let encode = run(&["encode", "hello", "world"])?;
    assert!(
        encode.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&encode.stderr)
    );
    assert_eq!(String::from_utf8(encode.stdout)?, "RWXBI YPEAJ\n");

    let decode = run(&["encode", "RWXBI YPEAJ"])?;
    assert_eq!(String::from_utf8(decode.stdout)?, "HELLO WORLD\n");
    Ok(())
}

#[test]
fn encode_rejects_bad_offsets() -> Result<(), Box<dyn Error>> {
    let output = run(&["--offsets", "A1A", "encode", "text"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error: Symbol '1' is not in the alphabet"), "{}", stderr);
    Ok(())
}

#[test]
fn status_json_lists_rotors() -> Result<(), Box<dyn Error>> {
    let output = run(&["status", "--json", "--rotors", "2", "--preset", "seeded"])?;
    assert!(output.status.success());
    let settings: enigma::MachineSettings = serde_json::from_slice(&output.stdout)?;
    assert_eq!(settings.rotors.len(), 2);
    assert_eq!(settings.alphabet, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    Ok(())
}

#[test]
fn unknown_preset_is_rejected_by_parser() -> Result<(), Box<dyn Error>> {
    let output = run(&["--preset", "m4", "status"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Unknown preset: m4"));
    Ok(())
}

#[test]
fn shell_session() -> Result<(), Box<dyn Error>> {
    let script = "helloworld\n/GRO\n/SRO AAA\nRWXBIYPEAJ\n/END\n";
    let output = run_with_input(&["shell"], script)?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("/GCS ... Get the character set."));
    assert!(stdout.contains("> RWXBIYPEAJ\n"));
    assert!(stdout.contains("> KAA\n"));
    assert!(stdout.contains("> HELLOWORLD\n"));
    assert!(stdout.ends_with("> Good bye.\n"));
    Ok(())
}
