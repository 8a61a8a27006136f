//! Forge dependency extractor CLI entrypoint.
//!
//! This binary reads a Forge installer archive, extracts the library
//! download descriptors from its embedded manifests, and writes them as a
//! JSON array to the requested output.

use clap::Parser;
use std::io::Write;

use forge_deps::cli::Cli;
use forge_deps::error::Result;
use forge_deps::extract::extract;
use forge_deps::output::{OutputTarget, encode};

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let descriptors = extract(&cli.installer)?;
    let payload = encode(&descriptors, cli.pretty)?;
    OutputTarget::from_arg(&cli.output).write(&payload)?;

    if !cli.quiet {
        write_stderr_line(
            stderr,
            format!(
                "Extracted {} library descriptor(s) from {}",
                descriptors.len(),
                cli.installer
            ),
        );
    }

    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
