//! Binary entrypoint for the `proplink` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match proplink::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
